//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Upcoming-charges configuration.
    #[serde(default)]
    pub upcoming: UpcomingConfig,
    /// Budget status configuration.
    #[serde(default)]
    pub budget: BudgetConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the due date of a recurring stream is projected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueDateProjection {
    /// The due date is the stream's last occurrence date, unchanged.
    #[default]
    LastOccurrence,
    /// The last occurrence is advanced by the stream frequency until it
    /// reaches the reference date.
    AdvanceByFrequency,
}

/// Upcoming-charges configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UpcomingConfig {
    /// Look-ahead window in days.
    #[serde(default = "default_window_days")]
    pub window_days: i64,
    /// Number of charges shown per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Due date projection mode.
    #[serde(default)]
    pub projection: DueDateProjection,
    /// Hours a dismissed reminder stays hidden.
    #[serde(default = "default_reminder_snooze_hours")]
    pub reminder_snooze_hours: i64,
}

fn default_window_days() -> i64 {
    13
}

fn default_page_size() -> u32 {
    6
}

fn default_reminder_snooze_hours() -> i64 {
    24
}

impl Default for UpcomingConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            page_size: default_page_size(),
            projection: DueDateProjection::default(),
            reminder_snooze_hours: default_reminder_snooze_hours(),
        }
    }
}

/// Budget status thresholds, as whole percentages of planned spend.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetConfig {
    /// Utilization at which a category turns to warning.
    #[serde(default = "default_warning_percent")]
    pub warning_percent: u32,
    /// Utilization at which a category turns to danger.
    #[serde(default = "default_danger_percent")]
    pub danger_percent: u32,
    /// Utilization above which a category is over budget.
    #[serde(default = "default_over_percent")]
    pub over_percent: u32,
}

fn default_warning_percent() -> u32 {
    70
}

fn default_danger_percent() -> u32 {
    90
}

fn default_over_percent() -> u32 {
    100
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            warning_percent: default_warning_percent(),
            danger_percent: default_danger_percent(),
            over_percent: default_over_percent(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "centwise=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from config files and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CENTWISE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.upcoming.window_days, 13);
        assert_eq!(config.upcoming.page_size, 6);
        assert_eq!(config.upcoming.projection, DueDateProjection::LastOccurrence);
        assert_eq!(config.upcoming.reminder_snooze_hours, 24);
        assert_eq!(config.budget.warning_percent, 70);
        assert_eq!(config.budget.danger_percent, 90);
        assert_eq!(config.budget.over_percent, 100);
        assert_eq!(config.logging.filter, "centwise=info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(
            [
                "CENTWISE__UPCOMING__WINDOW_DAYS",
                "CENTWISE__UPCOMING__PROJECTION",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.upcoming.window_days, 13);
                assert_eq!(config.upcoming.projection, DueDateProjection::LastOccurrence);
            },
        );
    }

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("CENTWISE__UPCOMING__WINDOW_DAYS", Some("20")),
                ("CENTWISE__UPCOMING__PROJECTION", Some("advance_by_frequency")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.upcoming.window_days, 20);
                assert_eq!(
                    config.upcoming.projection,
                    DueDateProjection::AdvanceByFrequency
                );
                assert_eq!(config.upcoming.page_size, 6);
            },
        );
    }

    #[test]
    fn test_partial_section_deserializes() {
        let config: AppConfig =
            serde_json::from_str(r#"{"budget": {"warning_percent": 60}}"#).unwrap();

        assert_eq!(config.budget.warning_percent, 60);
        assert_eq!(config.budget.danger_percent, 90);
        assert_eq!(config.upcoming.window_days, 13);
    }
}
