//! centwise command-line host.
//!
//! Reads JSON snapshots, runs the core computations and prints JSON to
//! stdout. Logs go to stderr.

mod input;

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use centwise_core::budget::{BudgetAggregator, StatusThresholds};
use centwise_core::recurring::{ReminderGate, UpcomingCharge, UpcomingCharges, select_upcoming_with};
use centwise_shared::config::LoggingConfig;
use centwise_shared::types::{PageRequest, PageResponse};
use centwise_shared::{AppConfig, AppError, AppResult, DueDateProjection};

#[derive(Debug, Parser)]
#[command(name = "centwise", version, about = "Upcoming charges and budget rollups")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List recurring charges coming due
    Upcoming {
        /// JSON array of recurring streams
        #[arg(long)]
        streams: PathBuf,
        /// Reference date (YYYY-MM-DD), defaults to today (UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Look-ahead window in days
        #[arg(long, allow_negative_numbers = true)]
        window: Option<i64>,
        /// Page to show, 1-indexed
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// When the reminder was last dismissed (RFC 3339)
        #[arg(long)]
        last_dismissed_at: Option<DateTime<Utc>>,
        /// Advance stale last dates by the stream frequency
        #[arg(long)]
        advance: bool,
    },
    /// Aggregate a budget matrix
    Budget {
        /// JSON budget matrix
        #[arg(long)]
        matrix: PathBuf,
    },
}

/// One page of upcoming charges plus the figures for the whole selection.
#[derive(Debug, Serialize)]
struct UpcomingOutput {
    total_amount: Decimal,
    count: usize,
    snoozed: bool,
    page: PageResponse<UpcomingCharge>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    match run(cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            std::process::exit(err.exit_code());
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(command: Command, config: &AppConfig) -> AppResult<String> {
    match command {
        Command::Upcoming {
            streams,
            date,
            window,
            page,
            last_dismissed_at,
            advance,
        } => {
            let now = Utc::now();
            let gate = ReminderGate::from_hours(config.upcoming.reminder_snooze_hours)?;
            let request = PageRequest::new(page, config.upcoming.page_size);

            if !gate.is_due(now, last_dismissed_at) {
                info!(?last_dismissed_at, "Upcoming charges reminder is snoozed");
                return render(&upcoming_output(&UpcomingCharges::default(), request, true));
            }

            let records = input::read_streams(&streams)?;
            let projection = if advance {
                DueDateProjection::AdvanceByFrequency
            } else {
                config.upcoming.projection
            };
            let reference_date = date.unwrap_or_else(|| now.date_naive());
            let window_days = window.unwrap_or(config.upcoming.window_days);

            let charges = select_upcoming_with(&records, reference_date, window_days, projection)?;
            info!(
                %reference_date,
                window_days,
                selected = charges.len(),
                total_amount = %charges.total_amount,
                "Selected upcoming charges"
            );

            render(&upcoming_output(&charges, request, false))
        }
        Command::Budget { matrix } => {
            let thresholds = StatusThresholds::from_config(&config.budget)?;
            let matrix = input::read_matrix(&matrix)?;

            let report = BudgetAggregator::with_thresholds(thresholds).aggregate(&matrix)?;
            info!(
                periods = report.per_period.len(),
                total_planned = %report.overall.total_planned,
                total_actual = %report.overall.total_actual,
                "Aggregated budget"
            );

            render(&report)
        }
    }
}

fn upcoming_output(charges: &UpcomingCharges, request: PageRequest, snoozed: bool) -> UpcomingOutput {
    UpcomingOutput {
        total_amount: charges.total_amount,
        count: charges.len(),
        snoozed,
        page: charges.page(request),
    }
}

fn render<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|err| AppError::Parse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::path::Path;
    use tempfile::tempdir;

    const STREAMS: &str = r#"[
        {"stream_id": "rent", "last_amount": "-1450", "last_date": "2026-08-20",
         "frequency": "MONTHLY", "active": true},
        {"stream_id": "gym", "last_amount": "-39", "last_date": "2026-10-25",
         "frequency": "MONTHLY", "active": true}
    ]"#;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn upcoming(streams: &Path, last_dismissed_at: Option<DateTime<Utc>>, advance: bool) -> Command {
        Command::Upcoming {
            streams: streams.to_path_buf(),
            date: Some(reference_date()),
            window: Some(13),
            page: 1,
            last_dismissed_at,
            advance,
        }
    }

    fn run_json(command: Command, config: &AppConfig) -> Value {
        serde_json::from_str(&run(command, config).unwrap()).unwrap()
    }

    fn due_dates(output: &Value) -> Vec<&str> {
        output["page"]["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|charge| charge["due_date"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_snoozed_reminder_prints_empty_result() {
        // The streams file is never read while snoozed.
        let missing = Path::new("does-not-exist.json");

        let output = run_json(upcoming(missing, Some(Utc::now()), false), &AppConfig::default());

        assert_eq!(output["snoozed"], Value::Bool(true));
        assert_eq!(output["count"], 0);
        assert!(output["page"]["data"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_expired_snooze_selects_charges() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("streams.json");
        std::fs::write(&path, STREAMS).unwrap();
        let dismissed = Utc::now() - chrono::Duration::hours(48);

        let output = run_json(upcoming(&path, Some(dismissed), false), &AppConfig::default());

        assert_eq!(output["snoozed"], Value::Bool(false));
        assert_eq!(output["count"], 2);
    }

    #[test]
    fn test_advance_flag_overrides_literal_projection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("streams.json");
        std::fs::write(&path, STREAMS).unwrap();
        let config = AppConfig::default();

        let literal = run_json(upcoming(&path, None, false), &config);
        assert_eq!(due_dates(&literal), vec!["2026-08-20", "2026-10-25"]);

        let advanced = run_json(upcoming(&path, None, true), &config);
        assert_eq!(due_dates(&advanced), vec!["2026-10-20", "2026-10-25"]);
    }

    #[test]
    fn test_configured_projection_used_without_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("streams.json");
        std::fs::write(&path, STREAMS).unwrap();
        let mut config = AppConfig::default();
        config.upcoming.projection = DueDateProjection::AdvanceByFrequency;

        let output = run_json(upcoming(&path, None, false), &config);

        assert_eq!(due_dates(&output), vec!["2026-10-20", "2026-10-25"]);
    }

    #[test]
    fn test_page_size_comes_from_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("streams.json");
        std::fs::write(&path, STREAMS).unwrap();
        let mut config = AppConfig::default();
        config.upcoming.page_size = 1;

        let output = run_json(upcoming(&path, None, false), &config);

        assert_eq!(output["count"], 2);
        assert_eq!(due_dates(&output), vec!["2026-08-20"]);
        assert_eq!(output["page"]["meta"]["has_more"], Value::Bool(true));
    }

    #[test]
    fn test_page_zero_rejected_by_parser() {
        let parsed = Cli::try_parse_from(["centwise", "upcoming", "--streams", "s.json", "--page", "0"]);

        assert!(parsed.is_err());
    }

    #[test]
    fn test_budget_overflow_is_an_app_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("budget.json");
        std::fs::write(
            &path,
            r#"{"periods": [{"label": "Week 1", "categories": {
                "food": {"planned": "0.0000000000000000000000000001", "actual": "1000"}
            }}]}"#,
        )
        .unwrap();

        let err = run(Command::Budget { matrix: path }, &AppConfig::default()).unwrap_err();

        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
