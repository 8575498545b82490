//! Shared types, errors, and configuration for centwise.
//!
//! This crate provides common pieces used by the core logic and the CLI host:
//! - Opaque typed IDs for records coming from the aggregation service
//! - Pagination over already-computed result lists
//! - Application-wide error type
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DueDateProjection};
pub use error::{AppError, AppResult};
