//! Core budgeting logic for centwise.
//!
//! This crate contains pure computations over in-memory snapshots with ZERO
//! I/O. Every function is a deterministic function of its arguments; the
//! current date and any dismissal timestamps are passed in explicitly.
//!
//! # Modules
//!
//! - `recurring` - Upcoming-charge selection over recurring streams
//! - `budget` - Budget matrix rollups and utilization status

pub mod budget;
pub mod recurring;
