//! The monitor: lifecycle state machine gating a vehicle ledger.
//!
//! # Key Concepts
//!
//! - **Lifecycle**: `start`, `stop`, `reset` and `raise_fault` drive the
//!   transition table in [`crate::core`]; none of them can fail
//! - **Observations**: accepted only while `Active`, otherwise reported as
//!   [`ObservationResult::Rejected`]
//! - **Telemetry**: every outcome is logged through `tracing` and tallied in
//!   [`MonitorCounters`]

mod builder;
mod config;
mod counters;
mod error;
mod machine;
mod outcome;

pub use builder::MonitorBuilder;
pub use config::{MonitorConfig, DEFAULT_HISTORY_LIMIT};
pub use counters::MonitorCounters;
pub use error::MonitorError;
pub use machine::{Monitor, MonitorReport};
pub use outcome::{ObservationResult, RejectReason};
