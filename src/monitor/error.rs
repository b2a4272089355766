//! Monitor construction errors.

use thiserror::Error;

/// Errors that can occur when building a monitor.
///
/// Lifecycle calls and observations never fail; only construction does.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Monitor period not specified. Call .period(value) before .build()")]
    MissingPeriod,

    #[error("Invalid monitor configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for MonitorError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
