//! Monitor configuration.

use crate::monitor::error::MonitorError;
use serde::{Deserialize, Serialize};

/// Transitions kept in the lifecycle history unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Settings a monitor is constructed with.
///
/// `period` is stored for a surrounding scheduler and never interpreted here.
///
/// # Example
///
/// ```rust
/// use crossroad::monitor::{MonitorConfig, DEFAULT_HISTORY_LIMIT};
///
/// let config = MonitorConfig::from_json(r#"{ "period": 10 }"#).unwrap();
/// assert_eq!(config.period, 10);
/// assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Reporting period, opaque to the monitor
    pub period: u32,

    /// Most recent lifecycle transitions to keep; 0 disables history
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl MonitorConfig {
    pub fn new(period: u32) -> Self {
        Self {
            period,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(raw: &str) -> Result<Self, MonitorError> {
        Ok(serde_json::from_str(raw)?)
    }
}
