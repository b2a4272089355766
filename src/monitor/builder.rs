//! Builder for constructing monitors.

use crate::monitor::config::{MonitorConfig, DEFAULT_HISTORY_LIMIT};
use crate::monitor::error::MonitorError;
use crate::monitor::machine::Monitor;

/// Builder for constructing monitors with a fluent API.
///
/// # Example
///
/// ```rust
/// use crossroad::monitor::Monitor;
///
/// let monitor = Monitor::builder().period(10).history_limit(16).build().unwrap();
/// assert_eq!(monitor.period(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct MonitorBuilder {
    period: Option<u32>,
    history_limit: usize,
}

impl MonitorBuilder {
    pub fn new() -> Self {
        Self {
            period: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Set the period (required).
    pub fn period(mut self, period: u32) -> Self {
        self.period = Some(period);
        self
    }

    /// Cap the lifecycle history; 0 disables it.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the monitor in the `Init` state.
    /// Returns an error if no period was set.
    pub fn build(self) -> Result<Monitor, MonitorError> {
        let period = self.period.ok_or(MonitorError::MissingPeriod)?;
        Ok(Monitor::with_config(MonitorConfig {
            period,
            history_limit: self.history_limit,
        }))
    }
}

impl Default for MonitorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
