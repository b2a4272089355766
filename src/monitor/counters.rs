//! Telemetry counters for a monitor.

use serde::{Deserialize, Serialize};

/// Lifetime totals of what the monitor has seen.
///
/// Unlike the error counter these are not cleared by a reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorCounters {
    pub observations_accepted: u64,
    pub observations_rejected: u64,
    pub entries_inserted: u64,
    pub entries_incremented: u64,
    pub faults_signalled: u64,
    pub resets: u64,
}
