//! Results of feeding an observation to the monitor.

use crate::core::MonitorState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an observation did not reach the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The monitor was not `Active`.
    NotActive { state: MonitorState },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotActive { state } => write!(f, "not active (state: {state})"),
        }
    }
}

/// Outcome of `Monitor::observe`.
///
/// Rejection is informational; it is never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservationResult {
    /// Ignored, ledger untouched
    Rejected(RejectReason),

    /// First sighting since the last reset; count is 1
    Inserted { count: u64 },

    /// Repeat sighting; carries the new count
    Incremented { count: u64 },
}

impl ObservationResult {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The entry's count after the observation, if it was accepted.
    pub fn count(&self) -> Option<u64> {
        match self {
            Self::Rejected(_) => None,
            Self::Inserted { count } | Self::Incremented { count } => Some(*count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_has_no_count() {
        let result = ObservationResult::Rejected(RejectReason::NotActive {
            state: MonitorState::Stopped,
        });
        assert!(result.is_rejected());
        assert_eq!(result.count(), None);
    }

    #[test]
    fn accepted_results_carry_count() {
        assert_eq!(ObservationResult::Inserted { count: 1 }.count(), Some(1));
        assert_eq!(ObservationResult::Incremented { count: 4 }.count(), Some(4));
        assert!(!ObservationResult::Incremented { count: 4 }.is_rejected());
    }

    #[test]
    fn reject_reason_mentions_not_active() {
        let reason = RejectReason::NotActive {
            state: MonitorState::Init,
        };
        assert_eq!(reason.to_string(), "not active (state: Init)");
    }
}
