//! State trait and the monitor's lifecycle states.
//!
//! All state machine states implement this trait, which provides pure
//! methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for reporting
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final state: nothing but an explicit reset leaves it.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Lifecycle state of a crossroad monitor.
///
/// Exactly one value is live at a time and it is owned by the monitor.
///
/// # Example
///
/// ```rust
/// use crossroad::core::{MonitorState, State};
///
/// assert_eq!(MonitorState::Init.name(), "Init");
/// assert!(MonitorState::Stopped.is_final());
/// assert!(MonitorState::Error.is_error());
/// assert!(MonitorState::Active.accepts_observations());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum MonitorState {
    /// Constructed, not yet accepting traffic.
    Init,
    /// Accepting observations.
    Active,
    /// A fault was raised while idle or active.
    Error,
    /// Final until reset; faults and traffic are ignored.
    Stopped,
}

impl MonitorState {
    /// Only an active monitor forwards observations to its ledger.
    pub fn accepts_observations(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl State for MonitorState {
    fn name(&self) -> &str {
        match self {
            Self::Init => "Init",
            Self::Active => "Active",
            Self::Error => "Error",
            Self::Stopped => "Stopped",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Stopped)
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for MonitorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [MonitorState; 4] = [
        MonitorState::Init,
        MonitorState::Active,
        MonitorState::Error,
        MonitorState::Stopped,
    ];

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(MonitorState::Init.name(), "Init");
        assert_eq!(MonitorState::Active.name(), "Active");
        assert_eq!(MonitorState::Error.name(), "Error");
        assert_eq!(MonitorState::Stopped.name(), "Stopped");
    }

    #[test]
    fn only_stopped_is_final() {
        let finals: Vec<_> = ALL.iter().filter(|s| s.is_final()).collect();
        assert_eq!(finals, vec![&MonitorState::Stopped]);
    }

    #[test]
    fn only_error_is_error() {
        let errors: Vec<_> = ALL.iter().filter(|s| s.is_error()).collect();
        assert_eq!(errors, vec![&MonitorState::Error]);
    }

    #[test]
    fn only_active_accepts_observations() {
        for state in ALL {
            assert_eq!(
                state.accepts_observations(),
                state == MonitorState::Active,
                "{state}"
            );
        }
    }

    #[test]
    fn display_matches_name() {
        for state in ALL {
            assert_eq!(state.to_string(), state.name());
        }
    }

    #[test]
    fn state_serializes_correctly() {
        let state = MonitorState::Error;
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"Error\"");
        let deserialized: MonitorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
