//! Lifecycle events and the monitor's transition table.
//!
//! The table is a pure, total function of `(state, event)`. Every pair has an
//! outcome; pairs without a listed transition are `Step::Ignored`.

use super::state::MonitorState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A no-argument lifecycle signal sent to the monitor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum LifecycleEvent {
    Start,
    Stop,
    Reset,
    Fault,
}

impl LifecycleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Stop => "Stop",
            Self::Reset => "Reset",
            Self::Fault => "Fault",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of applying a lifecycle event to a state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    /// The monitor enters this state. May equal the current one (Reset from Active).
    Enter(MonitorState),

    /// Fault while already in `Error`: no state change, error counter increments.
    FaultRepeated,

    /// No transition for this pair.
    Ignored,
}

/// Transition table for the monitor lifecycle.
///
/// | state            | Start  | Stop    | Reset  | Fault          |
/// |------------------|--------|---------|--------|----------------|
/// | Init             | Active | -       | Active | Error          |
/// | Active           | -      | Stopped | Active | Error          |
/// | Error            | -      | -       | Active | FaultRepeated  |
/// | Stopped          | -      | -       | Active | -              |
///
/// # Example
///
/// ```rust
/// use crossroad::core::{transition, LifecycleEvent, MonitorState, Step};
///
/// assert_eq!(
///     transition(MonitorState::Init, LifecycleEvent::Start),
///     Step::Enter(MonitorState::Active)
/// );
/// assert_eq!(
///     transition(MonitorState::Stopped, LifecycleEvent::Fault),
///     Step::Ignored
/// );
/// ```
pub fn transition(state: MonitorState, event: LifecycleEvent) -> Step {
    use LifecycleEvent::*;
    use MonitorState::*;

    match (state, event) {
        (_, Reset) => Step::Enter(Active),
        (Init, Start) => Step::Enter(Active),
        (Active, Stop) => Step::Enter(Stopped),
        (Init | Active, Fault) => Step::Enter(Error),
        (Error, Fault) => Step::FaultRepeated,
        _ => Step::Ignored,
    }
}
