//! Lifecycle transition history.
//!
//! Provides tracking of state changes over time. The monitor keeps one of
//! these as a bounded audit trail; it survives resets.

use super::state::State;
use super::table::LifecycleEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use crossroad::core::{LifecycleEvent, MonitorState, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: MonitorState::Init,
///     to: MonitorState::Active,
///     event: LifecycleEvent::Start,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.event, LifecycleEvent::Start);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// The signal that caused the change
    pub event: LifecycleEvent,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history with the transition appended and leaves
/// the original untouched. The monitor appends in place and trims the oldest
/// entries once its configured limit is reached.
///
/// # Example
///
/// ```rust
/// use crossroad::core::{LifecycleEvent, MonitorState, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: MonitorState::Init,
///         to: MonitorState::Active,
///         event: LifecycleEvent::Start,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: MonitorState::Active,
///         to: MonitorState::Stopped,
///         event: LifecycleEvent::Stop,
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(
///     path,
///     vec![&MonitorState::Init, &MonitorState::Active, &MonitorState::Stopped]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// Does not mutate the existing history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place, dropping the oldest ones so that at
    /// most `limit` remain. A `limit` of zero keeps nothing.
    pub(crate) fn push(&mut self, transition: StateTransition<S>, limit: usize) {
        self.transitions.push(transition);
        if self.transitions.len() > limit {
            let excess = self.transitions.len() - limit;
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition, then the `to`
    /// state of each transition in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// All transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
