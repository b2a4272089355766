//! Core lifecycle types and logic.
//!
//! This module contains the pure part of the monitor:
//! - State definitions via the `State` trait and `MonitorState`
//! - The total `(state, event)` transition table
//! - Immutable history of lifecycle transitions
//!
//! Nothing in here logs, counts or touches the ledger; the monitor applies
//! the outcomes.

mod history;
mod state;
mod table;

pub use history::{StateHistory, StateTransition};
pub use state::{MonitorState, State};
pub use table::{transition, LifecycleEvent, Step};
