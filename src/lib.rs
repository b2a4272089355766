//! Crossroad: vehicle pass monitoring for a single intersection
//!
//! The crate is the monitoring core only. Callers feed it lifecycle signals
//! and vehicle observations and read back counts; rendering and scheduling
//! stay with the host.
//!
//! # Core Concepts
//!
//! - **Lifecycle**: `Init -> Active -> Stopped`, with an `Error` excursion,
//!   driven by a total transition table
//! - **Ledger**: pass counts per (identity, category), O(1) lookup-or-insert,
//!   enumerated in first-sighting order
//! - **Faults**: the first fault moves the monitor to `Error`, repeats are
//!   counted; only a reset recovers
//!
//! # Example
//!
//! ```rust
//! use crossroad::{Monitor, MonitorState, ObservationResult, VehicleKind, VehicleObservation};
//!
//! let mut monitor = Monitor::new(10);
//! monitor.start();
//!
//! let bike = VehicleObservation::of_kind("ABC-011", VehicleKind::Bicycle);
//! assert_eq!(monitor.observe_vehicle(&bike), ObservationResult::Inserted { count: 1 });
//!
//! monitor.raise_fault();
//! assert_eq!(monitor.state(), MonitorState::Error);
//!
//! for entry in monitor.statistics() {
//!     println!("{entry}");
//! }
//! ```

pub mod core;
pub mod ledger;
pub mod monitor;
pub mod vehicle;

// Re-export commonly used types
pub use self::core::{LifecycleEvent, MonitorState, State};
pub use ledger::{Ledger, LedgerEntry, LedgerKey};
pub use monitor::{Monitor, MonitorConfig, MonitorError, ObservationResult, RejectReason};
pub use vehicle::{VehicleKind, VehicleObservation};
