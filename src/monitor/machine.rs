//! The crossroad monitor: lifecycle state machine in front of a ledger.

use crate::core::{
    transition, LifecycleEvent, MonitorState, State, StateHistory, StateTransition, Step,
};
use crate::ledger::{Entries, Ledger, LedgerEntry, LedgerKey};
use crate::monitor::builder::MonitorBuilder;
use crate::monitor::config::MonitorConfig;
use crate::monitor::counters::MonitorCounters;
use crate::monitor::outcome::{ObservationResult, RejectReason};
use crate::vehicle::VehicleObservation;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable snapshot of a monitor for callers that render statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorReport {
    pub monitor: Uuid,
    pub period: u32,
    pub state: MonitorState,
    pub error_count: u64,
    pub counters: MonitorCounters,
    /// Ledger entries in first-insertion order
    pub entries: Vec<LedgerEntry>,
}

/// Tracks vehicle passes at one intersection.
///
/// Owns the lifecycle state, the error counter and the ledger. Observations
/// only reach the ledger while the monitor is `Active`. The monitor is
/// synchronous; a concurrent host must guard the whole value with one lock.
///
/// # Example
///
/// ```rust
/// use crossroad::monitor::{Monitor, ObservationResult};
/// use crossroad::core::MonitorState;
///
/// let mut monitor = Monitor::new(10);
/// monitor.start();
///
/// assert_eq!(monitor.observe("ABC-012", "Car"), ObservationResult::Inserted { count: 1 });
/// assert_eq!(monitor.observe("ABC-012", "Car"), ObservationResult::Incremented { count: 2 });
///
/// monitor.raise_fault();
/// assert_eq!(monitor.state(), MonitorState::Error);
/// assert!(monitor.observe("ABC-012", "Car").is_rejected());
///
/// monitor.reset();
/// assert_eq!(monitor.statistics().count(), 0);
/// ```
#[derive(Debug)]
pub struct Monitor {
    id: Uuid,
    config: MonitorConfig,
    state: MonitorState,
    error_count: u64,
    ledger: Ledger,
    history: StateHistory<MonitorState>,
    counters: MonitorCounters,
}

impl Monitor {
    /// Create a monitor in the `Init` state with the given period.
    pub fn new(period: u32) -> Self {
        Self::with_config(MonitorConfig::new(period))
    }

    pub fn with_config(config: MonitorConfig) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(monitor = %id, period = config.period, "Monitor created");
        Self {
            id,
            config,
            state: MonitorState::Init,
            error_count: 0,
            ledger: Ledger::new(),
            history: StateHistory::new(),
            counters: MonitorCounters::default(),
        }
    }

    pub fn builder() -> MonitorBuilder {
        MonitorBuilder::new()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn period(&self) -> u32 {
        self.config.period
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// `Init -> Active`; no-op from any other state.
    pub fn start(&mut self) {
        self.apply(LifecycleEvent::Start);
    }

    /// `Active -> Stopped`; no-op from any other state.
    pub fn stop(&mut self) {
        self.apply(LifecycleEvent::Stop);
    }

    /// Enter `Active` from any state, zero the error counter and clear the
    /// ledger. The only way out of `Error` or `Stopped`.
    pub fn reset(&mut self) {
        self.apply(LifecycleEvent::Reset);
        self.error_count = 0;
        self.ledger.clear();
        self.counters.resets += 1;
        tracing::info!(monitor = %self.id, "Monitor reset");
    }

    /// Signal an operational fault.
    ///
    /// `Init` and `Active` move to `Error`. A fault while already in `Error`
    /// increments the error counter and emits a diagnostic. Ignored while
    /// `Stopped`.
    pub fn raise_fault(&mut self) {
        self.counters.faults_signalled += 1;
        self.apply(LifecycleEvent::Fault);
    }

    /// Record a sighting of `identity` with `category`.
    pub fn observe(&mut self, identity: &str, category: &str) -> ObservationResult {
        self.record(LedgerKey::new(identity, category))
    }

    pub fn observe_vehicle(&mut self, vehicle: &VehicleObservation) -> ObservationResult {
        self.record(LedgerKey::from(vehicle))
    }

    pub fn error_count(&self) -> u64 {
        self.error_count
    }

    /// Ledger entries in first-insertion order.
    pub fn statistics(&self) -> Entries<'_> {
        self.ledger.entries()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Lifecycle transitions recorded so far. Empty when history is disabled.
    pub fn history(&self) -> &StateHistory<MonitorState> {
        &self.history
    }

    pub fn counters(&self) -> &MonitorCounters {
        &self.counters
    }

    pub fn report(&self) -> MonitorReport {
        MonitorReport {
            monitor: self.id,
            period: self.config.period,
            state: self.state,
            error_count: self.error_count,
            counters: self.counters.clone(),
            entries: self.ledger.entries().cloned().collect(),
        }
    }

    fn apply(&mut self, event: LifecycleEvent) {
        match transition(self.state, event) {
            Step::Enter(next) => self.enter(next, event),
            Step::FaultRepeated => {
                self.error_count += 1;
                tracing::error!(
                    monitor = %self.id,
                    error_count = self.error_count,
                    "Fault signalled while monitor already in error"
                );
            }
            Step::Ignored => {
                tracing::debug!(
                    monitor = %self.id,
                    state = %self.state,
                    event = %event,
                    "Lifecycle event ignored"
                );
            }
        }
    }

    fn enter(&mut self, next: MonitorState, event: LifecycleEvent) {
        let from = self.state;
        if from == next {
            return;
        }

        self.state = next;
        if self.config.history_limit > 0 {
            let change = StateTransition {
                from,
                to: next,
                event,
                timestamp: Utc::now(),
            };
            self.history.push(change, self.config.history_limit);
        }

        if next.is_error() {
            tracing::warn!(monitor = %self.id, from = %from, "Monitor entered error state");
        } else if next.is_final() {
            tracing::info!(monitor = %self.id, "Monitor stopped, waiting for reset");
        } else {
            tracing::debug!(
                monitor = %self.id,
                from = %from,
                to = %next,
                event = %event,
                "Monitor state changed"
            );
        }
    }

    fn record(&mut self, key: LedgerKey) -> ObservationResult {
        if !self.state.accepts_observations() {
            self.counters.observations_rejected += 1;
            tracing::info!(
                monitor = %self.id,
                vehicle = %key,
                state = %self.state,
                "Monitor not active, observation ignored"
            );
            return ObservationResult::Rejected(RejectReason::NotActive { state: self.state });
        }

        self.counters.observations_accepted += 1;
        let (entry, inserted) = self.ledger.lookup_or_insert(key);
        let count = entry.count();

        if inserted {
            self.counters.entries_inserted += 1;
            tracing::info!(
                monitor = %self.id,
                identity = entry.identity(),
                category = entry.category(),
                "Vehicle added to ledger"
            );
            ObservationResult::Inserted { count }
        } else {
            self.counters.entries_incremented += 1;
            tracing::info!(
                monitor = %self.id,
                identity = entry.identity(),
                category = entry.category(),
                count,
                "Vehicle count incremented"
            );
            ObservationResult::Incremented { count }
        }
    }
}
