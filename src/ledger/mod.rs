//! Vehicle pass ledger.
//!
//! A dedup counting structure keyed by (identity, category):
//! - O(1) average lookup-or-insert through a hash index
//! - Enumeration in first-insertion order
//! - Wholesale `clear`, no per-entry removal
//!
//! The ledger knows nothing about monitor state; the monitor decides when
//! observations reach it.

mod entry;
mod key;
mod store;

pub use entry::{LedgerEntry, ZeroCountError};
pub use key::{LedgerKey, KEY_SEPARATOR};
pub use store::{Entries, Ledger};
