//! Ledger keys.

use crate::vehicle::VehicleObservation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when rendering a key as `identity-category`.
pub const KEY_SEPARATOR: &str = "-";

/// Key of a ledger entry, derived from identity and category.
///
/// Equality and hashing are structural over both parts, so `("A-B", "C")`
/// and `("A", "B-C")` are different keys even though they render the same.
///
/// # Example
///
/// ```rust
/// use crossroad::ledger::LedgerKey;
///
/// let key = LedgerKey::new("ABC-011", "Bicycle");
/// assert_eq!(key.to_string(), "ABC-011-Bicycle");
/// assert_ne!(LedgerKey::new("A-B", "C"), LedgerKey::new("A", "B-C"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedgerKey {
    identity: String,
    category: String,
}

impl LedgerKey {
    pub fn new(identity: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            category: category.into(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl From<&VehicleObservation> for LedgerKey {
    fn from(observation: &VehicleObservation) -> Self {
        Self::new(observation.identity(), observation.category())
    }
}

impl fmt::Display for LedgerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.identity, KEY_SEPARATOR, self.category)
    }
}
