//! Ledger entries.

use super::key::LedgerKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Running pass count for one (identity, category) pair.
///
/// Created with a count of 1 on first sighting. The count only grows until
/// the whole ledger is cleared. Deserializing an entry with a count of 0
/// fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryRecord")]
pub struct LedgerEntry {
    identity: String,
    category: String,
    count: u64,
}

/// Unchecked wire form of a [`LedgerEntry`].
#[derive(Deserialize)]
struct EntryRecord {
    identity: String,
    category: String,
    count: u64,
}

/// A restored entry claimed zero passes.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("ledger entry {identity} ({category}) has count 0, counts start at 1")]
pub struct ZeroCountError {
    pub identity: String,
    pub category: String,
}

impl TryFrom<EntryRecord> for LedgerEntry {
    type Error = ZeroCountError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        if record.count == 0 {
            return Err(ZeroCountError {
                identity: record.identity,
                category: record.category,
            });
        }
        Ok(Self {
            identity: record.identity,
            category: record.category,
            count: record.count,
        })
    }
}

impl LedgerEntry {
    pub(crate) fn first_sighting(key: &LedgerKey) -> Self {
        Self {
            identity: key.identity().to_owned(),
            category: key.category().to_owned(),
            count: 1,
        }
    }

    pub(crate) fn increment(&mut self) -> u64 {
        self.count += 1;
        self.count
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Number of passes, always at least 1.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn key(&self) -> LedgerKey {
        LedgerKey::new(self.identity.as_str(), self.category.as_str())
    }
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.count == 1 { "pass" } else { "passes" };
        write!(f, "{} ({}): {} {}", self.identity, self.category, self.count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sighting_counts_one() {
        let entry = LedgerEntry::first_sighting(&LedgerKey::new("ABC-012", "Car"));
        assert_eq!(entry.count(), 1);
        assert_eq!(entry.key(), LedgerKey::new("ABC-012", "Car"));
    }

    #[test]
    fn increment_returns_new_count() {
        let mut entry = LedgerEntry::first_sighting(&LedgerKey::new("ABC-012", "Car"));
        assert_eq!(entry.increment(), 2);
        assert_eq!(entry.increment(), 3);
        assert_eq!(entry.count(), 3);
    }

    #[test]
    fn display_reports_passes() {
        let mut entry = LedgerEntry::first_sighting(&LedgerKey::new("ABC-011", "Bicycle"));
        assert_eq!(entry.to_string(), "ABC-011 (Bicycle): 1 pass");
        entry.increment();
        assert_eq!(entry.to_string(), "ABC-011 (Bicycle): 2 passes");
    }

    #[test]
    fn serializes_as_flat_record() {
        let entry = LedgerEntry::first_sighting(&LedgerKey::new("ABC-014", "Scooter"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"identity": "ABC-014", "category": "Scooter", "count": 1})
        );
    }

    #[test]
    fn deserialize_keeps_positive_count() {
        let raw = r#"{"identity": "ABC-012", "category": "Car", "count": 3}"#;
        let entry: LedgerEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.count(), 3);
        assert_eq!(entry.key(), LedgerKey::new("ABC-012", "Car"));
    }

    #[test]
    fn deserialize_rejects_zero_count() {
        let raw = r#"{"identity": "ABC-012", "category": "Car", "count": 0}"#;
        let err = serde_json::from_str::<LedgerEntry>(raw).unwrap_err();
        assert!(err.to_string().contains("counts start at 1"));
    }
}
