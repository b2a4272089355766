//! Deduplicating, insertion-ordered counting ledger.

use super::entry::LedgerEntry;
use super::key::LedgerKey;
use std::collections::hash_map::{self, HashMap};
use std::iter::FusedIterator;
use std::slice;

/// Pass counts keyed by (identity, category).
///
/// Entries live in a `Vec` in first-insertion order; the index maps each key
/// to its position. Entries are never removed individually, so positions
/// stay valid until `clear`.
///
/// # Example
///
/// ```rust
/// use crossroad::ledger::{Ledger, LedgerKey};
///
/// let mut ledger = Ledger::new();
/// let (entry, inserted) = ledger.lookup_or_insert(LedgerKey::new("ABC-012", "Car"));
/// assert!(inserted);
/// assert_eq!(entry.count(), 1);
///
/// let (entry, inserted) = ledger.lookup_or_insert(LedgerKey::new("ABC-012", "Car"));
/// assert!(!inserted);
/// assert_eq!(entry.count(), 2);
/// assert_eq!(ledger.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
    index: HashMap<LedgerKey, usize>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the entry for `key`, or append a new one with count 1.
    ///
    /// Returns the entry and whether it was newly inserted.
    pub fn lookup_or_insert(&mut self, key: LedgerKey) -> (&LedgerEntry, bool) {
        match self.index.entry(key) {
            hash_map::Entry::Occupied(slot) => {
                let entry = &mut self.entries[*slot.get()];
                entry.increment();
                (&*entry, false)
            }
            hash_map::Entry::Vacant(slot) => {
                let position = self.entries.len();
                self.entries.push(LedgerEntry::first_sighting(slot.key()));
                slot.insert(position);
                (&self.entries[position], true)
            }
        }
    }

    pub fn get(&self, key: &LedgerKey) -> Option<&LedgerEntry> {
        self.index.get(key).map(|&position| &self.entries[position])
    }

    /// Entries in first-insertion order. Each call starts a fresh traversal.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.entries.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry and empty the index.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a LedgerEntry;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Insertion-ordered traversal over ledger entries.
#[derive(Clone, Debug)]
pub struct Entries<'a> {
    inner: slice::Iter<'a, LedgerEntry>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a LedgerEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(identity: &str, category: &str) -> LedgerKey {
        LedgerKey::new(identity, category)
    }

    fn snapshot(ledger: &Ledger) -> Vec<(String, String, u64)> {
        ledger
            .entries()
            .map(|e| (e.identity().to_owned(), e.category().to_owned(), e.count()))
            .collect()
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.entries().count(), 0);
    }

    #[test]
    fn repeat_key_increments_single_entry() {
        let mut ledger = Ledger::new();
        ledger.lookup_or_insert(key("ABC-012", "Car"));
        let (entry, inserted) = ledger.lookup_or_insert(key("ABC-012", "Car"));

        assert!(!inserted);
        assert_eq!(entry.count(), 2);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn same_identity_other_category_is_new_entry() {
        let mut ledger = Ledger::new();
        ledger.lookup_or_insert(key("ABC-011", "Car"));
        let (_, inserted) = ledger.lookup_or_insert(key("ABC-011", "Bicycle"));

        assert!(inserted);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn order_is_first_insertion_and_stable_across_increments() {
        let mut ledger = Ledger::new();
        ledger.lookup_or_insert(key("ABC-011", "Bicycle"));
        ledger.lookup_or_insert(key("ABC-012", "Car"));
        ledger.lookup_or_insert(key("ABC-014", "Scooter"));
        ledger.lookup_or_insert(key("ABC-011", "Bicycle"));
        ledger.lookup_or_insert(key("ABC-014", "Scooter"));
        ledger.lookup_or_insert(key("ABC-014", "Scooter"));

        assert_eq!(
            snapshot(&ledger),
            vec![
                ("ABC-011".to_owned(), "Bicycle".to_owned(), 2),
                ("ABC-012".to_owned(), "Car".to_owned(), 1),
                ("ABC-014".to_owned(), "Scooter".to_owned(), 3),
            ]
        );
    }

    #[test]
    fn entries_is_restartable() {
        let mut ledger = Ledger::new();
        ledger.lookup_or_insert(key("A", "Car"));
        ledger.lookup_or_insert(key("B", "Car"));

        let first = snapshot(&ledger);
        let second = snapshot(&ledger);
        assert_eq!(first, second);
        assert_eq!(ledger.entries().len(), 2);
    }

    #[test]
    fn get_finds_entry_by_key() {
        let mut ledger = Ledger::new();
        ledger.lookup_or_insert(key("ABC-012", "Car"));

        assert_eq!(ledger.get(&key("ABC-012", "Car")).map(|e| e.count()), Some(1));
        assert!(ledger.get(&key("ABC-012", "Scooter")).is_none());
    }

    #[test]
    fn clear_empties_entries_and_index() {
        let mut ledger = Ledger::new();
        ledger.lookup_or_insert(key("ABC-012", "Car"));
        ledger.lookup_or_insert(key("ABC-012", "Car"));
        ledger.clear();

        assert!(ledger.is_empty());
        assert!(ledger.get(&key("ABC-012", "Car")).is_none());
        assert_eq!(ledger.entries().next(), None);

        let (entry, inserted) = ledger.lookup_or_insert(key("ABC-012", "Car"));
        assert!(inserted);
        assert_eq!(entry.count(), 1);
    }

    #[test]
    fn borrowed_ledger_iterates_in_order() {
        let mut ledger = Ledger::new();
        ledger.lookup_or_insert(key("first", "Car"));
        ledger.lookup_or_insert(key("second", "Car"));

        let identities: Vec<&str> = (&ledger).into_iter().map(|e| e.identity()).collect();
        assert_eq!(identities, vec!["first", "second"]);
    }
}
