// crates/locdb-core/src/index.rs

//! # Location Index
//!
//! Build-once, multi-key lookup over a record slice. Buckets hold positions
//! into the slice the index was built from, so one record can live under
//! many keys without being cloned.

use crate::model::LocationRecord;
use crate::text::is_numeric_key;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Bucket {
    key: String,
    records: Vec<usize>,
}

/// Mapping from lower-cased key → ordered record positions.
///
/// Keys iterate in the order they were first created. Postal-code keys are
/// additionally tracked in a side list so numeric queries don't have to
/// walk the text keys.
#[derive(Debug, Clone, Default)]
pub struct LocationIndex {
    buckets: Vec<Bucket>,
    lookup: HashMap<String, usize>,
    numeric: Vec<usize>,
}

impl LocationIndex {
    /// Builds the index for `records`.
    ///
    /// For every record, in input order, the record position is appended to
    /// the bucket of each of its [`index_keys`](LocationRecord::index_keys).
    /// Keys of any length are indexed.
    pub fn build(records: &[LocationRecord]) -> Self {
        let mut index = LocationIndex::default();
        for (pos, record) in records.iter().enumerate() {
            for key in record.index_keys() {
                index.insert(key, pos);
            }
        }
        index
    }

    fn insert(&mut self, key: String, pos: usize) {
        match self.lookup.get(&key) {
            Some(&slot) => self.buckets[slot].records.push(pos),
            None => {
                let slot = self.buckets.len();
                if is_numeric_key(&key) {
                    self.numeric.push(slot);
                }
                self.lookup.insert(key.clone(), slot);
                self.buckets.push(Bucket {
                    key,
                    records: vec![pos],
                });
            }
        }
    }

    /// Record positions stored under exactly `key`; empty when absent.
    pub fn get(&self, key: &str) -> &[usize] {
        self.lookup
            .get(key)
            .map(|&slot| self.buckets[slot].records.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup.contains_key(key)
    }

    /// All `(key, positions)` pairs in key-creation order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[usize])> + '_ {
        self.buckets
            .iter()
            .map(|b| (b.key.as_str(), b.records.as_slice()))
    }

    /// Only the digit-only keys, in key-creation order.
    pub fn numeric_entries(&self) -> impl Iterator<Item = (&str, &[usize])> + '_ {
        self.numeric.iter().map(move |&slot| {
            let b = &self.buckets[slot];
            (b.key.as_str(), b.records.as_slice())
        })
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn numeric_len(&self) -> usize {
        self.numeric.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LocationKind;

    fn sample() -> Vec<LocationRecord> {
        vec![
            LocationRecord::new("a", "Zürich", LocationKind::City)
                .with_search_key("zurich")
                .with_code(8000)
                .primary(),
            LocationRecord::new("b", "Zürich", LocationKind::Canton).with_code(0),
            LocationRecord::new("c", "Au", LocationKind::Locality).with_code(8804),
        ]
    }

    #[test]
    fn buckets_keep_input_order() {
        let index = LocationIndex::build(&sample());
        assert_eq!(index.get("zürich"), &[0, 1]);
        assert_eq!(index.get("zurich"), &[0]);
        assert_eq!(index.get("8000"), &[0]);
        assert!(index.get("0").is_empty());
        assert!(index.get("missing").is_empty());
    }

    #[test]
    fn short_keys_are_indexed() {
        let index = LocationIndex::build(&sample());
        assert!(index.contains_key("au"));
    }

    #[test]
    fn numeric_side_list_tracks_code_keys_only() {
        let index = LocationIndex::build(&sample());
        let numeric: Vec<&str> = index.numeric_entries().map(|(k, _)| k).collect();
        assert_eq!(numeric, vec!["8000", "8804"]);
        assert_eq!(index.numeric_len(), 2);
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn entries_follow_key_creation_order() {
        let index = LocationIndex::build(&sample());
        let keys: Vec<&str> = index.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zürich", "zurich", "8000", "au", "8804"]);
    }

    #[test]
    fn build_is_deterministic() {
        let a = LocationIndex::build(&sample());
        let b = LocationIndex::build(&sample());
        let ea: Vec<_> = a.entries().collect();
        let eb: Vec<_> = b.entries().collect();
        assert_eq!(ea, eb);
    }

    #[test]
    fn empty_dataset_builds_empty_index() {
        let index = LocationIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.entries().count(), 0);
    }
}
