// crates/locdb-core/src/store.rs

//! # Location Store
//!
//! Owns the authoritative record list and its derived [`LocationIndex`].
//! Both live in an immutable [`LocationSnapshot`]; `load` builds a complete
//! new snapshot and swaps the `Arc` in one step, so concurrent readers see
//! either the old or the new dataset, never a half-built one.

use crate::common::StoreStats;
use crate::error::{DatasetLoadError, Result};
use crate::index::LocationIndex;
use crate::model::LocationRecord;
use crate::traits::NameMatch;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// One immutable generation of the dataset.
#[derive(Debug, Default)]
pub struct LocationSnapshot {
    records: Vec<LocationRecord>,
    by_id: HashMap<String, usize>,
    index: LocationIndex,
    loaded: bool,
}

impl LocationSnapshot {
    fn build(records: Vec<LocationRecord>) -> std::result::Result<Self, DatasetLoadError> {
        let mut by_id: HashMap<String, usize> = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if record.id.is_empty() {
                return Err(DatasetLoadError::EmptyId { position: pos });
            }
            if record.name.trim().is_empty() {
                return Err(DatasetLoadError::EmptyName {
                    id: record.id.clone(),
                });
            }
            if let Some(&first) = by_id.get(&record.id) {
                return Err(DatasetLoadError::DuplicateId {
                    id: record.id.clone(),
                    first,
                    second: pos,
                });
            }
            by_id.insert(record.id.clone(), pos);
        }

        let index = LocationIndex::build(&records);
        Ok(Self {
            records,
            by_id,
            index,
            loaded: true,
        })
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    /// Record at `pos`, as stored in index buckets.
    pub fn record(&self, pos: usize) -> Option<&LocationRecord> {
        self.records.get(pos)
    }

    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    pub fn by_id(&self, id: &str) -> Option<&LocationRecord> {
        self.by_id.get(id).map(|&pos| &self.records[pos])
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            records: self.records.len(),
            primary: self.records.iter().filter(|r| r.is_primary).count(),
            keys: self.index.len(),
            numeric_keys: self.index.numeric_len(),
        }
    }
}

/// Holder of the active [`LocationSnapshot`].
///
/// Cheap to share behind an `Arc`; every read clones the current snapshot
/// pointer and works on it without holding the lock.
#[derive(Debug, Default)]
pub struct LocationStore {
    current: RwLock<Arc<LocationSnapshot>>,
}

impl LocationStore {
    /// An empty store. [`is_ready`](Self::is_ready) stays `false` until the
    /// first successful [`load`](Self::load).
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: a store already loaded with `records`.
    pub fn from_records(records: Vec<LocationRecord>) -> Result<Self> {
        let store = Self::new();
        store.load(records)?;
        Ok(store)
    }

    /// Replaces the active dataset and rebuilds the index.
    ///
    /// Rejects duplicate ids, empty ids and empty names. On error the
    /// previously active dataset stays in place untouched.
    pub fn load(&self, records: Vec<LocationRecord>) -> Result<StoreStats> {
        let snapshot = match LocationSnapshot::build(records) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "rejected location dataset");
                return Err(e.into());
            }
        };
        let stats = snapshot.stats();
        *self.current.write() = Arc::new(snapshot);
        info!(
            records = stats.records,
            primary = stats.primary,
            keys = stats.keys,
            "location dataset loaded"
        );
        Ok(stats)
    }

    /// The snapshot searches currently run against.
    pub fn snapshot(&self) -> Arc<LocationSnapshot> {
        self.current.read().clone()
    }

    /// Recomputes the index from the active record list.
    ///
    /// Pure function of the records: equal to the index the last `load`
    /// installed.
    pub fn build_index(&self) -> LocationIndex {
        LocationIndex::build(self.snapshot().records())
    }

    pub fn is_ready(&self) -> bool {
        self.current.read().is_loaded()
    }

    pub fn stats(&self) -> StoreStats {
        self.current.read().stats()
    }

    /// Exact id lookup; `None` when absent.
    pub fn by_id(&self, id: &str) -> Option<LocationRecord> {
        self.snapshot().by_id(id).cloned()
    }

    /// All primary records in dataset order.
    pub fn primary_records(&self) -> Vec<LocationRecord> {
        self.snapshot()
            .records()
            .iter()
            .filter(|r| r.is_primary)
            .cloned()
            .collect()
    }

    /// Records whose `parent_region` contains `region`, case-insensitive.
    pub fn by_region(&self, region: &str) -> Vec<LocationRecord> {
        let needle = region.to_lowercase();
        self.snapshot()
            .records()
            .iter()
            .filter(|r| r.parent_region.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Records whose name equals `name` ignoring case and accents
    /// (`"geneve"` finds `Genève`).
    pub fn find_by_name(&self, name: &str) -> Vec<LocationRecord> {
        self.snapshot()
            .records()
            .iter()
            .filter(|r| r.is_named(name))
            .cloned()
            .collect()
    }
}
