// crates/locdb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the active dataset.
///
/// Returned by [`LocationStore::stats`](crate::LocationStore::stats); the
/// counts describe the snapshot searches currently run against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub records: usize,
    pub primary: usize,
    pub keys: usize,
    pub numeric_keys: usize,
}
