// crates/locdb-core/src/lib.rs

//! # locdb-core
//!
//! In-memory location index and search-as-you-type engine for city and
//! postal-code lookup.
//!
//! - [`LocationStore`] owns the dataset and its multi-key [`LocationIndex`];
//!   reloads swap in a complete new snapshot.
//! - [`SearchEngine`] turns a query plus a limit into ranked, deduplicated
//!   [`Suggestion`]s (exact → prefix → substring, digits routed to postal
//!   codes, empty query → popular places).
//!
//! ```rust
//! use locdb_core::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(LocationStore::new());
//! store.load(loader::bundled_records()?.to_vec())?;
//!
//! let engine = SearchEngine::new(store);
//! let hits = engine.search("zür", 5)?;
//! assert_eq!(hits[0].name, "Zürich");
//! # Ok::<(), locdb_core::LocError>(())
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod store;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::StoreStats;
pub use crate::config::SearchConfig;
pub use crate::error::{DatasetLoadError, LocError, Result};
pub use crate::index::LocationIndex;
pub use crate::model::{
    LocationKind, LocationRecord, Locale, PostalCode, SearchRequest, Suggestion,
};
pub use crate::search::SearchEngine;
pub use crate::store::{LocationSnapshot, LocationStore};
pub use crate::traits::{LocationSearch, NameMatch};
