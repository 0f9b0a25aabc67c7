//! locdb-rs prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::config::SearchConfig;
pub use crate::error::{DatasetLoadError, LocError, Result};
pub use crate::loader;
pub use crate::model::{
    LocationKind, LocationRecord, Locale, PostalCode, SearchRequest, Suggestion,
};
pub use crate::search::SearchEngine;
pub use crate::store::LocationStore;
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{LocationSearch, NameMatch};
