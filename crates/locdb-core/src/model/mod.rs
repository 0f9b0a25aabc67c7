// crates/locdb-core/src/model/mod.rs
pub mod locale;
pub mod record;
pub mod suggestion;

pub use locale::{Locale, GENERIC_LABEL};
pub use record::{LocationKind, LocationRecord, PostalCode};
pub use suggestion::{SearchRequest, Suggestion};

/// File suffix of the bincode dataset cache written next to a JSON source.
pub const CACHE_SUFFIX: &str = "bin";
