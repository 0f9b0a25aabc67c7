// crates/locdb-core/src/error.rs
use thiserror::Error;

/// Reasons a dataset handed to [`LocationStore::load`](crate::LocationStore::load)
/// is rejected.
///
/// A rejected load never touches the active snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetLoadError {
    #[error("duplicate location id `{id}` (records #{first} and #{second})")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    #[error("record #{position} has an empty id")]
    EmptyId { position: usize },

    #[error("record `{id}` has an empty name")]
    EmptyName { id: String },
}

#[derive(Debug, Error)]
pub enum LocError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("dataset rejected: {0}")]
    DatasetLoad(#[from] DatasetLoadError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LocError>;
