//! locdb-rs: umbrella crate re-exporting [`locdb_core`] for the demos.
pub use locdb_core::*;
