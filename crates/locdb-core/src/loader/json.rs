// crates/locdb-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use crate::error::Result;
use crate::model::LocationRecord;
use std::io::Read;

/// Parses a JSON array of records.
pub fn records_from_reader<R: Read>(reader: R) -> Result<Vec<LocationRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn records_from_str(s: &str) -> Result<Vec<LocationRecord>> {
    Ok(serde_json::from_str(s)?)
}
