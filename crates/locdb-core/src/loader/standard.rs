// crates/locdb-core/src/loader/standard.rs
use crate::error::{LocError, Result};
use crate::model::LocationRecord;
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufWriter, Read};
use std::path::Path;

/// Upper bound for a cache payload; guards against corrupt length prefixes.
const CACHE_LIMIT: u64 = 64 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(CACHE_LIMIT)
}

/// Reads a bincode record cache written by [`write_cache`].
pub fn read_cache(path: &Path) -> Result<Vec<LocationRecord>> {
    let mut file = File::open(path).map_err(|e| {
        LocError::NotFound(format!("Cache not found at {}: {}", path.display(), e))
    })?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(options().deserialize(&data)?)
}

pub fn write_cache(records: &[LocationRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let writer = BufWriter::new(File::create(path)?);
    options().serialize_into(writer, records)?;
    Ok(())
}
