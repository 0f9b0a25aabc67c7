// crates/locdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Dataset sourcing for [`LocationStore`](crate::LocationStore). The store
//! itself performs no I/O; these helpers read record lists from JSON,
//! gzipped JSON or a bincode cache and hand them to `load`.

use crate::error::Result;
use crate::model::LocationRecord;
#[cfg(feature = "json")]
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

mod common_io;
mod json;
mod standard;

pub use common_io::get_cache_path;
pub use standard::{read_cache, write_cache};

/// Swiss sample dataset shipped with the crate.
pub const BUNDLED_DATASET: &str = "ch-locations.json";

#[cfg(feature = "json")]
static BUNDLED_JSON: &str = include_str!("../../data/ch-locations.json");

#[cfg(feature = "json")]
static BUNDLED_RECORDS: OnceCell<Vec<LocationRecord>> = OnceCell::new();

pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_path() -> PathBuf {
    default_data_dir().join(BUNDLED_DATASET)
}

/// The bundled dataset, parsed once per process.
#[cfg(feature = "json")]
pub fn bundled_records() -> Result<&'static [LocationRecord]> {
    BUNDLED_RECORDS
        .get_or_try_init(|| json::records_from_str(BUNDLED_JSON))
        .map(Vec::as_slice)
}

/// Reads records from `path`, picking the format from the extension:
/// `.bin` is a bincode cache, anything else is JSON (`.gz` decompressed).
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<LocationRecord>> {
    let path = path.as_ref();
    if is_cache(path) {
        return read_cache(path);
    }
    load_json(path)
}

#[cfg(feature = "json")]
fn load_json(path: &Path) -> Result<Vec<LocationRecord>> {
    let reader = common_io::open_stream(path)?;
    json::records_from_reader(reader)
}

#[cfg(not(feature = "json"))]
fn load_json(path: &Path) -> Result<Vec<LocationRecord>> {
    Err(crate::error::LocError::InvalidArgument(format!(
        "{} is not a binary cache and JSON support is disabled",
        path.display()
    )))
}

fn is_cache(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(crate::model::CACHE_SUFFIX))
}

/// Loads a JSON dataset, preferring its bincode sibling when that cache is
/// at least as new as the source.
///
/// After parsing JSON the cache is refreshed best-effort; failures to write
/// it are logged and otherwise ignored.
pub fn load_or_build_cache(json_path: impl AsRef<Path>) -> Result<Vec<LocationRecord>> {
    let json_path = json_path.as_ref();
    let bin_path = get_cache_path(json_path);

    if cache_is_fresh(json_path, &bin_path) {
        match read_cache(&bin_path) {
            Ok(records) => {
                debug!(path = %bin_path.display(), records = records.len(), "using dataset cache");
                return Ok(records);
            }
            Err(e) => warn!(path = %bin_path.display(), error = %e, "ignoring unreadable cache"),
        }
    }

    let records = load_records(json_path)?;
    if let Err(e) = write_cache(&records, &bin_path) {
        warn!(path = %bin_path.display(), error = %e, "could not write dataset cache");
    }
    Ok(records)
}

fn cache_is_fresh(source: &Path, cache: &Path) -> bool {
    let modified = |p: &Path| std::fs::metadata(p).and_then(|m| m.modified()).ok();
    match (modified(source), modified(cache)) {
        (Some(src), Some(bin)) => bin >= src,
        (None, Some(_)) => true,
        _ => false,
    }
}
