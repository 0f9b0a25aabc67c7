//! Error handling example for locdb-rs
//!
//! This example demonstrates the error cases of the store and the engine

use locdb_core::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== locdb-rs Error Handling Example ===\n");

    let store = Arc::new(LocationStore::new());
    let engine = SearchEngine::new(Arc::clone(&store));

    // Example 1: Nothing loaded yet
    println!("--- Example 1: Store before the first load ---");
    println!("  ready: {}", engine.is_ready());
    println!("  results for \"bern\": {}", engine.search("bern", 5)?.len());
    println!();

    store.load(loader::bundled_records()?.to_vec())?;

    // Example 2: Rejected reload
    println!("--- Example 2: Loading a dataset with duplicate ids ---");
    let broken = vec![
        LocationRecord::new("x-1", "Basel", LocationKind::City),
        LocationRecord::new("x-1", "Bern", LocationKind::City),
    ];
    match store.load(broken) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!("  still serving {} records", store.stats().records);
    println!();

    // Example 3: Invalid limits
    println!("--- Example 3: Non-positive limits ---");
    for limit in [0, -5] {
        match engine.search("bern", limit) {
            Ok(hits) => println!("  {limit}: {} hits", hits.len()),
            Err(e) => println!("  {limit}: ✗ {e}"),
        }
    }
    println!();

    // Example 4: No results is not an error
    println!("--- Example 4: Unknown place ---");
    let hits = engine.search("atlantis", 5)?;
    println!("  {} suggestions", hits.len());

    // Example 5: Missing lookups
    println!("--- Example 5: Unknown id ---");
    match store.by_id("zz-0000") {
        Some(r) => println!("  Found: {}", r.name),
        None => println!("  Not found: zz-0000"),
    }

    Ok(())
}
