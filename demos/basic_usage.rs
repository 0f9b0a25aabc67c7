//! Basic usage example for locdb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled Swiss dataset into a store
//! - Search by name, alternate spelling and postal code
//! - Show the popular places for an empty search box

use locdb_core::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== locdb-rs Basic Usage Example ===\n");

    println!("Loading location dataset...");
    let store = Arc::new(LocationStore::new());
    let stats = store.load(loader::bundled_records()?.to_vec())?;
    println!(
        "✓ {} records loaded, {} index keys\n",
        stats.records, stats.keys
    );

    let engine = SearchEngine::new(Arc::clone(&store));

    // Example 1: Empty search box
    println!("--- Example 1: Popular places ---");
    for (i, s) in engine.search("", 5)?.iter().enumerate() {
        println!("{}. {}", i + 1, s.display_line());
    }
    println!();

    // Example 2: Typing a name
    println!("--- Example 2: Typing \"lu\" ---");
    for s in engine.search("lu", 5)? {
        println!("- {}", s.display_line());
    }
    println!();

    // Example 3: Alternate spellings
    println!("--- Example 3: \"genf\" and \"bale\" ---");
    for q in ["genf", "bale"] {
        let hits = engine.search(q, 1)?;
        if let Some(s) = hits.first() {
            println!("{q} -> {}", s.name);
        }
    }
    println!();

    // Example 4: Postal codes
    println!("--- Example 4: Postal codes starting with 80 ---");
    for s in engine.search("80", 10)? {
        println!("- {} ({})", s.name, s.postal_code);
    }

    Ok(())
}
