//! Regions and locales example for locdb-rs
//!
//! This example demonstrates region listings, localized labels and the
//! JSON request/response shape of the search endpoint

use locdb_core::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== locdb-rs Regions & Locales Example ===\n");

    let store = Arc::new(LocationStore::from_records(
        loader::bundled_records()?.to_vec(),
    )?);
    let engine = SearchEngine::new(Arc::clone(&store));

    // Example 1: Everything in canton Zürich
    println!("--- Example 1: Records in \"Zürich\" regions ---");
    for r in store.by_region("zürich") {
        println!("- {} ({})", r.name, r.parent_region);
    }
    println!();

    // Example 2: Same record, four languages
    println!("--- Example 2: Labels per locale ---");
    for locale in [Locale::De, Locale::Fr, Locale::It, Locale::Rm] {
        let hits = engine.search_localized("1700", 1, locale)?;
        if let Some(s) = hits.first() {
            println!("{locale}: {} · {}", s.name, s.type_label);
        }
    }
    println!();

    // Example 3: Wire format
    println!("--- Example 3: JSON request ---");
    let request: SearchRequest =
        serde_json::from_str(r#"{"query": "st", "limit": 3, "locale": "en"}"#)
            .map_err(LocError::from)?;
    let response = engine.handle(&request)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&response).map_err(LocError::from)?
    );

    Ok(())
}
