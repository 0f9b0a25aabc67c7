//! locdb-cli: command-line interface for locdb-core
//!
//! Usage examples
//! --------------
//!
//! - Search as you would type into a search box
//!   $ locdb search zür
//!   $ locdb search 80 --limit 5
//!
//! - Popular places (what an empty search box shows)
//!   $ locdb popular
//!
//! - Dataset inspection
//!   $ locdb stats
//!   $ locdb show zh-8000
//!   $ locdb region "Kanton - Bern"
//!
//! - Wire format, as a service endpoint would answer
//!   $ locdb request '{"query": "gen", "limit": 3, "locale": "fr"}'
//!
//! Data source
//! -----------
//!
//! Without `--input` the Swiss sample dataset bundled with `locdb-core` is
//! used. `--input` accepts `.json`, `.json.gz` and `.bin` caches (see the
//! `cache` subcommand).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use locdb_core::prelude::*;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &CliArgs) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::load_from_path(path)
            .with_context(|| format!("loading config {path}"))?,
        None => SearchConfig::default(),
    };
    if let Some(code) = &args.locale {
        config.locale = code.parse()?;
    }
    Ok(config)
}

fn load_dataset(input: Option<&str>) -> Result<Vec<LocationRecord>> {
    match input {
        Some(path) => loader::load_records(path).with_context(|| format!("reading dataset {path}")),
        None => Ok(loader::bundled_records()
            .context("parsing bundled dataset")?
            .to_vec()),
    }
}

fn print_suggestions(hits: &[Suggestion], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(hits)?);
    } else if hits.is_empty() {
        println!("No results");
    } else {
        for s in hits {
            println!("{}", s.display_line());
        }
    }
    Ok(())
}

fn print_records(records: &[LocationRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }
    if records.is_empty() {
        println!("No records");
    }
    for r in records {
        let marker = if r.is_primary { "*" } else { " " };
        println!("{marker} {:<12} {} ({}) | {}", r.id, r.name, r.code, r.parent_region);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = load_config(&args)?;
    let default_limit = config.default_limit as i64;
    let locale = config.locale;

    let store = Arc::new(LocationStore::new());
    store.load(load_dataset(args.input.as_deref())?)?;
    let engine = SearchEngine::with_config(Arc::clone(&store), config);

    match args.command {
        Commands::Stats => {
            let stats = store.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Dataset statistics:");
                println!("  Records: {}", stats.records);
                println!("  Primary: {}", stats.primary);
                println!("  Index keys: {}", stats.keys);
                println!("  Postal-code keys: {}", stats.numeric_keys);
            }
        }

        Commands::Search { query, limit } => {
            let hits = engine.search(&query, limit.unwrap_or(default_limit))?;
            print_suggestions(&hits, args.json)?;
        }

        Commands::Popular { limit } => {
            let hits = engine.popular_suggestions(limit.unwrap_or(default_limit))?;
            print_suggestions(&hits, args.json)?;
        }

        Commands::Show { id } => match store.by_id(&id) {
            Some(record) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&record)?);
                } else {
                    let view = Suggestion::from_record(&record, locale);
                    println!("Id: {}", record.id);
                    println!("Name: {}", record.name);
                    println!("Type: {}", view.type_label);
                    println!("Region: {}", view.region);
                    println!("Postal code: {}", view.postal_code);
                    println!("Primary: {}", record.is_primary);
                    println!("Search keys: {}", record.search_keys.join(", "));
                }
            }
            None => eprintln!("No record with id: {id}"),
        },

        Commands::Region { name } => print_records(&store.by_region(&name), args.json)?,

        Commands::Primary => print_records(&store.primary_records(), args.json)?,

        Commands::Request { body } => {
            let body = if body == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading request from stdin")?;
                buf
            } else {
                body
            };
            let request: SearchRequest =
                serde_json::from_str(&body).context("parsing search request")?;
            let hits = engine.handle(&request)?;
            println!("{}", serde_json::to_string(&hits)?);
        }

        Commands::Cache { out } => {
            let snapshot = store.snapshot();
            loader::write_cache(snapshot.records(), Path::new(&out))
                .with_context(|| format!("writing cache {out}"))?;
            println!("Wrote {} records to {out}", snapshot.records().len());
        }
    }

    Ok(())
}
