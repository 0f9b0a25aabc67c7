use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for locdb-cli
#[derive(Debug, Parser)]
#[command(
    name = "locdb",
    version,
    about = "CLI for querying the locdb-core location search engine"
)]
pub struct CliArgs {
    /// Path to the dataset (.json, .json.gz or .bin; default: bundled Swiss dataset)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// TOML file with search settings (popular places, locale, default limit)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Label language (de, fr, it, en, rm); overrides the config file
    #[arg(short = 'l', long = "locale", global = true)]
    pub locale: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Increase log verbosity (-v: debug, -vv: trace); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded dataset
    Stats,

    /// Search places by name, alternate spelling or postal code
    Search {
        /// Free text or digits; empty lists the popular places
        #[arg(default_value = "")]
        query: String,

        /// Maximum number of suggestions (default from config)
        #[arg(short = 'n', long = "limit", allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// List the popular places shown for an empty query
    Popular {
        #[arg(short = 'n', long = "limit", allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Show a single record by id
    Show {
        /// Record id (e.g. zh-8000)
        id: String,
    },

    /// List records whose parent region contains a string
    Region {
        /// Region name or part of it (case-insensitive)
        name: String,
    },

    /// List all primary records
    Primary,

    /// Run a JSON request {"query": ..., "limit": ..., "locale": ...}
    Request {
        /// Request body; `-` reads it from stdin
        body: String,
    },

    /// Write the loaded dataset as a binary cache
    Cache {
        /// Output path (.bin)
        out: String,
    },
}
