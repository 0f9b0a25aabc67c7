//! locdb-cli
//! =========
//!
//! Command-line interface for the `locdb-core` location search engine.
//!
//! This crate primarily provides a binary (`locdb-cli`). The small library
//! target only exists so that the overview renders as documentation.
//!
//! Basic usage:
//!
//! ```text
//! locdb-cli --help
//! locdb-cli search zür
//! locdb-cli search 80 --limit 5 --locale fr
//! locdb-cli --json popular
//! ```
//!
//! For programmatic access use the `locdb-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
