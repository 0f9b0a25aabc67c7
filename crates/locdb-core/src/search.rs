// crates/locdb-core/src/search.rs

//! # Search Engine
//!
//! Resolves a search-box query into ranked [`Suggestion`]s:
//!
//! 1. empty query → popular places, in configured order
//! 2. exact key match
//! 3. key prefix match (postal-code keys only for digit queries)
//! 4. key substring match (same key set as 3)
//!
//! Every pass deduplicates by record id. Passes 3 and 4 stop as soon as
//! `limit` records are collected. The collected records are then ranked
//! (primary first, then shorter name) with a stable sort and truncated.

use crate::config::SearchConfig;
use crate::error::{LocError, Result};
use crate::index::LocationIndex;
use crate::model::{Locale, SearchRequest, Suggestion};
use crate::store::{LocationSnapshot, LocationStore};
use crate::text::{is_numeric_query, normalize_query};
use crate::traits::LocationSearch;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// `(key, record positions)` pairs a prefix/substring pass walks over.
type KeyIter<'a> = Box<dyn Iterator<Item = (&'a str, &'a [usize])> + 'a>;

/// Accumulates record positions, skipping ids already emitted.
struct Collector<'a> {
    snapshot: &'a LocationSnapshot,
    seen: HashSet<&'a str>,
    out: Vec<usize>,
    limit: usize,
}

impl<'a> Collector<'a> {
    fn new(snapshot: &'a LocationSnapshot, limit: usize) -> Self {
        Self {
            snapshot,
            seen: HashSet::new(),
            out: Vec::new(),
            limit,
        }
    }

    fn is_full(&self) -> bool {
        self.out.len() >= self.limit
    }

    fn push(&mut self, pos: usize) {
        if let Some(record) = self.snapshot.record(pos) {
            if self.seen.insert(record.id.as_str()) {
                self.out.push(pos);
            }
        }
    }

    /// Appends unseen records from `positions` until the cap is hit.
    fn extend_capped(&mut self, positions: &[usize]) {
        for &pos in positions {
            if self.is_full() {
                return;
            }
            self.push(pos);
        }
    }

    /// Walks `keys`, exhausting each matching bucket before the next.
    fn run_pass(&mut self, keys: KeyIter<'a>, matches: impl Fn(&str) -> bool) {
        for (key, positions) in keys {
            if self.is_full() {
                return;
            }
            if matches(key) {
                self.extend_capped(positions);
            }
        }
    }
}

fn candidate_keys(index: &LocationIndex, numeric: bool) -> KeyIter<'_> {
    if numeric {
        Box::new(index.numeric_entries())
    } else {
        Box::new(index.entries())
    }
}

fn check_limit(limit: i64) -> Result<usize> {
    if limit <= 0 {
        return Err(LocError::InvalidArgument(format!(
            "limit must be positive, got {limit}"
        )));
    }
    Ok(usize::try_from(limit).unwrap_or(usize::MAX))
}

/// Search front end over a shared [`LocationStore`].
///
/// Holds no mutable state of its own; any number of searches may run in
/// parallel, also while the store is being reloaded.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    store: Arc<LocationStore>,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(store: Arc<LocationStore>) -> Self {
        Self::with_config(store, SearchConfig::default())
    }

    pub fn with_config(store: Arc<LocationStore>, config: SearchConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &Arc<LocationStore> {
        &self.store
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Suggestions for `query` in the configured locale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locdb_core::{LocationKind, LocationRecord, LocationStore, SearchEngine};
    /// use std::sync::Arc;
    ///
    /// let store = LocationStore::from_records(vec![
    ///     LocationRecord::new("zh", "Zürich", LocationKind::City).with_code(8000).primary(),
    ///     LocationRecord::new("us", "Uster", LocationKind::City).with_code(8610).primary(),
    /// ])
    /// .unwrap();
    /// let engine = SearchEngine::new(Arc::new(store));
    ///
    /// let hits = engine.search("8000", 10).unwrap();
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].name, "Zürich");
    /// ```
    pub fn search(&self, query: &str, limit: i64) -> Result<Vec<Suggestion>> {
        self.search_localized(query, limit, self.config.locale)
    }

    /// Popular places in the configured locale.
    pub fn popular_suggestions(&self, limit: i64) -> Result<Vec<Suggestion>> {
        self.popular_localized(limit, self.config.locale)
    }

    /// Serves one request of the read endpoint.
    pub fn handle(&self, request: &SearchRequest) -> Result<Vec<Suggestion>> {
        let locale = request.locale.unwrap_or(self.config.locale);
        self.search_localized(&request.query, request.limit, locale)
    }

    fn collect_matches(&self, snapshot: &LocationSnapshot, query: &str, limit: usize) -> Vec<usize> {
        let q = normalize_query(query);
        let numeric = is_numeric_query(query);
        let index = snapshot.index();
        let mut collector = Collector::new(snapshot, limit);

        // Exact hits are never capped here; ranking + truncation decides.
        for &pos in index.get(&q) {
            collector.push(pos);
        }
        let exact = collector.out.len();

        collector.run_pass(candidate_keys(index, numeric), |key| key.starts_with(&q));
        let prefix = collector.out.len() - exact;

        collector.run_pass(candidate_keys(index, numeric), |key| key.contains(&q));
        let contains = collector.out.len() - exact - prefix;

        debug!(
            query = %q,
            limit,
            numeric,
            exact,
            prefix,
            contains,
            "location search passes"
        );
        collector.out
    }

    fn popular_positions(&self, snapshot: &LocationSnapshot, limit: usize) -> Vec<usize> {
        let index = snapshot.index();
        let mut collector = Collector::new(snapshot, limit);
        for name in &self.config.popular {
            if collector.is_full() {
                break;
            }
            let bucket = index.get(&name.to_lowercase());
            let chosen = bucket
                .iter()
                .copied()
                .find(|&pos| snapshot.record(pos).is_some_and(|r| r.is_primary))
                .or_else(|| bucket.first().copied());
            if let Some(pos) = chosen {
                collector.push(pos);
            }
        }
        collector.out
    }
}

/// Stable sort: primary records first, then shorter names.
fn rank(snapshot: &LocationSnapshot, positions: &mut [usize]) {
    positions.sort_by_key(|&pos| match snapshot.record(pos) {
        Some(r) => (Reverse(r.is_primary), r.name_len()),
        None => (Reverse(false), usize::MAX),
    });
}

fn format_all(snapshot: &LocationSnapshot, positions: &[usize], locale: Locale) -> Vec<Suggestion> {
    positions
        .iter()
        .filter_map(|&pos| snapshot.record(pos))
        .map(|r| Suggestion::from_record(r, locale))
        .collect()
}

impl LocationSearch for SearchEngine {
    fn search_localized(&self, query: &str, limit: i64, locale: Locale) -> Result<Vec<Suggestion>> {
        let limit = check_limit(limit)?;
        if normalize_query(query).is_empty() {
            return self.popular_localized(limit as i64, locale);
        }

        let snapshot = self.store.snapshot();
        let mut positions = self.collect_matches(&snapshot, query, limit);
        rank(&snapshot, &mut positions);
        positions.truncate(limit);
        Ok(format_all(&snapshot, &positions, locale))
    }

    fn popular_localized(&self, limit: i64, locale: Locale) -> Result<Vec<Suggestion>> {
        let limit = check_limit(limit)?;
        let snapshot = self.store.snapshot();
        let positions = self.popular_positions(&snapshot, limit);
        debug!(limit, found = positions.len(), "popular suggestions");
        Ok(format_all(&snapshot, &positions, locale))
    }

    fn is_ready(&self) -> bool {
        self.store.is_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LocationKind, LocationRecord};

    fn engine(records: Vec<LocationRecord>) -> SearchEngine {
        let store = LocationStore::from_records(records).unwrap();
        SearchEngine::new(Arc::new(store))
    }

    fn names(hits: &[Suggestion]) -> Vec<&str> {
        hits.iter().map(|s| s.name.as_str()).collect()
    }

    fn swiss() -> Vec<LocationRecord> {
        vec![
            LocationRecord::new("zh", "Zürich", LocationKind::City)
                .with_search_key("zurich")
                .with_parent_region("Kanton - Zürich")
                .with_code(8000)
                .primary(),
            LocationRecord::new("us", "Uster", LocationKind::City)
                .with_parent_region("Kanton - Zürich")
                .with_code(8610)
                .primary(),
            LocationRecord::new("be", "Bern", LocationKind::City)
                .with_parent_region("Kanton - Bern")
                .with_code(3000)
                .primary(),
            LocationRecord::new("bx", "Bernex", LocationKind::Municipality)
                .with_parent_region("Canton - Genève")
                .with_code(1233),
            LocationRecord::new("ob", "Oberburg", LocationKind::Municipality)
                .with_parent_region("Kanton - Bern")
                .with_code(3414),
        ]
    }

    #[test]
    fn non_positive_limit_is_invalid() {
        let e = engine(swiss());
        assert!(matches!(e.search("bern", 0), Err(LocError::InvalidArgument(_))));
        assert!(matches!(e.search("", -3), Err(LocError::InvalidArgument(_))));
        assert!(matches!(
            e.popular_suggestions(0),
            Err(LocError::InvalidArgument(_))
        ));
    }

    #[test]
    fn exact_code_match_returns_single_record() {
        let e = engine(swiss());
        assert_eq!(names(&e.search("8000", 10).unwrap()), vec!["Zürich"]);
    }

    #[test]
    fn numeric_prefix_matches_codes_only() {
        let e = engine(swiss());
        assert_eq!(names(&e.search("80", 10).unwrap()), vec!["Zürich"]);
        assert_eq!(names(&e.search("30", 10).unwrap()), vec!["Bern"]);
    }

    #[test]
    fn numeric_substring_pass_uses_code_keys() {
        let e = engine(swiss());
        // "41" only occurs inside 3414
        assert_eq!(names(&e.search("41", 10).unwrap()), vec!["Oberburg"]);
        // prefix hits 3000 and 3414, substring adds 1233
        assert_eq!(
            names(&e.search("3", 10).unwrap()),
            vec!["Bern", "Bernex", "Oberburg"]
        );
    }

    #[test]
    fn text_search_ranks_primary_then_short_names() {
        let e = engine(swiss());
        let hits = e.search("bern", 10).unwrap();
        assert_eq!(names(&hits), vec!["Bern", "Bernex"]);

        let hits = e.search("er", 10).unwrap();
        // primaries first (Uster, Bern by name length), then non-primaries
        assert_eq!(names(&hits), vec!["Bern", "Uster", "Bernex", "Oberburg"]);
    }

    #[test]
    fn query_is_trimmed_and_lowercased() {
        let e = engine(swiss());
        assert_eq!(names(&e.search("  ZÜRICH ", 5).unwrap()), vec!["Zürich"]);
        assert_eq!(names(&e.search(" 8610 ", 5).unwrap()), vec!["Uster"]);
    }

    #[test]
    fn search_keys_make_folded_spelling_reachable() {
        let e = engine(swiss());
        // only the folded key "zurich" starts with "zu"
        let hits = e.search("zu", 10).unwrap();
        assert_eq!(names(&hits), vec!["Zürich"]);
    }

    #[test]
    fn cap_is_respected() {
        let e = engine(swiss());
        let hits = e.search("e", 2).unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.is_primary));
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let e = engine(swiss());
        assert!(e.search("xyz", 10).unwrap().is_empty());
        assert!(e.search("9999", 10).unwrap().is_empty());
    }

    #[test]
    fn empty_query_returns_popular_in_configured_order() {
        let store = Arc::new(LocationStore::from_records(swiss()).unwrap());
        let config = SearchConfig::default().with_popular(["Bern", "Zürich", "Nowhere", "Uster"]);
        let e = SearchEngine::with_config(store, config);

        assert_eq!(names(&e.search("", 10).unwrap()), vec!["Bern", "Zürich", "Uster"]);
        assert_eq!(names(&e.search("   ", 2).unwrap()), vec!["Bern", "Zürich"]);
        assert_eq!(e.search("", 1).unwrap().len(), 1);
    }

    #[test]
    fn popular_prefers_primary_record_of_a_name() {
        let records = vec![
            LocationRecord::new("ct-zh", "Zürich", LocationKind::Canton),
            LocationRecord::new("zh", "Zürich", LocationKind::City)
                .with_code(8000)
                .primary(),
            LocationRecord::new("ct-be", "Bern", LocationKind::Canton),
        ];
        let store = Arc::new(LocationStore::from_records(records).unwrap());
        let config = SearchConfig::default().with_popular(["Zürich", "Bern"]);
        let e = SearchEngine::with_config(store, config);

        let ids: Vec<String> = e.search("", 5).unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["zh", "ct-be"]);
    }

    #[test]
    fn popular_names_of_one_record_yield_it_once() {
        let records = vec![
            LocationRecord::new("ge", "Genève", LocationKind::City)
                .with_search_key("genf")
                .primary(),
            LocationRecord::new("be", "Bern", LocationKind::City).primary(),
        ];
        let store = Arc::new(LocationStore::from_records(records).unwrap());

        let config = SearchConfig::default().with_popular(["Genève", "Genf"]);
        let e = SearchEngine::with_config(Arc::clone(&store), config);
        let ids: Vec<String> = e.search("", 5).unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["ge"]);

        let config = SearchConfig::default().with_popular(["Genève", "Genf", "Bern"]);
        let e = SearchEngine::with_config(store, config);
        let ids: Vec<String> = e.search("", 2).unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["ge", "be"]);
    }

    #[test]
    fn unloaded_store_yields_no_suggestions() {
        let e = SearchEngine::new(Arc::new(LocationStore::new()));
        assert!(!e.is_ready());
        assert!(e.search("", 5).unwrap().is_empty());
        assert!(e.search("zürich", 5).unwrap().is_empty());
    }

    #[test]
    fn localized_labels() {
        let e = engine(swiss());
        let hits = e.search_localized("8000", 1, Locale::It).unwrap();
        assert_eq!(hits[0].type_label, "Città");
        assert_eq!(hits[0].region, "Zürich");
        assert_eq!(hits[0].postal_code, "8000");
    }

    #[test]
    fn handle_uses_request_locale_or_default() {
        let e = engine(swiss());
        let req = SearchRequest {
            query: "bernex".into(),
            limit: 3,
            locale: Some(Locale::Fr),
        };
        assert_eq!(e.handle(&req).unwrap()[0].type_label, "Commune");

        let req = SearchRequest {
            locale: None,
            ..req
        };
        assert_eq!(e.handle(&req).unwrap()[0].type_label, "Gemeinde");
    }
}
