// crates/locdb-core/src/traits.rs
use crate::error::Result;
use crate::model::{LocationRecord, Locale, Suggestion};
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Comparisons are accent-insensitive and case-insensitive, based on
/// [`fold_key`]. Implementors provide a `&str` view of their canonical name
/// via [`NameMatch::name_str`].
///
/// # Examples
/// ```rust
/// use locdb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Genève").is_named("geneve"));
/// assert!(Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for LocationRecord {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Suggestion {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// The search operations a location-search box needs.
///
/// Implemented by [`SearchEngine`](crate::SearchEngine); UI or service
/// layers should depend on this trait rather than the concrete engine.
pub trait LocationSearch {
    /// Ordered, deduplicated suggestions for `query`, at most `limit` long.
    ///
    /// An empty (or whitespace-only) query yields the popular places.
    /// Fails only with `InvalidArgument` when `limit <= 0`.
    fn search_localized(&self, query: &str, limit: i64, locale: Locale) -> Result<Vec<Suggestion>>;

    /// Popular places in their configured priority order.
    fn popular_localized(&self, limit: i64, locale: Locale) -> Result<Vec<Suggestion>>;

    /// `false` until a dataset was loaded successfully.
    fn is_ready(&self) -> bool;
}
