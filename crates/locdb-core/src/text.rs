// crates/locdb-core/src/text.rs

/// Separator between the qualifier and the region name in a record's
/// `parent_region` (e.g. `"Kanton - Zürich"`).
pub const REGION_SEPARATOR: &str = " - ";

/// Normalizes a user query or a record key into index-key form:
/// surrounding whitespace removed, lower-cased.
///
/// # Examples
///
/// ```rust
/// use locdb_core::text::normalize_query;
///
/// assert_eq!(normalize_query("  Zürich "), "zürich");
/// assert_eq!(normalize_query("   "), "");
/// ```
pub fn normalize_query(s: &str) -> String {
    s.trim().to_lowercase()
}

/// True when the trimmed input consists only of ASCII digits.
///
/// Postal codes are digits only, so a numeric query is routed through
/// the code keys first.
pub fn is_numeric_query(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// True when an index key is a pure digit string (i.e. a postal code key).
#[inline]
pub fn is_numeric_key(key: &str) -> bool {
    is_numeric_query(key)
}

/// Convert a string into a folded key suitable for accent-insensitive
/// comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Neuchâtel` -> `Neuchatel`)
/// 2\) Normalize to lowercase
///
/// ```rust
/// use locdb_core::text::fold_key;
///
/// assert_eq!(fold_key("Zürich"), "zurich");
/// assert_eq!(fold_key("Genève"), "geneve");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Extracts the region name from a `parent_region` descriptor: the text
/// after the last `" - "`, or an empty string when no separator is present.
///
/// ```rust
/// use locdb_core::text::region_of;
///
/// assert_eq!(region_of("Kanton - Zürich"), "Zürich");
/// assert_eq!(region_of("Bezirk - Kanton - Bern"), "Bern");
/// assert_eq!(region_of("Schweiz"), "");
/// ```
pub fn region_of(parent_region: &str) -> &str {
    parent_region
        .rfind(REGION_SEPARATOR)
        .map(|pos| &parent_region[pos + REGION_SEPARATOR.len()..])
        .unwrap_or("")
}
