// crates/locdb-core/src/model/record.rs
use crate::text::{fold_key, normalize_query};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Category of a place, drawn from a small closed vocabulary.
///
/// Unknown tags coming from a dataset deserialize to [`LocationKind::Other`]
/// instead of failing the whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    City,
    Municipality,
    Locality,
    District,
    Canton,
    #[serde(other)]
    Other,
}

impl LocationKind {
    pub const ALL: [LocationKind; 6] = [
        LocationKind::City,
        LocationKind::Municipality,
        LocationKind::Locality,
        LocationKind::District,
        LocationKind::Canton,
        LocationKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::City => "city",
            LocationKind::Municipality => "municipality",
            LocationKind::Locality => "locality",
            LocationKind::District => "district",
            LocationKind::Canton => "canton",
            LocationKind::Other => "other",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal / area code of a record.
///
/// Datasets deliver codes either as JSON numbers (`8000`) or strings
/// (`"8000"`); both are kept in their textual form. `"0"` and the empty
/// string mean "no code".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_string())
    }

    pub fn none() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the code can act as an index key.
    pub fn is_meaningful(&self) -> bool {
        !self.0.is_empty() && self.0 != "0"
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for PostalCode {
    fn from(v: u32) -> Self {
        Self(v.to_string())
    }
}

impl From<i32> for PostalCode {
    fn from(v: i32) -> Self {
        if v <= 0 {
            return Self::none();
        }
        Self(v.to_string())
    }
}

impl From<&str> for PostalCode {
    fn from(v: &str) -> Self {
        Self::new(v)
    }
}

impl Serialize for PostalCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PostalCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Binary caches always carry the string form.
        if !deserializer.is_human_readable() {
            return String::deserialize(deserializer).map(PostalCode);
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawCode {
            Num(u64),
            Signed(i64),
            Float(f64),
            Str(String),
            Null(Option<()>),
        }

        Ok(match RawCode::deserialize(deserializer)? {
            RawCode::Num(n) => PostalCode(n.to_string()),
            // Negative placeholders (`-1`) mean "no code", like `0`.
            RawCode::Signed(_) => PostalCode::none(),
            RawCode::Float(f) if f.is_finite() && f.fract() == 0.0 => {
                if f <= 0.0 {
                    PostalCode::none()
                } else {
                    PostalCode(format!("{f:.0}"))
                }
            }
            RawCode::Float(f) => {
                return Err(D::Error::custom(format!(
                    "postal code {f} is not an integer"
                )))
            }
            RawCode::Str(s) => PostalCode::new(s),
            RawCode::Null(_) => PostalCode::none(),
        })
    }
}

/// A single place entry of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    /// Additional spellings of `name` (ASCII-folded, hyphenated, ...).
    #[serde(default)]
    pub search_keys: Vec<String>,
    /// `"<kind> - <region>"`, e.g. `"Kanton - Zürich"`.
    #[serde(default)]
    pub parent_region: String,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub code: PostalCode,
    pub kind: LocationKind,
}

impl LocationRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: LocationKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            search_keys: Vec::new(),
            parent_region: String::new(),
            is_primary: false,
            code: PostalCode::none(),
            kind,
        }
    }

    pub fn with_code(mut self, code: impl Into<PostalCode>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_parent_region(mut self, parent_region: impl Into<String>) -> Self {
        self.parent_region = parent_region.into();
        self
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    /// Adds a search key unless an equal one is already present.
    pub fn with_search_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if !self.search_keys.contains(&key) {
            self.search_keys.push(key);
        }
        self
    }

    /// Adds the ASCII-folded spelling of `name` as a search key
    /// (`Zürich` -> `zurich`) when it differs from the name itself.
    pub fn with_folded_keys(self) -> Self {
        let folded = fold_key(&self.name);
        if folded == normalize_query(&self.name) {
            return self;
        }
        self.with_search_key(folded)
    }

    /// Lower-cased index keys of this record, duplicates removed, in the
    /// order name, search keys, code.
    pub fn index_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::with_capacity(self.search_keys.len() + 2);
        let mut push = |k: String| {
            if !keys.contains(&k) {
                keys.push(k);
            }
        };

        push(self.name.to_lowercase());
        for key in &self.search_keys {
            push(key.to_lowercase());
        }
        if self.code.is_meaningful() {
            push(self.code.as_str().to_lowercase());
        }
        keys
    }

    /// Length of the display name in characters, used as ranking tie-break.
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }
}
