// crates/locdb-core/src/config.rs
use crate::error::{LocError, Result};
use crate::model::Locale;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Places offered for an empty query, in priority order.
pub const DEFAULT_POPULAR: [&str; 10] = [
    "Zürich",
    "Genève",
    "Basel",
    "Bern",
    "Lausanne",
    "Luzern",
    "St. Gallen",
    "Lugano",
    "Winterthur",
    "Biel/Bienne",
];

pub const DEFAULT_LIMIT: usize = 8;

/// Tunables of a [`SearchEngine`](crate::SearchEngine).
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// locale = "fr"
/// default_limit = 5
/// popular = ["Genève", "Lausanne"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub popular: Vec<String>,
    pub locale: Locale,
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            popular: DEFAULT_POPULAR.iter().map(|s| s.to_string()).collect(),
            locale: Locale::default(),
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SearchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            LocError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(LocError::InvalidArgument(
                "default_limit must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_popular<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.popular = names.into_iter().map(Into::into).collect();
        self
    }
}
