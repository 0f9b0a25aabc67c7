// crates/locdb-core/src/model/locale.rs
use super::record::LocationKind;
use crate::error::{LocError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for suggestion labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    De,
    Fr,
    It,
    En,
    /// Romansh. Only partially translated; missing labels fall back to English.
    Rm,
}

/// Label used for kinds without an entry in any table.
pub const GENERIC_LABEL: &str = "Location";

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::Fr => "fr",
            Locale::It => "it",
            Locale::En => "en",
            Locale::Rm => "rm",
        }
    }

    /// Looks up the label for `kind` in this locale's table only.
    fn table_label(&self, kind: LocationKind) -> Option<&'static str> {
        use LocationKind::*;
        match (self, kind) {
            (Locale::De, City) => Some("Stadt"),
            (Locale::De, Municipality) => Some("Gemeinde"),
            (Locale::De, Locality) => Some("Ortschaft"),
            (Locale::De, District) => Some("Bezirk"),
            (Locale::De, Canton) => Some("Kanton"),

            (Locale::Fr, City) => Some("Ville"),
            (Locale::Fr, Municipality) => Some("Commune"),
            (Locale::Fr, Locality) => Some("Localité"),
            (Locale::Fr, District) => Some("District"),
            (Locale::Fr, Canton) => Some("Canton"),

            (Locale::It, City) => Some("Città"),
            (Locale::It, Municipality) => Some("Comune"),
            (Locale::It, Locality) => Some("Località"),
            (Locale::It, District) => Some("Distretto"),
            (Locale::It, Canton) => Some("Cantone"),

            (Locale::En, City) => Some("City"),
            (Locale::En, Municipality) => Some("Municipality"),
            (Locale::En, Locality) => Some("Locality"),
            (Locale::En, District) => Some("District"),
            (Locale::En, Canton) => Some("Canton"),

            (Locale::Rm, City) => Some("Citad"),
            (Locale::Rm, Municipality) => Some("Vischnanca"),
            (Locale::Rm, Canton) => Some("Chantun"),

            _ => None,
        }
    }

    /// Localized label for `kind`: this locale's table, then English, then
    /// [`GENERIC_LABEL`].
    pub fn type_label(&self, kind: LocationKind) -> &'static str {
        self.table_label(kind)
            .or_else(|| Locale::En.table_label(kind))
            .unwrap_or(GENERIC_LABEL)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocError;

    /// Accepts bare language codes and tags with a region suffix
    /// (`de`, `FR`, `it-CH`, `rm_CH`).
    fn from_str(s: &str) -> Result<Self> {
        let lang = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "de" => Ok(Locale::De),
            "fr" => Ok(Locale::Fr),
            "it" => Ok(Locale::It),
            "en" => Ok(Locale::En),
            "rm" => Ok(Locale::Rm),
            _ => Err(LocError::InvalidArgument(format!("unsupported locale `{s}`"))),
        }
    }
}
