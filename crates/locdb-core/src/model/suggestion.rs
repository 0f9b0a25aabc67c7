// crates/locdb-core/src/model/suggestion.rs
use super::locale::Locale;
use super::record::LocationRecord;
use crate::text::region_of;
use serde::{Deserialize, Serialize};

/// Formatted, locale-aware projection of a [`LocationRecord`].
///
/// Created fresh per search call; serializes to the wire shape
/// `{id, name, typeLabel, region, postalCode, isPrimary}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    pub type_label: String,
    pub region: String,
    pub postal_code: String,
    pub is_primary: bool,
}

impl Suggestion {
    /// Builds the view of `record` for `locale`.
    pub fn from_record(record: &LocationRecord, locale: Locale) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            type_label: locale.type_label(record.kind).to_string(),
            region: region_of(&record.parent_region).to_string(),
            postal_code: if record.code.is_meaningful() {
                record.code.to_string()
            } else {
                String::new()
            },
            is_primary: record.is_primary,
        }
    }

    /// One-line rendering used by the CLI: `Zürich (8000) · Stadt · Zürich`.
    pub fn display_line(&self) -> String {
        let mut line = self.name.clone();
        if !self.postal_code.is_empty() {
            line.push_str(&format!(" ({})", self.postal_code));
        }
        line.push_str(&format!(" · {}", self.type_label));
        if !self.region.is_empty() {
            line.push_str(&format!(" · {}", self.region));
        }
        line
    }
}

/// Request body of the read endpoint: `{query, limit, locale?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    pub limit: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LocationKind;

    fn zurich() -> LocationRecord {
        LocationRecord::new("zh-8000", "Zürich", LocationKind::City)
            .with_parent_region("Kanton - Zürich")
            .with_code(8000)
            .primary()
    }

    #[test]
    fn formats_region_label_and_code() {
        let s = Suggestion::from_record(&zurich(), Locale::De);
        assert_eq!(s.id, "zh-8000");
        assert_eq!(s.type_label, "Stadt");
        assert_eq!(s.region, "Zürich");
        assert_eq!(s.postal_code, "8000");
        assert!(s.is_primary);
    }

    #[test]
    fn missing_code_renders_empty_postal_code() {
        let r = LocationRecord::new("ct-zh", "Zürich", LocationKind::Canton).with_code(0);
        let s = Suggestion::from_record(&r, Locale::En);
        assert_eq!(s.postal_code, "");
        assert_eq!(s.region, "");
        assert_eq!(s.type_label, "Canton");
    }

    #[test]
    fn serializes_wire_shape() {
        let s = Suggestion::from_record(&zurich(), Locale::Fr);
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["typeLabel"], "Ville");
        assert_eq!(v["postalCode"], "8000");
        assert_eq!(v["isPrimary"], true);
        assert!(v.get("type_label").is_none());
    }

    #[test]
    fn display_line_skips_empty_parts() {
        let r = LocationRecord::new("x", "Rigi", LocationKind::Other);
        let s = Suggestion::from_record(&r, Locale::De);
        assert_eq!(s.display_line(), "Rigi · Location");
        assert_eq!(
            Suggestion::from_record(&zurich(), Locale::De).display_line(),
            "Zürich (8000) · Stadt · Zürich"
        );
    }

    #[test]
    fn request_locale_is_optional() {
        let req: SearchRequest = serde_json::from_str(r#"{"query":"zü","limit":5}"#).unwrap();
        assert_eq!(req.locale, None);
        assert_eq!(req.limit, 5);
        let req: SearchRequest =
            serde_json::from_str(r#"{"query":"zü","limit":5,"locale":"fr"}"#).unwrap();
        assert_eq!(req.locale, Some(Locale::Fr));
    }
}
