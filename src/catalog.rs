//! Colour catalog documents.
//!
//! The catalog service returns `{ "colors": [ { "color": "...", "hex": "..." } ] }`.
//! Fetching it is left to the caller; this module only decodes the payload
//! and annotates each record with its RGB and HSL forms.

use std::io::Read;

use serde::Deserialize;

use crate::color::ColorEntry;
use crate::error::CatalogError;

/// One record as delivered by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogRecord {
    #[serde(rename = "color", alias = "name")]
    pub name: String,
    pub hex: String,
}

impl From<CatalogRecord> for ColorEntry {
    fn from(record: CatalogRecord) -> Self {
        ColorEntry::new(record.name, record.hex)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped { colors: Vec<CatalogRecord> },
    Bare(Vec<CatalogRecord>),
}

impl CatalogDocument {
    fn into_records(self) -> Vec<CatalogRecord> {
        match self {
            CatalogDocument::Wrapped { colors } | CatalogDocument::Bare(colors) => colors,
        }
    }
}

/// Decode a catalog document, keeping record order.
pub fn parse_catalog(json: &str) -> Result<Vec<ColorEntry>, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    Ok(annotate(document))
}

/// Decode a catalog document from a reader.
pub fn read_catalog(reader: impl Read) -> Result<Vec<ColorEntry>, CatalogError> {
    let document: CatalogDocument = serde_json::from_reader(reader)?;
    Ok(annotate(document))
}

fn annotate(document: CatalogDocument) -> Vec<ColorEntry> {
    let entries: Vec<ColorEntry> = document
        .into_records()
        .into_iter()
        .map(ColorEntry::from)
        .collect();
    log::info!("loaded catalog with {} colors", entries.len());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Hsl, Rgb};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_wrapped_document() {
        let json = r##"{"colors": [
            {"color": "black", "hex": "#000000"},
            {"color": "lime", "hex": "#00FF00"}
        ]}"##;
        let entries = parse_catalog(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "black");
        assert_eq!(entries[1].rgb, Rgb::new(0, 255, 0));
        assert_eq!(entries[1].hsl, Hsl::new(120, 100, 50));
    }

    #[test]
    fn test_parse_bare_array_with_name_field() {
        let json = r#"[{"name": "teal", "hex": "008080"}]"#;
        let entries = parse_catalog(json).unwrap();
        assert_eq!(entries[0].name, "teal");
        assert_eq!(entries[0].rgb, Rgb::new(0, 128, 128));
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let json = r##"{"colors": [{"color": "red", "hex": "#F00", "id": 7}], "total": 1}"##;
        let entries = parse_catalog(json).unwrap();
        assert_eq!(entries[0].rgb, Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_parse_rejects_missing_hex() {
        let json = r#"{"colors": [{"color": "red"}]}"#;
        assert!(matches!(parse_catalog(json), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_read_catalog_from_reader() {
        let json = br##"{"colors": [{"color": "white", "hex": "#FFFFFF"}]}"##;
        let entries = read_catalog(&json[..]).unwrap();
        assert_eq!(entries[0].hsl, Hsl::new(0, 0, 100));
    }
}
