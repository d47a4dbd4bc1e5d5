//! JSON rendering for modality documents.

use crate::codec;
use crate::error::{Error, Result};
use crate::model::DocumentModel;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Indentation of pretty-printed output.
pub const PRETTY_INDENT: &[u8] = b"    ";

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with 4-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to its record array as JSON text.
pub fn to_json(doc: &DocumentModel, format: JsonFormat) -> Result<String> {
    let bytes = to_json_bytes(doc, format)?;
    String::from_utf8(bytes).map_err(|e| Error::Render(format!("JSON output is not UTF-8: {}", e)))
}

/// Convert a document to its record array as UTF-8 JSON bytes.
pub fn to_json_bytes(doc: &DocumentModel, format: JsonFormat) -> Result<Vec<u8>> {
    let records = codec::encode(doc);
    let mut out = Vec::new();

    let result = match format {
        JsonFormat::Pretty => {
            let formatter = PrettyFormatter::with_indent(PRETTY_INDENT);
            let mut ser = Serializer::with_formatter(&mut out, formatter);
            records.serialize(&mut ser)
        }
        JsonFormat::Compact => serde_json::to_writer(&mut out, &records),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MarkdownHeading, TablePreset};
    use chrono::NaiveDate;

    fn sample() -> DocumentModel {
        let mut doc = DocumentModel::with_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        doc.meta.id = "ct".to_string();
        doc.markdown_headings.push(MarkdownHeading::new("1", "Scope", "Body"));
        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.starts_with("[\n    {\n        \"level\": \"meta-data-id\",\n"));
        assert!(json.contains("\n        \"content-type\": \"rawtext\",\n"));
        assert!(json.contains("\"content\": \"2024-01-02\""));
        assert!(json.ends_with("\n]"));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains(
            r#"{"level":"1","title":"Scope","content-type":"markdown","content":"Body"}"#
        ));
    }

    #[test]
    fn test_tables_render_as_nested_arrays() {
        let mut doc = sample();
        doc.add_table_heading(TablePreset::Conversion);
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(json.contains(
            r#""content-type":"table","content":[["conversion_from","conversion_to","description","link to code/software"],["","","",""]]"#
        ));
    }

    #[test]
    fn test_non_ascii_is_kept_as_utf8() {
        let mut doc = sample();
        doc.meta.title = "Tomographie Réseau".to_string();
        let bytes = to_json_bytes(&doc, JsonFormat::Compact).unwrap();
        assert!(std::str::from_utf8(&bytes).unwrap().contains("Réseau"));
    }
}
