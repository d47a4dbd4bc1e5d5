//! Record array to document model.

use super::keys::{ContentType, WireField};
use crate::error::{json_kind, Error, Result};
use crate::model::{DocumentModel, MarkdownHeading, MetaData, Table, TableHeading};
use serde_json::{Map, Value};

/// A decoded document along with the records that could not be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The imported document
    pub document: DocumentModel,

    /// Heading records with an unrecognized content-type, in input order
    pub dropped: Vec<DroppedRecord>,
}

impl Decoded {
    /// Check if every record was placed in the document.
    pub fn is_lossless(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// A record left out of the decoded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRecord {
    /// Position in the record array
    pub index: usize,

    /// The record's `level`
    pub level: String,

    /// The record's unrecognized `content-type`
    pub content_type: String,
}

impl std::fmt::Display for DroppedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "record {} (level \"{}\", content-type \"{}\")",
            self.index, self.level, self.content_type
        )
    }
}

/// Decode a record array into a fresh document.
///
/// Records with an unknown content-type are dropped; use
/// [`decode_with_report`] to find out which.
pub fn decode(value: &Value) -> Result<DocumentModel> {
    decode_with_report(value).map(|decoded| decoded.document)
}

/// Decode JSON text.
pub fn decode_str(text: &str) -> Result<Decoded> {
    let value: Value = serde_json::from_str(text)?;
    decode_with_report(&value)
}

/// Decode uploaded bytes (UTF-8 JSON text).
pub fn decode_bytes(bytes: &[u8]) -> Result<Decoded> {
    let text = std::str::from_utf8(bytes)?;
    decode_str(text)
}

/// Decode a record array, reporting dropped records.
///
/// Fails if the value is not an array or one of its elements is not an
/// object. Field values of the wrong shape are replaced with empty values.
pub fn decode_with_report(value: &Value) -> Result<Decoded> {
    let records = value.as_array().ok_or(Error::NotAnArray {
        found: json_kind(value),
    })?;

    let mut document = DocumentModel::new();
    let mut dropped = Vec::new();

    for (index, item) in records.iter().enumerate() {
        let record = item.as_object().ok_or(Error::InvalidRecord {
            index,
            found: json_kind(item),
        })?;
        let reader = RecordReader { index, record };

        let level = reader.text("level");
        let content_type = reader.text("content-type");

        match WireField::from_level(&level) {
            Some(WireField::Text(field)) => {
                *document.text_mut(field) = reader.text("content");
                continue;
            }
            Some(WireField::List(field))
                if ContentType::parse(&content_type) == Some(ContentType::ListOfStrings) =>
            {
                *document.list_mut(field) = reader.list("content");
                continue;
            }
            _ => {}
        }

        match ContentType::parse(&content_type) {
            Some(ContentType::Table) => {
                let title = reader.text("title");
                let table = reader.table("content");
                document.table_headings.push(TableHeading::with_table(level, title, table));
            }
            Some(ContentType::Markdown) => {
                let title = reader.text("title");
                let content = reader.text("content");
                document.markdown_headings.push(MarkdownHeading::new(level, title, content));
            }
            _ => {
                log::warn!(
                    "Dropping record {} with level {:?}: unsupported content-type {:?}",
                    index,
                    level,
                    content_type
                );
                dropped.push(DroppedRecord {
                    index,
                    level,
                    content_type,
                });
            }
        }
    }

    let meta = &mut document.meta;
    meta.parents = prune(std::mem::take(&mut meta.parents), MetaData::default_parents);
    meta.acronyms = prune(std::mem::take(&mut meta.acronyms), MetaData::default_acronyms);

    log::debug!(
        "Decoded {} records: {} markdown headings, {} table headings, {} dropped",
        records.len(),
        document.markdown_headings.len(),
        document.table_headings.len(),
        dropped.len()
    );

    Ok(Decoded { document, dropped })
}

/// Drop blank entries, falling back to placeholders when none remain.
fn prune(values: Vec<String>, placeholders: fn() -> Vec<String>) -> Vec<String> {
    let kept: Vec<String> = values
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .collect();
    if kept.is_empty() {
        placeholders()
    } else {
        kept
    }
}

/// Best-effort field access on one record.
struct RecordReader<'a> {
    index: usize,
    record: &'a Map<String, Value>,
}

impl RecordReader<'_> {
    fn text(&self, key: &str) -> String {
        match self.record.get(key) {
            Some(value) => self.coerce_text(key, value),
            None => String::new(),
        }
    }

    fn list(&self, key: &str) -> Vec<String> {
        match self.record.get(key) {
            Some(Value::Array(items)) => items.iter().map(|v| self.coerce_text(key, v)).collect(),
            Some(other) => {
                self.mismatch(key, "an array", other);
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    fn table(&self, key: &str) -> Table {
        let rows = match self.record.get(key) {
            Some(Value::Array(rows)) => rows,
            Some(other) => {
                self.mismatch(key, "an array of rows", other);
                return Table::new();
            }
            None => return Table::new(),
        };

        let rows = rows
            .iter()
            .map(|row| match row {
                Value::Array(cells) => cells
                    .iter()
                    .map(|c| self.coerce_text(key, c))
                    .collect::<Vec<String>>(),
                other => {
                    self.mismatch(key, "a row array", other);
                    Vec::new()
                }
            })
            .collect();
        Table { rows }
    }

    fn coerce_text(&self, key: &str, value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => {
                self.mismatch(key, "text", other);
                String::new()
            }
        }
    }

    fn mismatch(&self, key: &str, expected: &str, found: &Value) {
        log::warn!(
            "Record {}: expected {} for {:?}, found {}; using an empty value",
            self.index,
            expected,
            key,
            json_kind(found)
        );
    }
}
