//! Document model to record array.

use super::keys::{ContentType, WireField, META_FIELDS, PREPARATION_FIELDS};
use crate::model::{DocumentModel, Heading, Table};
use serde::Serialize;

/// One entry of the exported record array, borrowing from the document.
///
/// Fields serialize in the order `level`, `title`, `content-type`,
/// `content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Record<'a> {
    /// Metadata selector or heading number
    pub level: &'a str,

    /// Field name or heading title
    pub title: &'a str,

    /// Shape of `content`
    #[serde(rename = "content-type")]
    pub content_type: ContentType,

    /// Record payload
    pub content: Content<'a>,
}

/// Payload of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Content<'a> {
    /// `rawtext` and `markdown` payloads
    Text(&'a str),
    /// `list_of_strings` payloads
    List(&'a [String]),
    /// `table` payloads
    Table(&'a Table),
}

impl<'a> Content<'a> {
    /// Get the text payload, if this is one.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Encode a document as its ordered record array.
///
/// The array holds the five identification records, then every non-empty
/// heading sorted by number, then the five preparation records.
pub fn encode(doc: &DocumentModel) -> Vec<Record<'_>> {
    let headings = doc.headings();
    let mut records =
        Vec::with_capacity(META_FIELDS.len() + headings.len() + PREPARATION_FIELDS.len());

    records.extend(META_FIELDS.iter().map(|&field| field_record(doc, field)));
    records.extend(headings.into_iter().map(heading_record));
    records.extend(PREPARATION_FIELDS.iter().map(|&field| field_record(doc, field)));

    log::debug!("Encoded {} records", records.len());
    records
}

fn field_record(doc: &DocumentModel, field: WireField) -> Record<'_> {
    let content = match field {
        WireField::Text(f) => Content::Text(doc.text(f)),
        WireField::List(f) => Content::List(doc.list(f)),
    };
    Record {
        level: field.level(),
        title: field.title(),
        content_type: field.content_type(),
        content,
    }
}

fn heading_record(heading: Heading<'_>) -> Record<'_> {
    let (content_type, content) = match heading {
        Heading::Markdown(h) => (ContentType::Markdown, Content::Text(&h.content)),
        Heading::Table(h) => (ContentType::Table, Content::Table(&h.table)),
    };
    Record {
        level: heading.number(),
        title: heading.title(),
        content_type,
        content,
    }
}
