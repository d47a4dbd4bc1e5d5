//! Wire-format keys of the record array.
//!
//! The `prepration-` spelling is what exported files contain and must be
//! kept for files to load again.

use crate::model::{ListField, TextField};
use serde::Serialize;

/// Prefix of identification metadata levels.
pub const META_PREFIX: &str = "meta-data-";

/// Prefix of preparation metadata levels.
pub const PREPARATION_PREFIX: &str = "prepration-meta-data-";

/// The `content-type` of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContentType {
    /// A plain string
    #[serde(rename = "rawtext")]
    RawText,
    /// An array of strings
    #[serde(rename = "list_of_strings")]
    ListOfStrings,
    /// A markdown heading body
    #[serde(rename = "markdown")]
    Markdown,
    /// A table heading body (array of string arrays)
    #[serde(rename = "table")]
    Table,
}

impl ContentType {
    /// Get the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::RawText => "rawtext",
            ContentType::ListOfStrings => "list_of_strings",
            ContentType::Markdown => "markdown",
            ContentType::Table => "table",
        }
    }

    /// Parse a wire name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "rawtext" => Some(ContentType::RawText),
            "list_of_strings" => Some(ContentType::ListOfStrings),
            "markdown" => Some(ContentType::Markdown),
            "table" => Some(ContentType::Table),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A metadata field addressed by a record's `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireField {
    /// Scalar field, content-type `rawtext`
    Text(TextField),
    /// List field, content-type `list_of_strings`
    List(ListField),
}

/// Identification fields in export order.
pub const META_FIELDS: [WireField; 5] = [
    WireField::Text(TextField::Id),
    WireField::List(ListField::Parents),
    WireField::Text(TextField::Title),
    WireField::List(ListField::Acronyms),
    WireField::Text(TextField::ShortDescription),
];

/// Preparation fields in export order.
pub const PREPARATION_FIELDS: [WireField; 5] = [
    WireField::Text(TextField::PreparedBy),
    WireField::Text(TextField::ConfirmedBy),
    WireField::Text(TextField::DateOfPreparation),
    WireField::Text(TextField::PlannedNextReview),
    WireField::Text(TextField::RequiresCompletion),
];

impl WireField {
    /// The record `level` of this field.
    pub fn level(self) -> &'static str {
        match self {
            WireField::Text(TextField::Id) => "meta-data-id",
            WireField::List(ListField::Parents) => "meta-data-parents",
            WireField::Text(TextField::Title) => "meta-data-title",
            WireField::List(ListField::Acronyms) => "meta-data-acronyms",
            WireField::Text(TextField::ShortDescription) => "meta-data-shortDescription",
            WireField::Text(TextField::PreparedBy) => "prepration-meta-data-prepared_by",
            WireField::Text(TextField::ConfirmedBy) => "prepration-meta-data-confirmed_by",
            WireField::Text(TextField::DateOfPreparation) => {
                "prepration-meta-data-date_of_preparation"
            }
            WireField::Text(TextField::PlannedNextReview) => {
                "prepration-meta-data-planned_next_review"
            }
            WireField::Text(TextField::RequiresCompletion) => {
                "prepration-meta-data-requires_completion"
            }
        }
    }

    /// The record `title` of this field: the level without its prefix.
    pub fn title(self) -> &'static str {
        let level = self.level();
        level
            .strip_prefix(PREPARATION_PREFIX)
            .or_else(|| level.strip_prefix(META_PREFIX))
            .unwrap_or(level)
    }

    /// The record `content-type` of this field.
    pub fn content_type(self) -> ContentType {
        match self {
            WireField::Text(_) => ContentType::RawText,
            WireField::List(_) => ContentType::ListOfStrings,
        }
    }

    /// Look up the field a `level` selects. Heading numbers yield `None`.
    pub fn from_level(level: &str) -> Option<Self> {
        META_FIELDS
            .iter()
            .chain(PREPARATION_FIELDS.iter())
            .copied()
            .find(|field| field.level() == level)
    }
}
