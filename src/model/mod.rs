//! Document model types for modality definitions.
//!
//! This module defines the editable, in-memory representation of a
//! definition. It knows nothing about the JSON exchange format; the
//! [`codec`](crate::codec) module maps between the two.

mod document;
mod edit;
mod heading;
mod table;

pub use document::{
    DocumentModel, MetaData, PreparationMetaData, ACRONYM_PLACEHOLDERS, DATE_FORMAT,
};
pub use edit::{Edit, HeadingPart, LabelPart, ListField, TextField};
pub use heading::{Heading, MarkdownHeading, NumberSegment, SortKey, TableHeading};
pub use table::{Table, TablePreset, CONVERSION_COLUMNS};
