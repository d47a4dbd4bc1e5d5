//! Field edits sent by the editing front-end.

use super::DocumentModel;
use serde::{Deserialize, Serialize};

/// A scalar text field of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    /// `meta.id`
    Id,
    /// `meta.title`
    Title,
    /// `meta.short_description`
    ShortDescription,
    /// `preparation.prepared_by`
    PreparedBy,
    /// `preparation.confirmed_by`
    ConfirmedBy,
    /// `preparation.date_of_preparation`
    DateOfPreparation,
    /// `preparation.planned_next_review`
    PlannedNextReview,
    /// `preparation.requires_completion`
    RequiresCompletion,
}

/// A list-of-strings field of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListField {
    /// `meta.parents`
    Parents,
    /// `meta.acronyms`
    Acronyms,
}

/// Editable part of a markdown heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingPart {
    /// Dotted heading number
    Number,
    /// Heading title
    Title,
    /// Markdown body
    Content,
}

/// Editable label of a table heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPart {
    /// Dotted heading number
    Number,
    /// Heading title
    Title,
}

/// A new value for one field or cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "edit", rename_all = "snake_case")]
pub enum Edit {
    /// Replace a scalar field
    Text { field: TextField, value: String },

    /// Replace one entry of a list field
    ListEntry {
        field: ListField,
        index: usize,
        value: String,
    },

    /// Replace part of a markdown heading
    Markdown {
        index: usize,
        part: HeadingPart,
        value: String,
    },

    /// Replace the number or title of a table heading
    TableLabel {
        index: usize,
        part: LabelPart,
        value: String,
    },

    /// Replace a table cell (row 0 is the header)
    Cell {
        table: usize,
        row: usize,
        column: usize,
        value: String,
    },
}

impl DocumentModel {
    /// Apply a field edit.
    ///
    /// Returns `false` when the edit addresses a heading, entry or cell that
    /// does not exist; the document is left untouched in that case.
    pub fn apply(&mut self, edit: Edit) -> bool {
        let applied = match edit {
            Edit::Text { field, value } => {
                *self.text_mut(field) = value;
                true
            }
            Edit::ListEntry {
                field,
                index,
                value,
            } => set_slot(self.list_mut(field).get_mut(index), value),
            Edit::Markdown { index, part, value } => {
                let slot = self.markdown_headings.get_mut(index).map(|h| match part {
                    HeadingPart::Number => &mut h.number,
                    HeadingPart::Title => &mut h.title,
                    HeadingPart::Content => &mut h.content,
                });
                set_slot(slot, value)
            }
            Edit::TableLabel { index, part, value } => {
                let slot = self.table_headings.get_mut(index).map(|h| match part {
                    LabelPart::Number => &mut h.number,
                    LabelPart::Title => &mut h.title,
                });
                set_slot(slot, value)
            }
            Edit::Cell {
                table,
                row,
                column,
                value,
            } => self
                .table_headings
                .get_mut(table)
                .map(|h| h.table.set_cell(row, column, value))
                .unwrap_or(false),
        };

        if !applied {
            log::debug!("Ignoring edit addressing a missing heading, entry or cell");
        }
        applied
    }
}

fn set_slot(slot: Option<&mut String>, value: String) -> bool {
    match slot {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}
