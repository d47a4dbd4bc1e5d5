//! Rendering result with document statistics.

use crate::model::{DocumentModel, SortKey};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The rendered content
    pub content: String,

    /// Document statistics
    pub stats: DocumentStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: DocumentStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics about a document's headings and text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Markdown headings that will be exported
    pub markdown_heading_count: u32,

    /// Markdown headings left out of exports because they are empty
    pub empty_markdown_count: u32,

    /// Table headings
    pub table_count: u32,

    /// Data rows across all tables
    pub table_row_count: u32,

    /// Tables with rows narrower or wider than their header
    pub ragged_table_count: u32,

    /// Exported headings whose number does not parse (sorted last)
    pub unnumbered_heading_count: u32,

    /// Words in the rendered content
    pub word_count: u32,

    /// Characters in the rendered content
    pub char_count: u32,
}

impl DocumentStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect heading statistics from a document.
    pub fn from_document(doc: &DocumentModel) -> Self {
        let mut stats = Self::new();
        for heading in &doc.markdown_headings {
            if heading.is_empty() {
                stats.empty_markdown_count += 1;
            } else {
                stats.markdown_heading_count += 1;
            }
        }
        for heading in &doc.table_headings {
            stats.table_count += 1;
            stats.table_row_count += heading.table.body().len() as u32;
            if heading.table.is_ragged() {
                stats.ragged_table_count += 1;
            }
        }
        stats.unnumbered_heading_count = doc
            .headings()
            .iter()
            .filter(|h| h.sort_key() == SortKey::Unparsed)
            .count() as u32;
        stats
    }

    /// Total exported headings.
    pub fn heading_count(&self) -> u32 {
        self.markdown_heading_count + self.table_count
    }

    /// Count words and characters in rendered text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count = text.split_whitespace().count() as u32;
        self.char_count = text.chars().count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MarkdownHeading, Table, TableHeading, TablePreset};

    #[test]
    fn test_from_document() {
        let mut doc = DocumentModel::new();
        doc.markdown_headings = vec![
            MarkdownHeading::new("1", "Scope", ""),
            MarkdownHeading::default(),
            MarkdownHeading::new("", "Unnumbered", ""),
        ];
        doc.add_table_heading(TablePreset::Blank);
        doc.add_table_row(0);
        doc.table_headings.push(TableHeading::with_table(
            "2",
            "Ragged",
            Table::from_rows([vec!["a", "b"], vec!["1"]]),
        ));

        let stats = DocumentStats::from_document(&doc);
        assert_eq!(stats.markdown_heading_count, 2);
        assert_eq!(stats.empty_markdown_count, 1);
        assert_eq!(stats.table_count, 2);
        assert_eq!(stats.table_row_count, 3);
        assert_eq!(stats.ragged_table_count, 1);
        assert_eq!(stats.unnumbered_heading_count, 2);
        assert_eq!(stats.heading_count(), 4);
    }

    #[test]
    fn test_count_text() {
        let mut stats = DocumentStats::new();
        stats.count_text("Hello wörld\nagain");
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.char_count, 17);
    }
}
