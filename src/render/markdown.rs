//! Markdown review rendering for modality documents.

use crate::error::Result;
use crate::model::{DocumentModel, Heading, Table};

use super::{DocumentStats, RenderOptions, RenderResult};

/// Convert a document to a Markdown review.
pub fn to_markdown(doc: &DocumentModel, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to a Markdown review with statistics.
pub fn to_markdown_with_stats(
    doc: &DocumentModel,
    options: &RenderOptions,
) -> Result<RenderResult> {
    let options = options.clone().with_stats(true);
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// Markdown renderer.
///
/// Headings appear in export order: empty markdown headings are skipped and
/// the rest are sorted by number.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: DocumentStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: DocumentStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &DocumentModel) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to Markdown with document statistics.
    pub fn render_with_stats(mut self, doc: &DocumentModel) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc)?;

        self.stats.count_text(&content);

        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, doc: &DocumentModel) -> Result<String> {
        let mut output = String::new();

        if self.options.collect_stats {
            self.stats = DocumentStats::from_document(doc);
        }

        if self.options.include_frontmatter {
            output.push_str(&doc.to_yaml_frontmatter());
            output.push('\n');
        }

        self.render_identification(&mut output, doc);

        for heading in doc.headings() {
            self.render_heading(&mut output, heading);
        }

        if self.options.include_preparation {
            self.render_preparation(&mut output, doc);
        }

        Ok(output.trim().to_string())
    }

    fn render_identification(&self, output: &mut String, doc: &DocumentModel) {
        let meta = &doc.meta;
        let title = [meta.title.trim(), meta.id.trim()]
            .into_iter()
            .find(|t| !t.is_empty())
            .unwrap_or("Untitled modality");
        output.push_str(&format!("# {}\n\n", title));

        if !meta.id.trim().is_empty() && meta.id.trim() != title {
            output.push_str(&format!("`{}`\n\n", meta.id.trim()));
        }

        let parents: Vec<&str> = meta.filled_parents().collect();
        if !parents.is_empty() {
            output.push_str(&format!("**Parents:** {}\n\n", parents.join(", ")));
        }

        let acronyms: Vec<&str> = meta.filled_acronyms().collect();
        if !acronyms.is_empty() {
            output.push_str(&format!("**Acronyms:** {}\n\n", acronyms.join(", ")));
        }

        let description = meta.short_description.trim();
        if !description.is_empty() {
            output.push_str(description);
            output.push_str("\n\n");
        }
    }

    fn render_heading(&self, output: &mut String, heading: Heading<'_>) {
        let level = self.heading_level(&heading);
        let label = [heading.number().trim(), heading.title().trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let label = if label.is_empty() {
            "(untitled)".to_string()
        } else {
            label
        };

        output.push_str(&"#".repeat(level as usize));
        output.push(' ');
        output.push_str(&label);
        output.push_str("\n\n");

        match heading {
            Heading::Markdown(h) => {
                let content = h.content.trim();
                if !content.is_empty() {
                    output.push_str(content);
                    output.push_str("\n\n");
                }
            }
            Heading::Table(h) => self.render_table(output, &h.table),
        }
    }

    /// Heading depth follows the number's segment count, one below the title.
    fn heading_level(&self, heading: &Heading<'_>) -> u8 {
        let depth = heading.sort_key().depth().max(1);
        let level = depth.saturating_add(1).min(u8::MAX as usize) as u8;
        level.min(self.options.max_heading_level)
    }

    fn render_table(&self, output: &mut String, table: &Table) {
        let Some(header) = table.header() else {
            output.push_str("_(empty table)_\n\n");
            return;
        };

        let width = table
            .rows.iter().map(|r| r.len()).max().unwrap_or(0).max(1);

        output.push_str(&table_row(header, width));
        output.push('|');
        for _ in 0..width {
            output.push_str(" --- |");
        }
        output.push('\n');

        for row in table.body() {
            output.push_str(&table_row(row, width));
        }
        output.push('\n');
    }

    fn render_preparation(&self, output: &mut String, doc: &DocumentModel) {
        let prep = &doc.preparation;
        output.push_str("---\n\n");
        output.push_str(&format!("{} Preparation\n\n", "#".repeat(self.preparation_level())));

        let fields = [
            ("Prepared by", &prep.prepared_by),
            ("Confirmed by", &prep.confirmed_by),
            ("Date of preparation", &prep.date_of_preparation),
            ("Planned next review", &prep.planned_next_review),
        ];
        for (label, value) in fields {
            output.push_str(&format!("- **{}:** {}\n", label, value.trim()));
        }

        let completion = prep.requires_completion.trim();
        if completion.is_empty() {
            output.push_str("- **Requires completion:** nothing\n");
        } else {
            output.push_str(&format!("- **Requires completion:** {}\n", completion));
        }
    }

    fn preparation_level(&self) -> usize {
        2.min(self.options.max_heading_level as usize)
    }
}

/// Render one pipe-table row padded to `width` cells.
fn table_row(cells: &[String], width: usize) -> String {
    let mut line = String::from("|");
    for i in 0..width {
        let cell = cells.get(i).map(|c| escape_cell(c)).unwrap_or_default();
        line.push(' ');
        line.push_str(&cell);
        line.push_str(" |");
    }
    line.push('\n');
    line
}

/// Escape characters that would break a pipe-table cell.
fn escape_cell(text: &str) -> String {
    text.trim()
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}
