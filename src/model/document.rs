//! Document-level types.

use super::{Heading, ListField, MarkdownHeading, TableHeading, TablePreset, TextField};
use chrono::{Local, NaiveDate};

/// Date format used for `date_of_preparation`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of placeholder entries `acronyms` is padded to.
pub const ACRONYM_PLACEHOLDERS: usize = 4;

/// A medical modality definition being edited.
///
/// Owns all state of one editing session. The codec replaces it wholesale
/// on import and reads it on export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentModel {
    /// Identification block
    pub meta: MetaData,

    /// Preparation block
    pub preparation: PreparationMetaData,

    /// Free-text headings in editing order
    pub markdown_headings: Vec<MarkdownHeading>,

    /// Table headings in editing order
    pub table_headings: Vec<TableHeading>,
}

impl DocumentModel {
    /// Create a fresh document dated today.
    pub fn new() -> Self {
        Self::with_date(Local::now().date_naive())
    }

    /// Create a fresh document with the given preparation date.
    pub fn with_date(date: NaiveDate) -> Self {
        Self {
            meta: MetaData::default(),
            preparation: PreparationMetaData::with_date(date),
            markdown_headings: Vec::new(),
            table_headings: Vec::new(),
        }
    }

    /// Append an empty markdown heading.
    pub fn add_markdown_heading(&mut self) {
        self.markdown_headings.push(MarkdownHeading::default());
    }

    /// Remove the last markdown heading. Returns `false` if there was none.
    pub fn remove_last_markdown_heading(&mut self) -> bool {
        self.markdown_headings.pop().is_some()
    }

    /// Make sure at least one markdown heading row exists.
    pub fn ensure_markdown_heading(&mut self) -> bool {
        if self.markdown_headings.is_empty() {
            self.add_markdown_heading();
            true
        } else {
            false
        }
    }

    /// Append a table heading in the given preset shape.
    pub fn add_table_heading(&mut self, preset: TablePreset) {
        self.table_headings.push(TableHeading::new(preset));
    }

    /// Append a data row to the addressed table.
    ///
    /// Out-of-range indices are ignored.
    pub fn add_table_row(&mut self, table_index: usize) -> bool {
        match self.table_headings.get_mut(table_index) {
            Some(heading) => {
                heading.table.add_row();
                true
            }
            None => {
                log::debug!("add_table_row: no table at index {}", table_index);
                false
            }
        }
    }

    /// Append a column to the addressed table.
    ///
    /// Out-of-range indices and tables without rows are ignored.
    pub fn add_table_column(&mut self, table_index: usize) -> bool {
        match self.table_headings.get_mut(table_index) {
            Some(heading) => heading.table.add_column(),
            None => {
                log::debug!("add_table_column: no table at index {}", table_index);
                false
            }
        }
    }

    /// Delete the addressed table heading.
    pub fn remove_table_heading(&mut self, table_index: usize) -> bool {
        if table_index < self.table_headings.len() {
            self.table_headings.remove(table_index);
            true
        } else {
            log::debug!("remove_table_heading: no table at index {}", table_index);
            false
        }
    }

    /// Append an empty parent entry.
    pub fn add_parent(&mut self) {
        self.meta.parents.push(String::new());
    }

    /// Append an empty acronym entry.
    pub fn add_acronym(&mut self) {
        self.meta.acronyms.push(String::new());
    }

    /// Get a scalar field value.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Id => &self.meta.id,
            TextField::Title => &self.meta.title,
            TextField::ShortDescription => &self.meta.short_description,
            TextField::PreparedBy => &self.preparation.prepared_by,
            TextField::ConfirmedBy => &self.preparation.confirmed_by,
            TextField::DateOfPreparation => &self.preparation.date_of_preparation,
            TextField::PlannedNextReview => &self.preparation.planned_next_review,
            TextField::RequiresCompletion => &self.preparation.requires_completion,
        }
    }

    /// Get a scalar field for writing.
    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Id => &mut self.meta.id,
            TextField::Title => &mut self.meta.title,
            TextField::ShortDescription => &mut self.meta.short_description,
            TextField::PreparedBy => &mut self.preparation.prepared_by,
            TextField::ConfirmedBy => &mut self.preparation.confirmed_by,
            TextField::DateOfPreparation => &mut self.preparation.date_of_preparation,
            TextField::PlannedNextReview => &mut self.preparation.planned_next_review,
            TextField::RequiresCompletion => &mut self.preparation.requires_completion,
        }
    }

    /// Get a list field.
    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Parents => &self.meta.parents,
            ListField::Acronyms => &self.meta.acronyms,
        }
    }

    /// Get a list field for writing.
    pub fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Parents => &mut self.meta.parents,
            ListField::Acronyms => &mut self.meta.acronyms,
        }
    }

    /// All exportable headings, markdown before tables, sorted by number.
    ///
    /// Empty markdown headings are left out. The sort is stable, so headings
    /// with equal numbers keep their editing order.
    pub fn headings(&self) -> Vec<Heading<'_>> {
        let mut headings: Vec<Heading<'_>> = self
            .markdown_headings
            .iter()
            .map(Heading::Markdown)
            .chain(self.table_headings.iter().map(Heading::Table))
            .filter(|h| !h.is_empty())
            .collect();
        headings.sort_by_cached_key(|h| h.sort_key());
        headings
    }

    /// File name stem for downloads: the id, or `output` when it is empty.
    pub fn file_stem(&self) -> &str {
        if self.meta.id.is_empty() {
            "output"
        } else {
            &self.meta.id
        }
    }

    /// Convert identification metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        lines.push(format!("id: \"{}\"", escape_yaml(&self.meta.id)));
        if !self.meta.title.is_empty() {
            lines.push(format!("title: \"{}\"", escape_yaml(&self.meta.title)));
        }
        lines.push(format!("parents: {}", yaml_list(self.meta.filled_parents())));
        lines.push(format!("acronyms: {}", yaml_list(self.meta.filled_acronyms())));
        if !self.preparation.date_of_preparation.is_empty() {
            lines.push(format!(
                "date_of_preparation: \"{}\"",
                escape_yaml(&self.preparation.date_of_preparation)
            ));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn yaml_list<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let items: Vec<String> = values
        .map(|v| format!("\"{}\"", escape_yaml(v)))
        .collect();
    format!("[{}]", items.join(", "))
}

impl Default for DocumentModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Identification metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaData {
    /// Identifier, lowercase by convention
    pub id: String,

    /// Parent identifiers, in entry order
    pub parents: Vec<String>,

    /// Display title
    pub title: String,

    /// Acronyms, in entry order
    pub acronyms: Vec<String>,

    /// Multi-line short description
    pub short_description: String,
}

impl MetaData {
    /// Placeholder list used when no parent survives pruning.
    pub fn default_parents() -> Vec<String> {
        vec![String::new()]
    }

    /// Placeholder list used when no acronym survives pruning.
    pub fn default_acronyms() -> Vec<String> {
        vec![String::new(); ACRONYM_PLACEHOLDERS]
    }

    /// Parents with blank entries removed.
    pub fn filled_parents(&self) -> impl Iterator<Item = &str> {
        filled(&self.parents)
    }

    /// Acronyms with blank entries removed.
    pub fn filled_acronyms(&self) -> impl Iterator<Item = &str> {
        filled(&self.acronyms)
    }
}

impl Default for MetaData {
    fn default() -> Self {
        Self {
            id: String::new(),
            parents: Self::default_parents(),
            title: String::new(),
            acronyms: Self::default_acronyms(),
            short_description: String::new(),
        }
    }
}

fn filled(values: &[String]) -> impl Iterator<Item = &str> {
    values
        .iter()
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
}

/// Who prepared the definition and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparationMetaData {
    /// Author
    pub prepared_by: String,

    /// Reviewer who confirmed the content
    pub confirmed_by: String,

    /// Preparation date (`YYYY-MM-DD`)
    pub date_of_preparation: String,

    /// Planned date or note for the next review
    pub planned_next_review: String,

    /// Open items still to be completed
    pub requires_completion: String,
}

impl PreparationMetaData {
    /// Create an empty block prepared on the given date.
    pub fn with_date(date: NaiveDate) -> Self {
        Self {
            prepared_by: String::new(),
            confirmed_by: String::new(),
            date_of_preparation: date.format(DATE_FORMAT).to_string(),
            planned_next_review: String::new(),
            requires_completion: String::new(),
        }
    }

    /// Parse the preparation date, if it is a valid `YYYY-MM-DD` date.
    pub fn preparation_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_of_preparation.trim(), DATE_FORMAT).ok()
    }
}

impl Default for PreparationMetaData {
    fn default() -> Self {
        Self::with_date(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_document_new() {
        let doc = DocumentModel::with_date(date());
        assert_eq!(doc.meta.parents, vec![""]);
        assert_eq!(doc.meta.acronyms, vec!["", "", "", ""]);
        assert_eq!(doc.preparation.date_of_preparation, "2024-03-09");
        assert!(doc.markdown_headings.is_empty());
        assert!(doc.table_headings.is_empty());
    }

    #[test]
    fn test_new_is_dated_today() {
        let doc = DocumentModel::new();
        assert_eq!(
            doc.preparation.preparation_date(),
            Some(Local::now().date_naive())
        );
    }

    #[test]
    fn test_markdown_heading_mutators() {
        let mut doc = DocumentModel::with_date(date());
        assert!(!doc.remove_last_markdown_heading());

        doc.add_markdown_heading();
        doc.add_markdown_heading();
        assert_eq!(doc.markdown_headings.len(), 2);
        assert!(doc.markdown_headings[1].is_empty());

        assert!(doc.remove_last_markdown_heading());
        assert_eq!(doc.markdown_headings.len(), 1);
        assert!(!doc.ensure_markdown_heading());

        doc.remove_last_markdown_heading();
        assert!(doc.ensure_markdown_heading());
        assert_eq!(doc.markdown_headings.len(), 1);
    }

    #[test]
    fn test_table_mutators() {
        let mut doc = DocumentModel::with_date(date());
        doc.add_table_heading(TablePreset::Blank);
        doc.add_table_heading(TablePreset::Conversion);

        assert!(doc.add_table_column(0));
        assert_eq!(
            doc.table_headings[0].table.rows,
            vec![vec!["Column 1", "Column 2"], vec!["", ""]]
        );

        assert!(doc.add_table_row(1));
        assert_eq!(doc.table_headings[1].table.row_count(), 3);
        assert_eq!(doc.table_headings[1].table.rows[2].len(), 4);

        assert!(doc.remove_table_heading(0));
        assert_eq!(doc.table_headings.len(), 1);
        assert_eq!(doc.table_headings[0].table.column_count(), 4);
    }

    #[test]
    fn test_table_mutators_ignore_bad_index() {
        let mut doc = DocumentModel::with_date(date());
        doc.add_table_heading(TablePreset::Blank);
        let before = doc.clone();

        assert!(!doc.add_table_row(3));
        assert!(!doc.add_table_column(1));
        assert!(!doc.remove_table_heading(7));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_list_placeholders() {
        let mut doc = DocumentModel::with_date(date());
        doc.add_parent();
        doc.add_acronym();
        assert_eq!(doc.meta.parents.len(), 2);
        assert_eq!(doc.meta.acronyms.len(), 5);

        doc.meta.acronyms[2] = "CT".to_string();
        assert_eq!(doc.meta.filled_acronyms().collect::<Vec<_>>(), vec!["CT"]);
        assert_eq!(doc.meta.filled_parents().count(), 0);
    }

    #[test]
    fn test_field_access() {
        let mut doc = DocumentModel::with_date(date());
        *doc.text_mut(TextField::Id) = "ct".to_string();
        doc.list_mut(ListField::Parents)[0] = "imaging".to_string();

        assert_eq!(doc.text(TextField::Id), "ct");
        assert_eq!(doc.meta.id, "ct");
        assert_eq!(doc.list(ListField::Parents), &["imaging"]);
        assert_eq!(doc.text(TextField::DateOfPreparation), "2024-03-09");
    }

    #[test]
    fn test_headings_sorted_and_filtered() {
        let mut doc = DocumentModel::with_date(date());
        doc.markdown_headings = vec![
            MarkdownHeading::new("2", "Two", ""),
            MarkdownHeading::default(),
            MarkdownHeading::new("1", "One", ""),
        ];
        doc.table_headings = vec![TableHeading::with_table("1.5", "Table", Default::default())];

        let numbers: Vec<&str> = doc.headings().iter().map(|h| h.number()).collect();
        assert_eq!(numbers, vec!["1", "1.5", "2"]);
    }

    #[test]
    fn test_file_stem() {
        let mut doc = DocumentModel::with_date(date());
        assert_eq!(doc.file_stem(), "output");
        doc.meta.id = "mri".to_string();
        assert_eq!(doc.file_stem(), "mri");
    }

    #[test]
    fn test_yaml_frontmatter() {
        let mut doc = DocumentModel::with_date(date());
        doc.meta.id = "ct".to_string();
        doc.meta.title = "Say \"cheese\"".to_string();
        doc.meta.parents = vec!["imaging".to_string(), " ".to_string()];

        let yaml = doc.to_yaml_frontmatter();
        assert!(yaml.starts_with("---\nid: \"ct\"\n"));
        assert!(yaml.contains("title: \"Say \\\"cheese\\\"\""));
        assert!(yaml.contains("parents: [\"imaging\"]"));
        assert!(yaml.contains("acronyms: []"));
        assert!(yaml.contains("date_of_preparation: \"2024-03-09\""));
        assert!(yaml.ends_with("---\n"));
    }

    #[test]
    fn test_preparation_date_parse() {
        let mut prep = PreparationMetaData::with_date(date());
        assert_eq!(prep.preparation_date(), Some(date()));
        prep.date_of_preparation = "soon".to_string();
        assert_eq!(prep.preparation_date(), None);
    }
}
