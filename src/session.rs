//! One editing session: a document, the page being shown, import and export.

use crate::codec::{self, DroppedRecord};
use crate::error::Result;
use crate::model::{DocumentModel, Edit};
use crate::render::{self, JsonFormat};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// MIME type of exported documents.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Page of the editor currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// Form editing
    #[default]
    Editor,
    /// Read-only preview with download
    Review,
}

/// An editing session owning exactly one document.
///
/// Imports either replace the document completely or leave it untouched.
///
/// # Example
///
/// ```
/// use modality::Session;
///
/// let mut session = Session::new();
/// session.document_mut().meta.id = "ct".to_string();
///
/// assert!(session.import_bytes(b"not json").is_err());
/// assert_eq!(session.document().meta.id, "ct");
///
/// let export = session.export()?;
/// assert_eq!(export.file_name, "ct.json");
/// # Ok::<(), modality::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    document: DocumentModel,
    view: View,
}

impl Session {
    /// Start a session with a fresh document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session editing an existing document.
    pub fn with_document(document: DocumentModel) -> Self {
        Self {
            document,
            view: View::Editor,
        }
    }

    /// Get the document.
    pub fn document(&self) -> &DocumentModel {
        &self.document
    }

    /// Get the document for editing.
    pub fn document_mut(&mut self) -> &mut DocumentModel {
        &mut self.document
    }

    /// End the session, returning its document.
    pub fn into_document(self) -> DocumentModel {
        self.document
    }

    /// Apply a field edit to the document.
    pub fn apply(&mut self, edit: Edit) -> bool {
        self.document.apply(edit)
    }

    /// Get the page being shown.
    pub fn view(&self) -> View {
        self.view
    }

    /// Switch to the review page.
    pub fn show_review(&mut self) {
        self.view = View::Review;
    }

    /// Switch back to the editor.
    pub fn show_editor(&mut self) {
        self.view = View::Editor;
    }

    /// Import an uploaded file's bytes, replacing the document.
    ///
    /// On error the current document is kept as it was.
    pub fn import_bytes(&mut self, bytes: &[u8]) -> Result<ImportSummary> {
        let decoded = codec::decode_bytes(bytes).map_err(|e| {
            log::warn!("Import failed, keeping current document: {}", e);
            e
        })?;

        let summary = ImportSummary {
            markdown_headings: decoded.document.markdown_headings.len(),
            table_headings: decoded.document.table_headings.len(),
            dropped: decoded.dropped,
        };
        self.document = decoded.document;

        log::info!(
            "Imported document {:?} ({} markdown headings, {} tables, {} dropped records)",
            self.document.meta.id,
            summary.markdown_headings,
            summary.table_headings,
            summary.dropped.len()
        );
        Ok(summary)
    }

    /// Import from a reader.
    pub fn import_reader<R: Read>(&mut self, mut reader: R) -> Result<ImportSummary> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.import_bytes(&bytes)
    }

    /// Import from a file.
    pub fn import_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportSummary> {
        let file = File::open(path)?;
        self.import_reader(BufReader::new(file))
    }

    /// Export the document as a downloadable JSON file.
    pub fn export(&self) -> Result<Export> {
        let bytes = render::to_json_bytes(&self.document, JsonFormat::Pretty)?;
        Ok(Export {
            file_name: format!("{}.json", self.document.file_stem()),
            mime_type: JSON_MIME_TYPE,
            bytes,
        })
    }

    /// The JSON text shown on the review page.
    pub fn preview(&self) -> Result<String> {
        render::to_json(&self.document, JsonFormat::Pretty)
    }
}

/// What an import brought in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Markdown headings imported
    pub markdown_headings: usize,

    /// Table headings imported
    pub table_headings: usize,

    /// Records that were not imported
    pub dropped: Vec<DroppedRecord>,
}

impl ImportSummary {
    /// Check if some records were not imported.
    pub fn has_dropped(&self) -> bool {
        !self.dropped.is_empty()
    }
}

/// A document ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Suggested file name (`{id}.json`, or `output.json`)
    pub file_name: String,

    /// MIME type of the content
    pub mime_type: &'static str,

    /// UTF-8 JSON content
    pub bytes: Vec<u8>,
}

impl Export {
    /// Get the content as text.
    pub fn as_str(&self) -> &str {
        // Produced by serde_json, always UTF-8.
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.bytes.len()
    }

    /// Write the content into `dir` under the suggested file name.
    pub fn save_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<std::path::PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}
