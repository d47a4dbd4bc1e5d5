//! # modality
//!
//! Editing core for medical modality definition documents.
//!
//! A definition is a small structured document: identification metadata,
//! numbered free-text and table headings, and a preparation block. It is
//! exchanged as a flat JSON array of records which this library imports,
//! edits and exports.
//!
//! ## Quick Start
//!
//! ```no_run
//! use modality::{load_file, render, JsonFormat};
//!
//! fn main() -> modality::Result<()> {
//!     // Import a definition
//!     let doc = load_file("ct.json")?;
//!
//!     // Review it as Markdown
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options)?;
//!     println!("{}", markdown);
//!
//!     // Export it again, normalized
//!     let json = render::to_json(&doc, JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Lossless record format**: metadata, markdown and table headings
//! - **Heading order**: exports sort headings by dotted number
//! - **Lenient import**: wrongly shaped fields become empty values
//! - **Atomic sessions**: failed imports never touch the current document
//! - **Review output**: Markdown rendering with optional frontmatter

pub mod codec;
pub mod error;
pub mod model;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use codec::{Decoded, DroppedRecord};
pub use error::{Error, Result};
pub use model::{
    DocumentModel, Edit, HeadingPart, LabelPart, ListField, MarkdownHeading, MetaData,
    PreparationMetaData, Table, TableHeading, TablePreset, TextField,
};
pub use render::{JsonFormat, RenderOptions};
pub use session::{Export, ImportSummary, Session, View};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load a definition from a JSON file.
///
/// # Arguments
///
/// * `path` - Path to the JSON file
///
/// # Example
///
/// ```no_run
/// use modality::load_file;
///
/// let doc = load_file("ct.json").unwrap();
/// println!("Headings: {}", doc.headings().len());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<DocumentModel> {
    let file = File::open(path)?;
    load_reader(BufReader::new(file))
}

/// Load a definition from bytes.
///
/// # Example
///
/// ```
/// use modality::load_bytes;
///
/// let doc = load_bytes(br#"[{"level": "meta-data-id", "content": "ct"}]"#).unwrap();
/// assert_eq!(doc.meta.id, "ct");
/// ```
pub fn load_bytes(data: &[u8]) -> Result<DocumentModel> {
    codec::decode_bytes(data).map(|decoded| decoded.document)
}

/// Load a definition from a reader.
pub fn load_reader<R: Read>(mut reader: R) -> Result<DocumentModel> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    load_bytes(&data)
}

/// Load a definition from bytes, reporting records that were dropped.
pub fn load_bytes_with_report(data: &[u8]) -> Result<Decoded> {
    codec::decode_bytes(data)
}

/// Save a definition as pretty-printed JSON.
///
/// # Example
///
/// ```no_run
/// use modality::{save_file, DocumentModel};
///
/// let mut doc = DocumentModel::new();
/// doc.meta.id = "ct".to_string();
/// save_file(&doc, "ct.json").unwrap();
/// ```
pub fn save_file<P: AsRef<Path>>(doc: &DocumentModel, path: P) -> Result<()> {
    let bytes = render::to_json_bytes(doc, JsonFormat::Pretty)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Convert a definition file to a Markdown review.
///
/// # Example
///
/// ```no_run
/// use modality::to_markdown;
///
/// let markdown = to_markdown("ct.json").unwrap();
/// std::fs::write("ct.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    to_markdown_with_options(path, &RenderOptions::default())
}

/// Convert a definition file to Markdown with custom options.
///
/// # Example
///
/// ```no_run
/// use modality::{to_markdown_with_options, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_frontmatter(true)
///     .with_preparation(false);
/// let markdown = to_markdown_with_options("ct.json", &options).unwrap();
/// ```
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let doc = load_file(path)?;
    render::to_markdown(&doc, options)
}

/// Re-export a definition file as normalized JSON.
///
/// # Example
///
/// ```no_run
/// use modality::{to_json, JsonFormat};
///
/// let json = to_json("ct.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("ct.normalized.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = load_file(path)?;
    render::to_json(&doc, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_load_bytes_empty_data() {
        let data: [u8; 0] = [];
        let result = load_bytes(&data);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_load_bytes_invalid_utf8() {
        let data = [0xFF, 0xFE, 0x00, 0x01];
        let result = load_bytes(&data);
        assert!(matches!(result, Err(Error::Utf8(_))));
    }

    #[test]
    fn test_load_bytes_object_top_level() {
        let result = load_bytes(b"{\"level\": \"meta-data-id\"}");
        assert!(matches!(
            result,
            Err(Error::NotAnArray { found: "an object" })
        ));
    }

    #[test]
    fn test_load_bytes_empty_array() {
        let doc = load_bytes(b"[]").unwrap();
        assert_eq!(doc.meta, MetaData::default());
        assert!(doc.headings().is_empty());
        assert!(!doc.preparation.date_of_preparation.is_empty());
    }

    #[test]
    fn test_load_reader() {
        let data = br#"[{"level": "1", "title": "Scope", "content-type": "markdown", "content": "x"}]"#;
        let doc = load_reader(&data[..]).unwrap();
        assert_eq!(doc.markdown_headings, vec![MarkdownHeading::new("1", "Scope", "x")]);
    }

    #[test]
    fn test_load_with_report() {
        let data = br#"[{"level": "1", "content-type": "image", "content": "x"}]"#;
        let decoded = load_bytes_with_report(data).unwrap();
        assert!(!decoded.is_lossless());
        assert_eq!(decoded.dropped[0].content_type, "image");
    }

    #[test]
    fn test_load_file_missing() {
        let result = load_file("/nonexistent/modality.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
