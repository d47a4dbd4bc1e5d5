//! Mapping between documents and the flat JSON record array.
//!
//! Exported files are a JSON array of records shaped
//! `{"level", "title", "content-type", "content"}`. The `level` either
//! selects a metadata field (`meta-data-id`, `prepration-meta-data-prepared_by`,
//! ...) or carries a heading number (`1.2`).
//!
//! # Example
//!
//! ```
//! use modality::codec;
//! use modality::model::{DocumentModel, MarkdownHeading};
//!
//! let mut doc = DocumentModel::new();
//! doc.meta.id = "ct".to_string();
//! doc.markdown_headings.push(MarkdownHeading::new("1", "Scope", "Imaging"));
//!
//! let json = modality::render::to_json(&doc, modality::JsonFormat::Compact)?;
//! let restored = codec::decode_str(&json)?.document;
//! assert_eq!(restored.meta.id, "ct");
//! assert_eq!(restored.markdown_headings, doc.markdown_headings);
//! # Ok::<(), modality::Error>(())
//! ```

mod decode;
mod encode;
pub mod keys;

pub use decode::{decode, decode_bytes, decode_str, decode_with_report, Decoded, DroppedRecord};
pub use encode::{encode, Content, Record};
pub use keys::{ContentType, WireField};
