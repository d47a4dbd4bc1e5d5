//! Rendering module for converting documents to output formats.

mod json;
mod markdown;
mod options;
mod result;

pub use json::{to_json, to_json_bytes, JsonFormat, PRETTY_INDENT};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::RenderOptions;
pub use result::{DocumentStats, RenderResult};
