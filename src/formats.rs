//! Format trait and implementations for different document types.
//!
//! A format turns the raw contents of a document into the ordered block
//! sequence the counter consumes. Markdown files are split around their code
//! blocks with tree-sitter; notebooks map their cells directly onto blocks.

pub mod markdown;
pub mod notebook;

use crate::block::Block;
use crate::error::Result;
use std::path::Path;

/// Source of blocks for one kind of document.
pub trait Format {
    /// File suffixes (without the dot) this format reads.
    fn extensions(&self) -> &'static [&'static str];
    /// Splits a document's contents into blocks in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the contents cannot be parsed as this format.
    fn blocks(&self, source: &str) -> Result<Vec<Block>>;
}

const FORMATS: &[&dyn Format] = &[&markdown::MarkdownFormat, &notebook::NotebookFormat];

#[must_use]
/// Picks the format handling `path` by its extension, ignoring case.
pub fn format_for(path: &Path) -> Option<&'static dyn Format> {
    let ext = path.extension()?.to_str()?;
    FORMATS.iter().copied().find(|format| {
        format
            .extensions()
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    })
}
