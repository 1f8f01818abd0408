//! Errors raised while turning documents on disk into blocks.
//!
//! Counting itself cannot fail; only reading and parsing documents can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures in the document loading layer.
pub enum Error {
    /// A document could not be read.
    #[error("Failed to read '{path}': {source}")]
    Read {
        /// Document that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Notebook contents were not valid nbformat JSON.
    #[error("Invalid notebook JSON: {0}")]
    Notebook(#[from] serde_json::Error),

    /// The markdown grammar could not be loaded into the parser.
    #[error("Markdown grammar unavailable: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// A code block query failed to compile.
    #[error("Invalid code block query: {0}")]
    Query(#[from] tree_sitter::QueryError),

    /// The parser produced no syntax tree.
    #[error("Markdown parse was cancelled")]
    Parse,

    /// No format handles the document's extension.
    #[error("Unsupported document '{0}'")]
    UnsupportedDocument(PathBuf),
}

/// Result alias for document loading.
pub type Result<T> = std::result::Result<T, Error>;
