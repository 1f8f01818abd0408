//! Jupyter notebook format (nbformat 4 JSON).
//!
//! Markdown cells are prose, code cells are code, and raw cells are carried as
//! blocks the counter ignores. Outputs and metadata are never read.

use crate::block::{Block, BlockKind};
use crate::error::Result;
use crate::formats::Format;
use serde::Deserialize;

/// Reads `.ipynb` notebooks cell by cell.
pub struct NotebookFormat;

#[derive(Debug, Deserialize)]
/// The subset of a notebook document that holds content.
struct Notebook {
    #[serde(default)]
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    cell_type: String,
    #[serde(default)]
    source: Option<Source>,
}

/// nbformat allows cell source as one string or a list of line strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Source {
    Text(String),
    Lines(Vec<String>),
}

impl Source {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Lines(lines) => lines.concat(),
        }
    }
}

impl Cell {
    fn into_block(self) -> Block {
        let kind = match self.cell_type.as_str() {
            "markdown" => BlockKind::Prose,
            "code" => BlockKind::Code,
            _ => BlockKind::Other,
        };
        Block {
            kind,
            text: self.source.map(Source::into_text),
        }
    }
}

impl Format for NotebookFormat {
    fn extensions(&self) -> &'static [&'static str] {
        &["ipynb"]
    }

    fn blocks(&self, source: &str) -> Result<Vec<Block>> {
        let notebook: Notebook = serde_json::from_str(source)?;
        log::debug!("notebook has {} cells", notebook.cells.len());
        Ok(notebook.cells.into_iter().map(Cell::into_block).collect())
    }
}

#[cfg(test)]
#[path = "../tests/notebook.rs"]
mod tests;
