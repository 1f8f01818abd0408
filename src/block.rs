//! Block representation for documents made of prose and code.
//!
//! A block is the unit a document source hands to the counter: a markdown cell
//! in a notebook, or a run of text between code fences in a markdown file.
//! Blocks carry their kind and raw text and are never modified by the counter.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Classifies how a block's text takes part in counting.
pub enum BlockKind {
    /// Free-form markdown whose words are counted per section.
    Prose,
    /// Verbatim source whose lines are tallied but never counted as words.
    Code,
    /// Anything else (raw cells, output); ignored entirely.
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One unit of document content in document order.
pub struct Block {
    /// How the text is accounted for.
    pub kind: BlockKind,
    /// Raw multi-line content, absent when the source had none.
    pub text: Option<String>,
}

impl Block {
    #[must_use]
    /// Prose block holding `text`.
    pub fn prose(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Prose,
            text: Some(text.into()),
        }
    }

    #[must_use]
    /// Code block holding `text`.
    pub fn code(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Code,
            text: Some(text.into()),
        }
    }

    #[must_use]
    /// Block of a kind the counter ignores.
    pub fn other(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Other,
            text: Some(text.into()),
        }
    }

    #[must_use]
    /// Lines of the block's text, or `None` when the text is absent or empty.
    pub fn lines(&self) -> Option<std::str::Split<'_, char>> {
        self.text
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(|text| text.split('\n'))
    }
}
