//! Section representation for counted documents.
//!
//! A section is the stretch of prose that follows a top-level heading, up to the
//! next top-level heading or the end of the document. When a document has no
//! top-level heading at all, its prose forms a single untitled section.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Titled grouping of prose words, delimited by top-level headings.
pub struct Section {
    /// Heading text without the leading `# ` markup; `None` for the implicit section.
    pub title: Option<String>,
    /// Words counted in the section body.
    pub word_count: usize,
}

impl Section {
    #[must_use]
    /// Section opened by a top-level heading.
    pub fn titled(title: impl Into<String>, word_count: usize) -> Self {
        Self {
            title: Some(title.into()),
            word_count,
        }
    }

    #[must_use]
    /// Implicit section used when no top-level heading appears.
    pub fn untitled(word_count: usize) -> Self {
        Self {
            title: None,
            word_count,
        }
    }
}
