//! The report produced by one counting pass.
//!
//! Reports serialise with serde for `--json` output and render through
//! `Display` as the plain-text word count summary.

use crate::section::Section;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Per-section word counts plus document totals.
pub struct Report {
    /// Sections in document order.
    pub sections: Vec<Section>,
    /// Sum of every section's word count.
    pub total_words: usize,
    /// Lines across all code blocks.
    pub code_lines: usize,
}

impl Report {
    #[must_use]
    /// Builds a report, deriving the word total from `sections`.
    pub fn new(sections: Vec<Section>, code_lines: usize) -> Self {
        let total_words = sections.iter().map(|s| s.word_count).sum();
        Self {
            sections,
            total_words,
            code_lines,
        }
    }

    /// Sections opened by a heading, as `(title, words)` pairs.
    pub fn titled(&self) -> impl Iterator<Item = (&str, usize)> {
        self.sections
            .iter()
            .filter_map(|s| s.title.as_deref().map(|t| (t, s.word_count)))
    }

    #[must_use]
    /// Closing summary line, e.g. `(Total 3 words, 0 code lines)`.
    pub fn summary(&self) -> String {
        format!(
            "(Total {} words, {} code lines)",
            self.total_words, self.code_lines
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Count of words")?;
        for (title, words) in self.titled() {
            writeln!(f, "{title}: {words} words")?;
        }
        write!(f, "{}", self.summary())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A report paired with the document it was counted from.
pub struct DocumentReport {
    /// Path of the counted document as given or discovered.
    pub path: String,
    /// Counts for that document.
    pub report: Report,
}

#[cfg(test)]
#[path = "tests/report.rs"]
mod tests;
