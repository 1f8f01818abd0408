//! The section counter: one pass over a document's prose lines.
//!
//! Prose from every block is joined into a single line sequence before scanning,
//! so a heading in one block can close a section whose body came from another.
//! Code blocks only contribute their line count.

use crate::block::{Block, BlockKind};
use crate::report::Report;
use crate::section::Section;
use once_cell::sync::Lazy;
use regex::Regex;

/// Heading-shaped line: up to six `#`, one space, then the title.
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(#{1,6}) ([^\r\n]*)").unwrap());

/// Classification of a single prose line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// Level-1 heading opening a new section.
    Boundary(&'a str),
    /// Level 2-6 heading; neither a boundary nor counted.
    Subheading,
    /// Ordinary prose carrying this many space-separated tokens.
    Words(usize),
}

fn classify(line: &str) -> Line<'_> {
    match HEADING.captures(line) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(marker), Some(title)) if marker.as_str().len() == 1 => {
                Line::Boundary(title.as_str())
            }
            _ => Line::Subheading,
        },
        // Splitting on the literal space keeps empty tokens, so "" counts as one word.
        None => Line::Words(line.split(' ').count()),
    }
}

#[must_use]
/// Counts words per top-level section and lines of code across `blocks`.
///
/// Words before the first top-level heading are discarded once a heading is
/// seen; without any top-level heading they form one untitled section.
pub fn count(blocks: &[Block]) -> Report {
    let mut code_lines = 0;
    let mut titles: Vec<&str> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    let mut counter = 0;

    for block in blocks {
        let Some(lines) = block.lines() else {
            continue;
        };
        match block.kind {
            BlockKind::Code => code_lines += lines.count(),
            BlockKind::Prose => {
                for line in lines {
                    match classify(line) {
                        Line::Boundary(title) => {
                            if !titles.is_empty() {
                                counts.push(counter);
                            }
                            titles.push(title);
                            counter = 0;
                        }
                        Line::Subheading => {}
                        Line::Words(words) => counter += words,
                    }
                }
            }
            BlockKind::Other => {}
        }
    }
    counts.push(counter);

    let sections = if titles.is_empty() {
        counts.into_iter().map(Section::untitled).collect()
    } else {
        titles
            .into_iter()
            .zip(counts)
            .map(|(title, words)| Section::titled(title, words))
            .collect()
    };

    Report::new(sections, code_lines)
}

#[cfg(test)]
#[path = "tests/counter.rs"]
mod tests;
