//! Markdown format implementation using tree-sitter-md.
//!
//! Fenced and indented code blocks become code blocks; the text between them
//! becomes prose blocks, so ATX headings stay on their own lines for the counter.

use crate::block::Block;
use crate::error::{Error, Result};
use crate::formats::Format;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

/// Tree-sitter query matching every kind of markdown code block.
const CODE_BLOCK_QUERY: &str = "[(fenced_code_block) (indented_code_block)] @code";

/// Splits markdown documents around their code blocks.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn extensions(&self) -> &'static [&'static str] {
        &["md", "markdown"]
    }

    fn blocks(&self, source: &str) -> Result<Vec<Block>> {
        let language: tree_sitter::Language = tree_sitter_md::LANGUAGE.into();
        let mut parser = Parser::new();
        parser.set_language(&language)?;
        let tree = parser.parse(source, None).ok_or(Error::Parse)?;
        let query = Query::new(&language, CODE_BLOCK_QUERY)?;

        let mut code_blocks = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
        while let Some(m) = matches.next() {
            for capture in m.captures {
                code_blocks.push((capture.node.byte_range(), code_text(capture.node, source)));
            }
        }
        code_blocks.sort_by_key(|(range, _)| range.start);

        let mut blocks = Vec::new();
        let mut prose_start = 0;
        for (range, code) in code_blocks {
            if range.start < prose_start {
                continue;
            }
            push_prose(&mut blocks, &source[prose_start..range.start]);
            blocks.push(Block::code(code));
            prose_start = range.end;
        }
        push_prose(&mut blocks, &source[prose_start..]);

        log::debug!("split markdown into {} blocks", blocks.len());
        Ok(blocks)
    }
}

/// Body of a code block: fence content only for fenced blocks.
fn code_text(node: Node<'_>, source: &str) -> String {
    let body = if node.kind() == "fenced_code_block" {
        let mut walker = node.walk();
        let content = node
            .children(&mut walker)
            .find(|child| child.kind() == "code_fence_content");
        content.map_or("", |content| &source[content.byte_range()])
    } else {
        &source[node.byte_range()]
    };
    trim_blank_tail(body).to_string()
}

/// Prose between code blocks, without the blank lines that border the code.
fn push_prose(blocks: &mut Vec<Block>, text: &str) {
    if text.trim().is_empty() {
        return;
    }
    blocks.push(Block::prose(trim_blank_tail(trim_blank_head(text))));
}

/// Cuts whitespace-only lines off the end, leaving the last content line intact.
fn trim_blank_tail(text: &str) -> &str {
    let content_end = text.trim_end_matches([' ', '\t', '\n']).len();
    match text[content_end..].find('\n') {
        Some(newline) => &text[..content_end + newline],
        None => text,
    }
}

/// Cuts whitespace-only lines off the start, keeping the first content line's indent.
fn trim_blank_head(text: &str) -> &str {
    let content_start = text.len() - text.trim_start_matches([' ', '\t', '\n']).len();
    match text[..content_start].rfind('\n') {
        Some(newline) => &text[newline + 1..],
        None => text,
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
