//! The UI renders counted documents into a terminal panel.
//!
//! The panel lists each document's titled sections with their word counts and
//! closes with a summary aggregated over every document shown.

use crate::report::DocumentReport;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Renders the word count panel for `documents`.
pub fn draw(f: &mut Frame, documents: &[DocumentReport]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let list = List::new(items(documents)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Count of words"),
    );
    f.render_widget(list, chunks[0]);

    let summary = Paragraph::new(summary(documents))
        .block(Block::default().borders(Borders::ALL).title("Wordcount"));
    f.render_widget(summary, chunks[1]);
}

fn items(documents: &[DocumentReport]) -> Vec<ListItem<'static>> {
    let mut items = Vec::new();
    for doc in documents {
        // Path headers only help once there is more than one document.
        if documents.len() > 1 {
            items.push(ListItem::new(Line::styled(
                doc.path.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
        }
        for (title, words) in doc.report.titled() {
            items.push(ListItem::new(format!("{title}: {words} words")));
        }
    }
    items
}

/// Summary line aggregated over `documents`.
fn summary(documents: &[DocumentReport]) -> String {
    let words: usize = documents.iter().map(|d| d.report.total_words).sum();
    let code: usize = documents.iter().map(|d| d.report.code_lines).sum();
    format!("(Total {words} words, {code} code lines)")
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
