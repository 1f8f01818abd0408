//! wordcount: counts words per top-level section of markdown documents.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use wordcount::{config, counter, input, ui, DocumentReport};

#[derive(Parser)]
#[command(name = "wordcount")]
#[command(about = "Count words per section of markdown documents and notebooks", long_about = None)]
struct Args {
    /// Files or directories to count
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Print reports as JSON
    #[arg(long, conflicts_with = "panel")]
    json: bool,

    /// Show reports in a terminal panel
    #[arg(long)]
    panel: bool,

    /// Log debug output
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    let json = args.json || (cfg.json && !args.panel);

    let documents = input::find_documents(args.paths, &cfg.file_extensions)?;

    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let mut reports = Vec::new();
    for doc in &documents {
        match input::load_blocks(doc) {
            Ok(blocks) => reports.push(DocumentReport {
                path: doc.display().to_string(),
                report: counter::count(&blocks),
            }),
            Err(e) => log::warn!("skipping {}: {e}", doc.display()),
        }
    }

    if args.panel {
        run_tui(&reports)
    } else if json {
        let json = serde_json::to_string_pretty(&reports).map_err(io::Error::other)?;
        println!("{json}");
        Ok(())
    } else {
        print_reports(&reports);
        Ok(())
    }
}

fn print_reports(reports: &[DocumentReport]) {
    for (i, doc) in reports.iter().enumerate() {
        if reports.len() > 1 {
            if i > 0 {
                println!();
            }
            println!("==> {} <==", doc.path);
        }
        println!("{}", doc.report);
    }
}

fn run_tui(reports: &[DocumentReport]) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, reports);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    reports: &[DocumentReport],
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, reports))?;

        if let Event::Key(key) = event::read()? {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return Ok(());
            }
        }
    }
}
