//! wordcount: per-section word counts for markdown documents and notebooks.
//!
//! Documents are loaded as ordered [`block::Block`]s, which
//! [`counter::count`] turns into a [`report::Report`] of top-level sections,
//! their word counts, and the number of code lines.
#![allow(clippy::multiple_crate_versions)]

pub mod block;
pub mod config;
pub mod counter;
pub mod error;
pub mod formats;
pub mod input;
pub mod report;
pub mod section;
pub mod ui;

pub use block::{Block, BlockKind};
pub use counter::count;
pub use report::{DocumentReport, Report};
pub use section::Section;
