//! Document discovery and loading.
//!
//! Paths given on the command line are taken as documents directly; directories
//! are walked with the `ignore` crate (honouring hidden and gitignored files)
//! and filtered by extension. Each document is read and handed to the format
//! matching its extension.

use crate::block::Block;
use crate::error::{Error, Result};
use crate::formats;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Collects documents from `paths`, descending into directories.
///
/// Files named explicitly are kept whatever their extension; files found while
/// walking a directory must carry one of `extensions`. An empty `paths` scans
/// the current directory.
///
/// # Errors
///
/// Returns an error if a named path does not exist.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let mut documents = Vec::new();
    for path in paths {
        if path.is_file() {
            documents.push(path);
        } else if path.is_dir() {
            documents.extend(walk(&path, extensions));
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ));
        }
    }

    log::debug!("found {} documents", documents.len());
    Ok(documents)
}

fn walk(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let walker = WalkBuilder::new(root)
        .sort_by_file_name(OsStr::cmp)
        .build();

    for entry in walker {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                if is_file && has_extension(path, extensions) {
                    found.push(path.to_path_buf());
                }
            }
            Err(e) => log::warn!("skipping unreadable entry: {e}"),
        }
    }
    found
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}

/// Reads a document and splits it into blocks with the matching format.
///
/// # Errors
///
/// Returns an error if the file cannot be read, no format handles its
/// extension, or its contents fail to parse.
pub fn load_blocks(path: &Path) -> Result<Vec<Block>> {
    let format =
        formats::format_for(path).ok_or_else(|| Error::UnsupportedDocument(path.to_path_buf()))?;
    let source = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let blocks = format.blocks(&source)?;
    log::debug!("{}: {} blocks", path.display(), blocks.len());
    Ok(blocks)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
