//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! We look for a `wordcount.toml` in the working directory, and if present load
//! settings from there. This provides the file extensions to scan for and the
//! default output mode.

use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory by [`Config::load`].
pub const CONFIG_FILE: &str = "wordcount.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from `wordcount.toml` or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["md".to_string(), "ipynb".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = false)]
    /// Print reports as JSON unless overridden on the command line.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_extensions: vec!["md".to_string(), "ipynb".to_string()],
            json: false,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from `wordcount.toml` if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
            log::debug!("loaded config from {}", path.display());
            config
        } else {
            log::warn!("ignoring invalid config {}", path.display());
            Self::default()
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
