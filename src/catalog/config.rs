//! Catalog configuration

use std::path::PathBuf;

/// Directory used when no playlist directory is given
pub const DEFAULT_PLAYLIST_DIR: &str = "playlist";

/// Map user input to a playlist directory
///
/// Missing or blank input selects [`DEFAULT_PLAYLIST_DIR`]. Anything else is
/// used as given; existence is checked when the catalog is loaded.
pub fn resolve_playlist_dir(input: Option<&str>) -> PathBuf {
    match input {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_PLAYLIST_DIR),
    }
}

/// Where and how to read the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory holding the album files
    pub playlist_dir: PathBuf,

    /// Descend into subdirectories when discovering album files
    pub recursive: bool,
}

impl CatalogConfig {
    /// Create a non-recursive configuration for `playlist_dir`
    pub fn new(playlist_dir: PathBuf) -> Self {
        Self {
            playlist_dir,
            recursive: false,
        }
    }

    /// Build a configuration from raw user input
    pub fn from_input(input: Option<&str>) -> Self {
        Self::new(resolve_playlist_dir(input))
    }

    /// Set recursive discovery
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::from_input(None)
    }
}
