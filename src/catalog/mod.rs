//! Playlist catalog
//!
//! Discovers album files, parses them into [`SongEntry`] values, answers
//! filtered/sorted listings and writes new albums. Every operation goes
//! through a [`Filesystem`], so the same code runs against the disk and the
//! in-memory fake.

pub mod config;
pub mod loader;
pub mod query;
pub mod writer;

pub use config::{resolve_playlist_dir, CatalogConfig, DEFAULT_PLAYLIST_DIR};
pub use loader::album_name_from_path;
pub use query::{filter_songs, sort_songs, SongQuery, SortOrder};
pub use writer::sanitize_album_name;

use crate::error::Result;
use crate::fs::{Filesystem, OsFilesystem};
use crate::model::SongEntry;
use std::path::{Path, PathBuf};

/// Entry point shared by every front end
#[derive(Debug, Clone, Default)]
pub struct PlaylistCatalog<F: Filesystem = OsFilesystem> {
    fs: F,
}

impl PlaylistCatalog<OsFilesystem> {
    /// Catalog backed by the real filesystem
    pub fn on_disk() -> Self {
        Self::new(OsFilesystem::new())
    }
}

impl<F: Filesystem> PlaylistCatalog<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Load every song under `dir`
    ///
    /// Fails with `NotFound`/`NotADirectory` for a bad directory, and with
    /// `Parse` if any album has a record with fewer than three fields. No
    /// songs are returned on failure.
    pub fn load_songs(&self, dir: &Path, recursive: bool) -> Result<Vec<SongEntry>> {
        loader::load_songs(&self.fs, dir, recursive)
    }

    /// Load the catalog described by `config`
    pub fn load(&self, config: &CatalogConfig) -> Result<Vec<SongEntry>> {
        self.load_songs(&config.playlist_dir, config.recursive)
    }

    /// Load, filter and sort in one step
    pub fn list(&self, config: &CatalogConfig, query: &SongQuery) -> Result<Vec<SongEntry>> {
        let songs = self.load(config)?;
        let listed = query.apply(&songs);
        log::debug!("{} of {} songs match {:?}", listed.len(), songs.len(), query);
        Ok(listed)
    }

    /// Create `<dir>/<sanitized album name>.tsv` from tab-joined lines
    pub fn write_album<S: AsRef<str>>(
        &self,
        dir: &Path,
        album_name: &str,
        lines: &[S],
    ) -> Result<PathBuf> {
        writer::write_album(&self.fs, dir, album_name, lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::fs::MemoryFilesystem;

    #[test]
    fn test_write_then_list() {
        let catalog = PlaylistCatalog::new(MemoryFilesystem::new());
        let config = CatalogConfig::from_input(None);

        catalog
            .write_album(
                &config.playlist_dir,
                "Road Trip",
                &["Long Drive\tThe Band\t5:10", "Short Stop\tSolo\t0:45"],
            )
            .unwrap();

        let query = SongQuery::new().with_sort(SortOrder::Duration);
        let songs = catalog.list(&config, &query).unwrap();

        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].title(), "Short Stop");
        assert_eq!(songs[0].track_number(), 2);
        assert_eq!(songs[1].album_name(), "Road Trip");
    }

    #[test]
    fn test_list_missing_directory() {
        let catalog = PlaylistCatalog::new(MemoryFilesystem::new());
        let err = catalog
            .list(&CatalogConfig::default(), &SongQuery::new())
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }
}
