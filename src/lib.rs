//! Playlist Catalog - tab-separated album files as a song library
//!
//! This library reads a directory of `<Album>.tsv` files into songs,
//! filters and sorts them for display, and writes new albums without ever
//! overwriting an existing one.

pub mod catalog;
pub mod duration;
pub mod error;
pub mod fs;
pub mod model;
pub mod prompt;
pub mod report;

pub use catalog::{CatalogConfig, PlaylistCatalog, SongQuery, SortOrder};
pub use error::{CatalogError, Result};
pub use model::SongEntry;
