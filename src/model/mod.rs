//! Catalog data model
//!
//! Values produced by the loader and consumed by the query and report layers.

mod song;

pub use song::SongEntry;
