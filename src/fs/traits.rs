//! Filesystem trait definition

use std::io;
use std::path::{Path, PathBuf};

/// Storage operations needed by the catalog
pub trait Filesystem {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Regular files under `dir`
    ///
    /// Only direct children unless `recursive` is set, in which case files at
    /// any depth are returned. No ordering is guaranteed.
    fn list_files(&self, dir: &Path, recursive: bool) -> io::Result<Vec<PathBuf>>;

    /// Read a whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create `path` and any missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create a new file with `contents`
    ///
    /// Must fail with [`io::ErrorKind::AlreadyExists`] if the file is already
    /// present, and must never truncate an existing file.
    fn create_new(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}
