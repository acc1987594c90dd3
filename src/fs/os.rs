//! Real disk implementation

use super::traits::Filesystem;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Filesystem backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl OsFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path, recursive: bool) -> io::Result<Vec<PathBuf>> {
        let mut walker = WalkDir::new(dir).min_depth(1);

        // Non-recursive = only the root directory.
        if !recursive {
            walker = walker.max_depth(1);
        }

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            // is_file() follows symlinks, so linked album files still count
            if entry.path().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn create_new(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
        file.write_all(contents)?;
        file.sync_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_depth() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("top.tsv"), "").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("deep.tsv"), "").unwrap();

        let disk = OsFilesystem::new();

        let flat = disk.list_files(temp.path(), false).unwrap();
        assert_eq!(flat, vec![temp.path().join("top.tsv")]);

        let mut all = disk.list_files(temp.path(), true).unwrap();
        all.sort();
        assert_eq!(
            all,
            vec![
                temp.path().join("nested").join("deep.tsv"),
                temp.path().join("top.tsv"),
            ]
        );
    }

    #[test]
    fn test_create_new_refuses_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Album.tsv");
        let disk = OsFilesystem::new();

        disk.create_new(&path, b"first").unwrap();
        let err = disk.create_new(&path, b"second").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }
}
