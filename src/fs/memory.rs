//! In-memory implementation for tests and embedding

use super::traits::Filesystem;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(Vec<u8>),
}

/// Filesystem held entirely in memory
///
/// Entries are kept in insertion order and `list_files` returns them in that
/// order, which lets tests check that callers do their own sorting.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    entries: Mutex<Vec<(PathBuf, Node)>>,
}

impl MemoryFilesystem {
    /// Create an empty filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory (and its parents)
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        add_dirs(&mut self.lock(), path.as_ref());
        self
    }

    /// Add a file (and its parent directories), replacing any previous contents
    pub fn with_file(self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        let path = path.as_ref();
        let contents: String = contents.into();
        {
            let mut entries = self.lock();
            if let Some(parent) = path.parent() {
                add_dirs(&mut entries, parent);
            }
            entries.retain(|(p, _)| p != path);
            entries.push((path.to_path_buf(), Node::File(contents.into_bytes())));
        }
        self
    }

    /// Contents of a file as text, if it exists
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock().iter().find_map(|(p, node)| match node {
            Node::File(bytes) if p == path.as_ref() => {
                Some(String::from_utf8_lossy(bytes).into_owned())
            }
            _ => None,
        })
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(PathBuf, Node)>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn node(&self, path: &Path) -> Option<Node> {
        self.lock()
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, node)| node.clone())
    }
}

fn add_dirs(entries: &mut Vec<(PathBuf, Node)>, path: &Path) {
    for ancestor in path.ancestors().collect::<Vec<_>>().into_iter().rev() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        if !entries.iter().any(|(p, _)| p == ancestor) {
            entries.push((ancestor.to_path_buf(), Node::Dir));
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.node(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.node(path), Some(Node::Dir))
    }

    fn list_files(&self, dir: &Path, recursive: bool) -> io::Result<Vec<PathBuf>> {
        match self.node(dir) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => {
                return Err(io::Error::other(format!("not a directory: {:?}", dir)))
            }
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such directory: {:?}", dir),
                ))
            }
        }

        Ok(self
            .lock()
            .iter()
            .filter(|(_, node)| matches!(node, Node::File(_)))
            .filter(|(p, _)| {
                if recursive {
                    p.starts_with(dir) && p != dir
                } else {
                    p.parent() == Some(dir)
                }
            })
            .map(|(p, _)| p.clone())
            .collect())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.node(path) {
            Some(Node::File(bytes)) => String::from_utf8(bytes)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Some(Node::Dir) => Err(io::Error::other(format!("is a directory: {:?}", path))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {:?}", path),
            )),
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut entries = self.lock();
        let blocked = path.ancestors().any(|ancestor| {
            entries
                .iter()
                .any(|(p, node)| p == ancestor && matches!(node, Node::File(_)))
        });
        if blocked {
            return Err(io::Error::other(format!("a file is in the way of {:?}", path)));
        }
        add_dirs(&mut entries, path);
        Ok(())
    }

    fn create_new(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut entries = self.lock();
        if entries.iter().any(|(p, _)| p == path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("file exists: {:?}", path),
            ));
        }

        let parent_ok = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => entries
                .iter()
                .any(|(p, node)| p == parent && matches!(node, Node::Dir)),
            _ => true,
        };
        if !parent_ok {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent directory missing for {:?}", path),
            ));
        }

        entries.push((path.to_path_buf(), Node::File(contents.to_vec())));
        Ok(())
    }
}
