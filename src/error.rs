//! Catalog error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Playlist directory does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Playlist path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid line in album {}: {line}", .file.display())]
    Parse { file: PathBuf, line: String },

    #[error("Album already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_file_and_line() {
        let err = CatalogError::Parse {
            file: PathBuf::from("playlist/Live.tsv"),
            line: "Only\tTwo".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("playlist/Live.tsv"));
        assert!(msg.contains("Only\tTwo"));
    }
}
