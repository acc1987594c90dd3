//! Album file creation

use super::loader::{split_fields, ALBUM_EXTENSION};
use crate::duration::is_parsable_duration;
use crate::error::{CatalogError, Result};
use crate::fs::Filesystem;
use std::io;
use std::path::{Path, PathBuf};

/// Characters that cannot appear in an album file name
const RESERVED_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// File name (without extension) used for an album
pub fn sanitize_album_name(album_name: &str) -> String {
    album_name
        .chars()
        .map(|c| if RESERVED_CHARS.contains(&c) { '_' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Write a new album file and return its path
///
/// Each line must be `title\tartist\tduration` with a non-blank title and a
/// parsable duration. Existing files are never overwritten.
pub fn write_album<F, S>(fs: &F, dir: &Path, album_name: &str, lines: &[S]) -> Result<PathBuf>
where
    F: Filesystem,
    S: AsRef<str>,
{
    let safe_name = sanitize_album_name(album_name);
    if safe_name.is_empty() {
        return Err(CatalogError::InvalidArgument(format!(
            "album name {:?} is empty once sanitized",
            album_name
        )));
    }

    for (i, line) in lines.iter().enumerate() {
        validate_line(line.as_ref()).map_err(|reason| {
            CatalogError::InvalidArgument(format!("song {}: {}", i + 1, reason))
        })?;
    }

    if !fs.exists(dir) {
        log::debug!("Creating playlist directory {:?}", dir);
        fs.create_dir_all(dir)
            .map_err(|e| CatalogError::io(dir, e))?;
    }
    if !fs.is_dir(dir) {
        return Err(CatalogError::NotADirectory(dir.to_path_buf()));
    }

    let file = dir.join(format!("{}.{}", safe_name, ALBUM_EXTENSION));
    if fs.exists(&file) {
        return Err(CatalogError::AlreadyExists(file));
    }

    let mut contents = String::new();
    for line in lines {
        contents.push_str(line.as_ref());
        contents.push('\n');
    }

    // The existence check above can race; create_new is the real guard
    fs.create_new(&file, contents.as_bytes())
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => CatalogError::AlreadyExists(file.clone()),
            _ => CatalogError::io(&file, e),
        })?;

    log::info!("Wrote album {:?} with {} song(s)", file, lines.len());
    Ok(file)
}

fn validate_line(line: &str) -> std::result::Result<(), String> {
    if line.contains(['\n', '\r']) {
        return Err("line breaks are not allowed".to_string());
    }

    let fields = split_fields(line);
    if fields.len() < 3 {
        return Err(format!("expected title, artist and duration in {:?}", line));
    }
    if fields[0].trim().is_empty() {
        return Err("title is blank".to_string());
    }
    if !is_parsable_duration(fields[2].trim()) {
        return Err(format!("invalid duration {:?}", fields[2].trim()));
    }

    Ok(())
}
