//! Album discovery and TSV record parsing

use crate::duration::parse_duration;
use crate::error::{CatalogError, Result};
use crate::fs::Filesystem;
use crate::model::SongEntry;
use std::path::{Path, PathBuf};

/// Extension of album files, matched case-insensitively
pub const ALBUM_EXTENSION: &str = "tsv";

/// Load every album under `dir` as one ordered sequence
///
/// Albums are read in ascending path order and each album keeps its file
/// order. A malformed record in any album fails the whole load.
pub fn load_songs<F: Filesystem>(fs: &F, dir: &Path, recursive: bool) -> Result<Vec<SongEntry>> {
    if !fs.exists(dir) {
        return Err(CatalogError::NotFound(dir.to_path_buf()));
    }
    if !fs.is_dir(dir) {
        return Err(CatalogError::NotADirectory(dir.to_path_buf()));
    }

    let album_files = discover_albums(fs, dir, recursive)?;
    log::debug!("Found {} album file(s) in {:?}", album_files.len(), dir);

    let mut songs = Vec::new();
    for album_file in &album_files {
        let contents = fs
            .read_to_string(album_file)
            .map_err(|e| CatalogError::io(album_file, e))?;
        let album = parse_album(album_file, &contents)?;
        log::debug!("Read {} track(s) from {:?}", album.len(), album_file);
        songs.extend(album);
    }

    log::info!(
        "Loaded {} songs from {} album(s) in {:?}",
        songs.len(),
        album_files.len(),
        dir
    );

    Ok(songs)
}

/// Album files under `dir`, sorted by path string
fn discover_albums<F: Filesystem>(fs: &F, dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs
        .list_files(dir, recursive)
        .map_err(|e| CatalogError::io(dir, e))?
        .into_iter()
        .filter(|path| {
            let keep = is_album_file(path);
            if !keep {
                log::debug!("Skipping non-album file {:?}", path);
            }
            keep
        })
        .collect();

    // Byte order of the whole path, not component order
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(files)
}

fn is_album_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            name.to_string_lossy()
                .to_lowercase()
                .ends_with(&format!(".{}", ALBUM_EXTENSION))
        })
        .unwrap_or(false)
}

/// Album name for a file: its base name without the last extension
pub fn album_name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match file_name.rfind('.') {
        Some(i) if i > 0 => file_name[..i].to_string(),
        _ => file_name,
    }
}

/// Split a record into tab-separated fields, dropping trailing empty fields
pub(crate) fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split('\t').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

fn parse_album(album_file: &Path, contents: &str) -> Result<Vec<SongEntry>> {
    let album_name = album_name_from_path(album_file);
    let mut songs = Vec::new();
    let mut track_number = 1;

    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_fields(line);
        if fields.len() < 3 {
            return Err(CatalogError::Parse {
                file: album_file.to_path_buf(),
                line: line.to_string(),
            });
        }

        let duration_text = fields[2].trim();
        songs.push(SongEntry::new(
            album_name.clone(),
            track_number,
            fields[0].trim(),
            fields[1].trim(),
            duration_text,
            parse_duration(duration_text),
        ));
        track_number += 1;
    }

    Ok(songs)
}
