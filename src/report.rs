//! Song listing output
//!
//! Front ends render the same listing either as a console table or as JSON.

use crate::duration::format_duration;
use crate::model::SongEntry;
use serde::Serialize;
use std::io::{self, Write};

/// Output format of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

/// Write `songs` in the requested format
pub fn write_report<W: Write>(
    out: &mut W,
    songs: &[SongEntry],
    format: ReportFormat,
) -> io::Result<()> {
    match format {
        ReportFormat::Table => write_table(out, songs),
        ReportFormat::Json => {
            let json = songs_to_json(songs).map_err(io::Error::from)?;
            writeln!(out, "{}", json)
        }
    }
}

/// Column table: Album, #, Title, Artist, Duration
pub fn write_table<W: Write>(out: &mut W, songs: &[SongEntry]) -> io::Result<()> {
    if songs.is_empty() {
        return writeln!(out, "No songs found.");
    }

    let header = format!(
        "{:<35} | {:<5} | {:<35} | {:<25} | {:<8}",
        "Album", "#", "Title", "Artist", "Duration"
    );
    writeln!(out, "{}", header)?;
    writeln!(out, "{}", "-".repeat(header.chars().count()))?;

    for song in songs {
        writeln!(
            out,
            "{:<35} | {:<5} | {:<35} | {:<25} | {:<8}",
            song.album_name(),
            song.track_number(),
            song.title(),
            song.artist(),
            song.duration_text()
        )?;
    }

    let total_seconds: u64 = songs.iter().filter_map(|s| s.duration()).map(u64::from).sum();
    let unknown = songs.iter().filter(|s| s.duration().is_none()).count();

    writeln!(out)?;
    writeln!(out, "Total songs: {}", songs.len())?;
    if unknown > 0 {
        writeln!(
            out,
            "Total time: {} ({} with unknown duration)",
            format_duration(total_seconds),
            unknown
        )?;
    } else {
        writeln!(out, "Total time: {}", format_duration(total_seconds))?;
    }

    Ok(())
}

/// JSON array of `{albumName, trackNumber, title, artist, duration}`
pub fn songs_to_json(songs: &[SongEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(songs)
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// `{"error": "<message>"}` body for a failed request
pub fn error_to_json(message: &str) -> String {
    serde_json::to_string(&ErrorBody { error: message })
        .unwrap_or_else(|_| String::from(r#"{"error":""}"#))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn songs() -> Vec<SongEntry> {
        vec![
            SongEntry::new("Greatest Hits", 1, "Song A", "Artist X", "3:15", 195),
            SongEntry::new("Greatest Hits", 2, "Song B", "Artist Y", "later", -1),
        ]
    }

    fn table(songs: &[SongEntry]) -> String {
        let mut out = Vec::new();
        write_table(&mut out, songs).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(table(&[]), "No songs found.\n");
    }

    #[test]
    fn test_table_layout() {
        let text = table(&songs());
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Album"));
        assert!(lines[0].contains(" | #     | Title"));
        assert_eq!(lines[1].len(), lines[0].len());
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("Greatest Hits"));
        assert!(lines[2].contains("| 1     | Song A"));
        assert!(lines[3].contains("later"));
        assert!(text.contains("Total songs: 2"));
        assert!(text.contains("Total time: 3:15 (1 with unknown duration)"));
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_report(&mut out, &songs(), ReportFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let list = value.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1]["trackNumber"], 2);
        assert_eq!(list[1]["duration"], "later");
    }

    #[test]
    fn test_error_json_escapes() {
        let body = error_to_json("bad \"quote\"\tand tab");
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["error"], "bad \"quote\"\tand tab");
    }
}
