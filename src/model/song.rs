use crate::duration::UNPARSABLE;
use serde::Serialize;

/// A single track read from an album file
///
/// Entries are never mutated after loading; filtering and sorting build new
/// sequences of clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongEntry {
    /// Album file name with its extension removed
    album_name: String,

    /// 1-based position within the album file
    track_number: u32,

    title: String,

    artist: String,

    /// Duration exactly as written in the album file
    #[serde(rename = "duration")]
    duration_text: String,

    /// Parsed duration, or `UNPARSABLE`
    #[serde(skip)]
    duration_seconds: i32,
}

impl SongEntry {
    pub fn new(
        album_name: impl Into<String>,
        track_number: u32,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_text: impl Into<String>,
        duration_seconds: i32,
    ) -> Self {
        Self {
            album_name: album_name.into(),
            track_number,
            title: title.into(),
            artist: artist.into(),
            duration_text: duration_text.into(),
            duration_seconds,
        }
    }

    pub fn album_name(&self) -> &str {
        &self.album_name
    }

    pub fn track_number(&self) -> u32 {
        self.track_number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn duration_text(&self) -> &str {
        &self.duration_text
    }

    /// Duration in seconds, `-1` when the text could not be parsed
    pub fn duration_seconds(&self) -> i32 {
        self.duration_seconds
    }

    /// Duration in seconds if it was parsable
    pub fn duration(&self) -> Option<u32> {
        if self.duration_seconds == UNPARSABLE {
            None
        } else {
            u32::try_from(self.duration_seconds).ok()
        }
    }
}
