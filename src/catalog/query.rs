//! Filtering and ordering of loaded songs

use crate::model::SongEntry;
use std::cmp::Ordering;
use std::str::FromStr;

/// Ordering applied to a song listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Album name (case-insensitive), then track number
    #[default]
    Album,

    /// Duration with unparsable durations last, then album, then track
    Duration,
}

impl SortOrder {
    pub fn by_duration(self) -> bool {
        self == SortOrder::Duration
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("duration") {
            Ok(SortOrder::Duration)
        } else if s.eq_ignore_ascii_case("album") {
            Ok(SortOrder::Album)
        } else {
            Err(format!("Unknown sort mode: {}", s))
        }
    }
}

/// Filters and ordering for one listing request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongQuery {
    /// Substring of the album name
    pub album: Option<String>,

    /// Substring of the artist
    pub artist: Option<String>,

    /// Prefix of the title
    pub title_prefix: Option<String>,

    pub sort: SortOrder,
}

impl SongQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.title_prefix = Some(prefix.into());
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Filter then sort `songs`
    pub fn apply(&self, songs: &[SongEntry]) -> Vec<SongEntry> {
        let filtered = filter_songs(
            songs,
            self.album.as_deref(),
            self.artist.as_deref(),
            self.title_prefix.as_deref(),
        );
        sort_songs(&filtered, self.sort.by_duration())
    }
}

/// Keep songs matching every given filter, preserving input order
///
/// Blank filters match everything. Matching is case-insensitive: album and
/// artist are substring tests, the title is a prefix test.
pub fn filter_songs(
    songs: &[SongEntry],
    album_filter: Option<&str>,
    artist_filter: Option<&str>,
    title_prefix: Option<&str>,
) -> Vec<SongEntry> {
    let album = normalize(album_filter);
    let artist = normalize(artist_filter);
    let prefix = normalize(title_prefix);

    songs
        .iter()
        .filter(|s| album.as_ref().map_or(true, |a| fold(s.album_name()).contains(a.as_str())))
        .filter(|s| artist.as_ref().map_or(true, |a| fold(s.artist()).contains(a.as_str())))
        .filter(|s| prefix.as_ref().map_or(true, |p| fold(s.title()).starts_with(p.as_str())))
        .cloned()
        .collect()
}

/// Return a sorted copy of `songs`
///
/// Both orderings end on album and track number, so only fully equal keys
/// fall back to input order.
pub fn sort_songs(songs: &[SongEntry], by_duration: bool) -> Vec<SongEntry> {
    let mut sorted = songs.to_vec();
    if by_duration {
        sorted.sort_by(|a, b| {
            duration_key(a)
                .cmp(&duration_key(b))
                .then_with(|| album_then_track(a, b))
        });
    } else {
        sorted.sort_by(album_then_track);
    }
    sorted
}

fn album_then_track(a: &SongEntry, b: &SongEntry) -> Ordering {
    compare_ignore_case(a.album_name(), b.album_name())
        .then_with(|| a.track_number().cmp(&b.track_number()))
}

/// Unparsable durations sort after every real one
fn duration_key(song: &SongEntry) -> u64 {
    song.duration().map(u64::from).unwrap_or(u64::MAX)
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn normalize(filter: Option<&str>) -> Option<String> {
    filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(fold)
}

fn fold(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(album: &str, track: u32, title: &str, artist: &str, seconds: i32) -> SongEntry {
        SongEntry::new(album, track, title, artist, "", seconds)
    }

    fn titles(songs: &[SongEntry]) -> Vec<&str> {
        songs.iter().map(|s| s.title()).collect()
    }

    fn sample() -> Vec<SongEntry> {
        vec![
            song("Live", 1, "Opening", "The Band", 240),
            song("greatest Hits", 2, "Second", "Solo Artist", 120),
            song("Greatest Hits", 1, "First", "The Band", -1),
            song("b-sides", 1, "Outtake", "", 120),
        ]
    }

    #[test]
    fn test_no_filters_is_identity() {
        let songs = sample();
        assert_eq!(filter_songs(&songs, None, None, None), songs);
        assert_eq!(filter_songs(&songs, Some(""), Some("  "), Some("\t")), songs);
    }

    #[test]
    fn test_album_and_artist_substring() {
        let songs = sample();

        let hits = filter_songs(&songs, Some(" HITS "), None, None);
        assert_eq!(titles(&hits), vec!["Second", "First"]);

        let band = filter_songs(&songs, None, Some("band"), None);
        assert_eq!(titles(&band), vec!["Opening", "First"]);

        let both = filter_songs(&songs, Some("greatest"), Some("band"), None);
        assert_eq!(titles(&both), vec!["First"]);
    }

    #[test]
    fn test_title_prefix() {
        let songs = sample();
        let o = filter_songs(&songs, None, None, Some("o"));
        assert_eq!(titles(&o), vec!["Opening", "Outtake"]);

        let none = filter_songs(&songs, None, None, Some("pening"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_sort_by_album() {
        let sorted = sort_songs(&sample(), false);
        assert_eq!(titles(&sorted), vec!["Outtake", "First", "Second", "Opening"]);
    }

    #[test]
    fn test_sort_by_duration_puts_unparsable_last() {
        let sorted = sort_songs(&sample(), true);
        assert_eq!(titles(&sorted), vec!["Outtake", "Second", "Opening", "First"]);
    }

    #[test]
    fn test_zero_duration_sorts_first() {
        let songs = vec![song("A", 1, "Unknown", "", -1), song("A", 2, "Silence", "", 0)];
        let sorted = sort_songs(&songs, true);
        assert_eq!(titles(&sorted), vec!["Silence", "Unknown"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        for by_duration in [false, true] {
            let once = sort_songs(&sample(), by_duration);
            let twice = sort_songs(&once, by_duration);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let songs = sample();
        let before = songs.clone();
        let _ = sort_songs(&songs, true);
        assert_eq!(songs, before);
    }

    #[test]
    fn test_query_apply() {
        let query = SongQuery::new()
            .with_artist("the band")
            .with_sort(SortOrder::Duration);
        assert_eq!(titles(&query.apply(&sample())), vec!["Opening", "First"]);
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!("duration".parse::<SortOrder>(), Ok(SortOrder::Duration));
        assert_eq!("Duration".parse::<SortOrder>(), Ok(SortOrder::Duration));
        assert_eq!("album".parse::<SortOrder>(), Ok(SortOrder::Album));
        assert!("length".parse::<SortOrder>().is_err());
    }
}
