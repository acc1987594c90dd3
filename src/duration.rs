//! Track duration codec
//!
//! Album files store durations as `mm:ss` or `hh:mm:ss`. Parsing never fails:
//! anything outside that grammar maps to [`UNPARSABLE`].

/// Sentinel for duration text that is present but not a valid duration
pub const UNPARSABLE: i32 = -1;

/// Parse `mm:ss` or `hh:mm:ss` into seconds
///
/// Returns [`UNPARSABLE`] for blank input, the wrong number of components,
/// non-numeric components, negative values, minutes or seconds above 59
/// (minutes are unbounded in the two-component form), or a total that does
/// not fit in an `i32`.
pub fn parse_duration(text: &str) -> i32 {
    if text.trim().is_empty() {
        return UNPARSABLE;
    }

    let parts: Vec<&str> = text.split(':').collect();
    let seconds = match parts.as_slice() {
        [m, s] => parse_component(m, None)
            .zip(parse_component(s, Some(59)))
            .map(|(m, s)| m * 60 + s),
        [h, m, s] => parse_component(h, None)
            .zip(parse_component(m, Some(59)))
            .zip(parse_component(s, Some(59)))
            .map(|((h, m), s)| h * 3600 + m * 60 + s),
        _ => None,
    };

    seconds
        .and_then(|total| i32::try_from(total).ok())
        .unwrap_or(UNPARSABLE)
}

/// Validation predicate used before a line is accepted into a new album
pub fn is_parsable_duration(text: &str) -> bool {
    parse_duration(text) >= 0
}

/// Render seconds as `m:ss`, or `h:mm:ss` from one hour up
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

fn parse_component(text: &str, max: Option<i64>) -> Option<i64> {
    let value = text.parse::<i64>().ok()?;
    if value < 0 || max.is_some_and(|max| value > max) {
        return None;
    }
    // Cap before multiplying so the total cannot overflow
    if value > i64::from(i32::MAX) {
        return None;
    }
    Some(value)
}
