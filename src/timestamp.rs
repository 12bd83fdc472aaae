use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;

// @module: SRT timestamp codec (HH:MM:SS,mmm)

// @const: Single SRT timestamp, hours may exceed two digits
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2,}):(\d{2}):(\d{2}),(\d{3})$").expect("timestamp regex is valid")
});

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// Parse an SRT timestamp into whole milliseconds
pub fn parse_timestamp(text: &str) -> Result<u64, SubtitleError> {
    let trimmed = text.trim();
    let caps = TIMESTAMP_REGEX
        .captures(trimmed)
        .ok_or_else(|| SubtitleError::Format(format!("'{}' does not match HH:MM:SS,mmm", trimmed)))?;

    let field = |i: usize| -> Result<u64, SubtitleError> {
        caps[i]
            .parse::<u64>()
            .map_err(|e| SubtitleError::Format(format!("'{}': {}", trimmed, e)))
    };

    let hours = field(1)?;
    let minutes = field(2)?;
    let seconds = field(3)?;
    let millis = field(4)?;

    hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|h| h.checked_add(minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND + millis))
        .ok_or_else(|| SubtitleError::Format(format!("'{}' is out of range", trimmed)))
}

/// Parse an SRT timestamp into seconds
pub fn parse_seconds(text: &str) -> Result<f64, SubtitleError> {
    parse_timestamp(text).map(millis_to_seconds)
}

/// Format milliseconds as `HH:MM:SS,mmm`
pub fn format_timestamp(ms: u64) -> String {
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = ms % MS_PER_SECOND;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Format seconds as `HH:MM:SS,mmm`.
///
/// The value is rounded half away from zero to whole milliseconds first, so a
/// carry out of the millisecond field lands in the seconds field.
pub fn format_seconds(seconds: f64) -> String {
    format_timestamp(seconds_to_millis(seconds))
}

// @converts: Seconds to rounded milliseconds, clamping negatives and NaN to zero
pub fn seconds_to_millis(seconds: f64) -> u64 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0;
    }
    (seconds * 1000.0).round() as u64
}

// @converts: Milliseconds to seconds
pub fn millis_to_seconds(ms: u64) -> f64 {
    ms as f64 / 1000.0
}
