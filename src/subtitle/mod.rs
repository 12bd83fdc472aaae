/*!
 * Subtitle entries and their SRT representation.
 *
 * - `parser`: SRT text to `Subtitle` sequences
 * - `writer`: `Subtitle` sequences back to SRT files
 */

use std::fmt;

use crate::timestamp;

pub mod parser;
pub mod writer;

pub use parser::SrtParser;
pub use writer::SrtWriter;

// @struct: Single caption entry, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle {
    index: usize,
    start_ms: u64,
    end_ms: u64,
    text: String,
}

impl Subtitle {
    /// Create a subtitle from millisecond times
    pub fn new(index: usize, start_ms: u64, end_ms: u64, text: impl Into<String>) -> Self {
        Subtitle {
            index,
            start_ms,
            end_ms,
            text: text.into(),
        }
    }

    /// Create a subtitle from second times, rounded to the millisecond
    pub fn from_seconds(index: usize, start: f64, end: f64, text: impl Into<String>) -> Self {
        Self::new(
            index,
            timestamp::seconds_to_millis(start),
            timestamp::seconds_to_millis(end),
            text,
        )
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    pub fn end_ms(&self) -> u64 {
        self.end_ms
    }

    /// Start time in seconds
    pub fn start_time(&self) -> f64 {
        timestamp::millis_to_seconds(self.start_ms)
    }

    /// End time in seconds
    pub fn end_time(&self) -> f64 {
        timestamp::millis_to_seconds(self.end_ms)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display duration, zero when the end precedes the start
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }

    // @returns: Copy moved later in time by offset_ms, saturating at u64::MAX
    pub fn shifted(self, offset_ms: u64) -> Self {
        Subtitle {
            start_ms: self.start_ms.saturating_add(offset_ms),
            end_ms: self.end_ms.saturating_add(offset_ms),
            ..self
        }
    }

    // @returns: Copy carrying a new display index
    pub fn renumbered(self, index: usize) -> Self {
        Subtitle { index, ..self }
    }

    /// `HH:MM:SS,mmm --> HH:MM:SS,mmm` line for this entry
    pub fn timing_line(&self) -> String {
        format!(
            "{} --> {}",
            timestamp::format_timestamp(self.start_ms),
            timestamp::format_timestamp(self.end_ms)
        )
    }
}

impl fmt::Display for Subtitle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{}", self.timing_line())?;
        write!(f, "{}", self.text)
    }
}
