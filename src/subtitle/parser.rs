use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;
use crate::file_utils::FileManager;
use crate::subtitle::Subtitle;
use crate::timestamp;

// @module: SRT text parsing

// @const: Timing range anywhere in the content, used as a coarse format check
static TIMING_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{2,}:\d{2}:\d{2},\d{3}\s*-->\s*\d{2,}:\d{2}:\d{2},\d{3}").expect("timing range regex is valid")
});

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Accumulates the lines of one SRT block until a blank line closes it
#[derive(Default)]
struct BlockBuilder<'a> {
    first_line: usize,
    started: bool,
    broken: bool,
    index: Option<usize>,
    timing: Option<(u64, u64)>,
    text: Vec<&'a str>,
}

impl<'a> BlockBuilder<'a> {
    fn push_line(&mut self, line: &'a str, line_no: usize) -> Result<(), SubtitleError> {
        let trimmed = line.trim();

        if !self.started {
            self.started = true;
            self.first_line = line_no;
            match trimmed.parse::<usize>() {
                Ok(index) => self.index = Some(index),
                Err(_) => self.broken = true,
            }
            return Ok(());
        }

        if self.broken {
            return Ok(());
        }

        if self.timing.is_none() {
            if trimmed.contains("-->") {
                self.timing = Some(parse_timing_line(trimmed, line_no)?);
            } else {
                // Text before the timing line
                self.broken = true;
            }
            return Ok(());
        }

        self.text.push(line);
        Ok(())
    }

    // @returns: Subtitle when index, timing and text are all present
    fn finish(self) -> Option<Subtitle> {
        if !self.started {
            return None;
        }

        let text = self.text.join("\n");
        let text = text.trim();

        match (self.broken, self.index, self.timing) {
            (false, Some(index), Some((start_ms, end_ms))) if !text.is_empty() => {
                Some(Subtitle::new(index, start_ms, end_ms, text))
            }
            _ => {
                debug!("Dropping incomplete subtitle block starting at line {}", self.first_line);
                None
            }
        }
    }
}

// @parses: `start --> end [position hints]`
fn parse_timing_line(line: &str, line_no: usize) -> Result<(u64, u64), SubtitleError> {
    let (left, right) = line
        .split_once("-->")
        .ok_or_else(|| SubtitleError::Format(format!("line {}: missing '-->'", line_no)))?;
    let end_text = right.split_whitespace().next().unwrap_or("");

    let at_line = |e: SubtitleError| match e {
        SubtitleError::Format(msg) => SubtitleError::Format(format!("line {}: {}", line_no, msg)),
        other => other,
    };
    let start = timestamp::parse_timestamp(left).map_err(at_line)?;
    let end = timestamp::parse_timestamp(end_text).map_err(at_line)?;

    Ok((start, end))
}

/// SRT parser producing subtitles in source order
pub struct SrtParser;

impl SrtParser {
    /// Parse SRT content into subtitle entries.
    ///
    /// Source indices are kept as written; incomplete blocks are skipped.
    pub fn parse(content: &str) -> Result<Vec<Subtitle>, SubtitleError> {
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);

        if content.trim().is_empty() {
            return Err(SubtitleError::Validation("SRT content is empty".to_string()));
        }

        if !TIMING_RANGE_REGEX.is_match(content) {
            return Err(SubtitleError::Validation(
                "content contains no SRT timing line (HH:MM:SS,mmm --> HH:MM:SS,mmm)".to_string(),
            ));
        }

        let mut subtitles = Vec::new();
        let mut block = BlockBuilder::default();

        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                if let Some(subtitle) = std::mem::take(&mut block).finish() {
                    subtitles.push(subtitle);
                }
                continue;
            }
            block.push_line(line, i + 1)?;
        }

        if let Some(subtitle) = block.finish() {
            subtitles.push(subtitle);
        }

        debug!("Parsed {} subtitle entries", subtitles.len());
        Ok(subtitles)
    }

    /// Read a UTF-8 SRT file and parse it
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Subtitle>, SubtitleError> {
        let content = FileManager::read_to_string(path)?;
        Self::parse(&content)
    }
}
