/*!
 * # subjoin - SRT subtitle joiner
 *
 * A Rust library for joining several SRT subtitle files into one continuous
 * track.
 *
 * ## Features
 *
 * - Resolve input files from a folder plus comma-separated globs or names
 * - Parse SRT files tolerant of CRLF, BOMs and stray blank lines
 * - Shift each file after the previous one with a configurable silence buffer
 * - Renumber the merged track and write it back atomically
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timestamp`: `HH:MM:SS,mmm` parsing and formatting
 * - `subtitle`: The `Subtitle` value type
 *   - `subtitle::parser`: SRT text to subtitles
 *   - `subtitle::writer`: Subtitles to SRT files
 * - `file_utils`: File system helpers and the file resolver
 * - `merger`: Sequential, non-overlapping merge
 * - `app_controller`: The join pipeline
 * - `app_config`: Configuration management
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod merger;
pub mod subtitle;
pub mod timestamp;

// Re-export main types for easier usage
pub use app_config::{Config, JoinConfig};
pub use app_controller::{Controller, JoinReport};
pub use errors::SubtitleError;
pub use file_utils::{FileResolver, SortMode};
pub use merger::SubtitleMerger;
pub use subtitle::{SrtParser, SrtWriter, Subtitle};
