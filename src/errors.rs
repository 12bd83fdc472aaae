/*!
 * Error types for the subjoin application.
 *
 * Every stage of the join pipeline reports failures through `SubtitleError`,
 * using the thiserror crate for ergonomic error definitions. The application
 * layer (config loading, CLI) wraps these in `anyhow` with extra context.
 */

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while resolving, parsing, merging or writing subtitles
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// A required parameter is missing or the SRT content is unusable
    #[error("Validation error: {0}")]
    Validation(String),

    /// The input folder does not exist
    #[error("Folder not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A timestamp does not match `HH:MM:SS,mmm`
    #[error("Invalid timestamp: {0}")]
    Format(String),

    /// A glob pattern in the file specification could not be compiled
    #[error("Invalid file pattern: {0}")]
    Glob(String),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File the operation was working on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

impl SubtitleError {
    // @creates: Io variant bound to a path
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for errors the caller fixes by changing the input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Glob(_))
    }
}
