use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::errors::SubtitleError;
use crate::file_utils::FileManager;
use crate::subtitle::Subtitle;

// @module: SRT serialization

/// Writes subtitle sequences as SRT, numbering blocks 1..N
pub struct SrtWriter;

impl SrtWriter {
    /// Render subtitles to SRT text.
    ///
    /// Indices stored on the entries are ignored. Blocks are separated by one
    /// blank line and the text ends with a single newline; no entries render
    /// to an empty string.
    pub fn render(subtitles: &[Subtitle]) -> String {
        subtitles
            .iter()
            .enumerate()
            .map(|(i, sub)| format!("{}\n{}\n{}\n", i + 1, sub.timing_line(), sub.text()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write subtitles to an SRT file, replacing it atomically
    pub fn write<P: AsRef<Path>>(subtitles: &[Subtitle], path: P) -> Result<(), SubtitleError> {
        let path = path.as_ref();
        let content = Self::render(subtitles);

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        FileManager::ensure_dir(parent).map_err(|e| SubtitleError::io(parent, e))?;

        let mut file = NamedTempFile::new_in(parent).map_err(|e| SubtitleError::io(path, e))?;
        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| SubtitleError::io(path, e))?;
        if let Some(permissions) = Self::output_permissions(path) {
            file.as_file()
                .set_permissions(permissions)
                .map_err(|e| SubtitleError::io(path, e))?;
        }
        file.persist(path).map_err(|e| SubtitleError::io(path, e.error))?;

        debug!("Wrote {} subtitle entries to {}", subtitles.len(), path.display());
        Ok(())
    }

    // @returns: Mode of the file being replaced, or the regular-file default for a new one
    fn output_permissions(path: &Path) -> Option<Permissions> {
        match fs::metadata(path) {
            Ok(meta) => Some(meta.permissions()),
            Err(_) => Self::default_permissions(),
        }
    }

    #[cfg(unix)]
    fn default_permissions() -> Option<Permissions> {
        use std::os::unix::fs::PermissionsExt;
        Some(Permissions::from_mode(0o644))
    }

    #[cfg(not(unix))]
    fn default_permissions() -> Option<Permissions> {
        None
    }
}
