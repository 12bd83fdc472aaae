use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::anyhow;
use glob::{MatchOptions, Pattern};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::SubtitleError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a UTF-8 file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, SubtitleError> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|e| SubtitleError::io(path, e))
    }
}

/// Ordering applied to resolved files
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Lexicographic ascending
    Asc,
    /// Lexicographic descending
    Desc,
    /// Literal order for plain file lists, ascending once a glob is involved
    #[default]
    Inferred,
}

impl SortMode {
    // @returns: Lowercase mode identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
            Self::Inferred => "inferred",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            "inferred" => Ok(Self::Inferred),
            _ => Err(anyhow!("Invalid sort mode: {}", s)),
        }
    }
}

/// Expands a folder plus comma-separated file specification into paths
pub struct FileResolver;

impl FileResolver {
    /// Resolve `file_spec` inside `folder`.
    ///
    /// Each comma-separated pattern is a glob when it contains `*`, otherwise a
    /// literal file name; literals that do not exist are skipped. Paths found
    /// by more than one pattern are kept once, at their first position.
    pub fn resolve<P: AsRef<Path>>(
        folder: P,
        file_spec: &str,
        sort_mode: SortMode,
    ) -> Result<Vec<PathBuf>, SubtitleError> {
        let folder = folder.as_ref();

        if folder.as_os_str().is_empty() {
            return Err(SubtitleError::Validation("folder is required".to_string()));
        }
        if file_spec.trim().is_empty() {
            return Err(SubtitleError::Validation("file specification is required".to_string()));
        }
        if !FileManager::dir_exists(folder) {
            return Err(SubtitleError::NotFound(folder.to_path_buf()));
        }

        let mut seen = HashSet::new();
        let mut paths = Vec::new();

        for pattern in file_spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let matches = if pattern.contains('*') {
                Self::expand_glob(folder, pattern)?
            } else {
                Self::literal(folder, pattern).into_iter().collect()
            };

            for path in matches {
                if seen.insert(path.clone()) {
                    paths.push(path);
                }
            }
        }

        let has_glob = file_spec.contains('*');
        match sort_mode {
            SortMode::Asc => Self::sort_lexicographic(&mut paths),
            SortMode::Desc => {
                Self::sort_lexicographic(&mut paths);
                paths.reverse();
            }
            SortMode::Inferred if has_glob => Self::sort_lexicographic(&mut paths),
            SortMode::Inferred => {}
        }

        debug!("Resolved {} file(s) from '{}' ({})", paths.len(), file_spec, sort_mode);
        Ok(paths)
    }

    // @sorts: By the whole path string, not component by component
    fn sort_lexicographic(paths: &mut [PathBuf]) {
        paths.sort_by_cached_key(|p| p.to_string_lossy().into_owned());
    }

    // @expands: Glob relative to folder, regular files only, dotfiles need a literal dot
    fn expand_glob(folder: &Path, pattern: &str) -> Result<Vec<PathBuf>, SubtitleError> {
        let escaped_folder = Pattern::escape(&folder.to_string_lossy());
        let full_pattern = Path::new(&escaped_folder).join(pattern);
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };

        let entries = glob::glob_with(&full_pattern.to_string_lossy(), options)
            .map_err(|e| SubtitleError::Glob(format!("'{}': {}", pattern, e)))?;

        let mut matches = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                SubtitleError::io(path, e.into_error())
            })?;
            if FileManager::file_exists(&path) {
                matches.push(path);
            }
        }

        if matches.is_empty() {
            debug!("Pattern '{}' matched nothing in {}", pattern, folder.display());
        }
        Ok(matches)
    }

    // @checks: Literal file name inside folder
    fn literal(folder: &Path, name: &str) -> Option<PathBuf> {
        let path = folder.join(name);
        if FileManager::file_exists(&path) {
            Some(path)
        } else {
            warn!("Skipping missing file: {}", path.display());
            None
        }
    }
}
