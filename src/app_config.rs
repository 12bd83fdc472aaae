use anyhow::{anyhow, Context, Result};
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::file_utils::SortMode;

/// Application configuration module
/// This module handles loading and validating configuration settings.
/// Values here are defaults; command line options override them.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Join pipeline settings
    #[serde(default)]
    pub join: JoinConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for one join run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JoinConfig {
    // @field: Folder holding the input subtitles
    #[serde(default)]
    pub folder: Option<PathBuf>,

    // @field: Comma-separated globs or file names
    #[serde(default = "default_file_spec")]
    pub file_spec: String,

    // @field: Destination SRT file
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    // @field: Silence inserted between files, in milliseconds
    #[serde(default = "default_buffer_ms")]
    pub buffer_ms: u64,

    // @field: Ordering of resolved files
    #[serde(default)]
    pub sort_mode: SortMode,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            folder: None,
            file_spec: default_file_spec(),
            output_path: None,
            buffer_ms: default_buffer_ms(),
            sort_mode: SortMode::default(),
        }
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_file_spec() -> String {
    "*.srt".to_string()
}

fn default_buffer_ms() -> u64 {
    100
}

// Upper bound for buffer_ms (one hour)
const MAX_BUFFER_MS: u64 = 3_600_000;

impl Config {
    /// Load configuration from a JSON file, or defaults when it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.join.validate()
    }
}

impl JoinConfig {
    /// Validate the join settings
    pub fn validate(&self) -> Result<()> {
        if self.file_spec.trim().is_empty() {
            return Err(anyhow!("File specification must not be empty"));
        }

        if self.buffer_ms > MAX_BUFFER_MS {
            return Err(anyhow!(
                "Buffer of {} ms exceeds the maximum of {} ms",
                self.buffer_ms, MAX_BUFFER_MS
            ));
        }

        Ok(())
    }
}
