use log::{debug, info, warn};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::app_config::JoinConfig;
use crate::errors::SubtitleError;
use crate::file_utils::FileResolver;
use crate::merger::SubtitleMerger;
use crate::subtitle::{SrtParser, SrtWriter, Subtitle};
use crate::timestamp;

// @module: Application controller for subtitle joining

/// Per-file line of a join report
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    pub path: PathBuf,
    pub subtitle_count: usize,
}

/// Outcome of a join run
#[derive(Debug, Clone, PartialEq)]
pub struct JoinReport {
    /// Inputs in merge order
    pub files: Vec<FileSummary>,
    /// Entries in the merged output
    pub subtitle_count: usize,
    /// End time of the last merged entry
    pub end_ms: u64,
    /// Written file, `None` for dry runs
    pub output_path: Option<PathBuf>,
}

impl fmt::Display for JoinReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Joined {} file(s):", self.files.len())?;
        for file in &self.files {
            writeln!(f, "  {} ({} entries)", file.path.display(), file.subtitle_count)?;
        }
        writeln!(f, "Entries: {}", self.subtitle_count)?;
        write!(f, "Ends at: {}", timestamp::format_timestamp(self.end_ms))?;
        if let Some(path) = &self.output_path {
            write!(f, "\nOutput: {}", path.display())?;
        }
        Ok(())
    }
}

/// Runs the join pipeline: resolve, parse, merge, write
pub struct Controller {
    // @field: Join settings
    config: JoinConfig,
}

impl Controller {
    // @method: Create a new controller with the given settings
    pub fn with_config(config: JoinConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JoinConfig {
        &self.config
    }

    /// Run the full pipeline and write the merged file
    pub fn run(&self) -> Result<JoinReport, SubtitleError> {
        let start_time = Instant::now();

        let output_path = self
            .config
            .output_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| SubtitleError::Validation("output path is required".to_string()))?;

        let (mut report, merged) = self.merge_inputs()?;

        SrtWriter::write(&merged, output_path)?;
        report.output_path = Some(output_path.to_path_buf());

        info!(
            "Wrote {} entries from {} file(s) to {} in {:.2?}",
            report.subtitle_count,
            report.files.len(),
            output_path.display(),
            start_time.elapsed()
        );
        Ok(report)
    }

    /// Resolve, parse and merge without writing anything
    pub fn dry_run(&self) -> Result<JoinReport, SubtitleError> {
        let (report, _) = self.merge_inputs()?;
        info!("Dry run: {} entries from {} file(s)", report.subtitle_count, report.files.len());
        Ok(report)
    }

    fn merge_inputs(&self) -> Result<(JoinReport, Vec<Subtitle>), SubtitleError> {
        let folder = self
            .config
            .folder
            .as_deref()
            .ok_or_else(|| SubtitleError::Validation("folder is required".to_string()))?;

        let files = FileResolver::resolve(folder, &self.config.file_spec, self.config.sort_mode)?;
        if files.is_empty() {
            warn!(
                "No files matched '{}' in {}, output will be empty",
                self.config.file_spec,
                folder.display()
            );
        }

        // Any parse failure aborts before the writer runs
        let mut sequences = Vec::with_capacity(files.len());
        let mut summaries = Vec::with_capacity(files.len());
        for path in &files {
            let sequence = Self::parse_one(path)?;
            summaries.push(FileSummary {
                path: path.clone(),
                subtitle_count: sequence.len(),
            });
            sequences.push(sequence);
        }

        let merged = SubtitleMerger::new(self.config.buffer_ms).merge(sequences);

        let report = JoinReport {
            files: summaries,
            subtitle_count: merged.len(),
            end_ms: merged.last().map_or(0, Subtitle::end_ms),
            output_path: None,
        };
        Ok((report, merged))
    }

    fn parse_one(path: &Path) -> Result<Vec<Subtitle>, SubtitleError> {
        let sequence = SrtParser::parse_file(path).map_err(|e| match e {
            SubtitleError::Validation(msg) => SubtitleError::Validation(format!("{}: {}", path.display(), msg)),
            SubtitleError::Format(msg) => SubtitleError::Format(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;
        debug!("Parsed {} entries from {}", sequence.len(), path.display());
        Ok(sequence)
    }
}
