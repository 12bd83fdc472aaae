// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use subjoin::app_config::{self, Config};
use subjoin::{Controller, SortMode};

/// CLI Wrapper for SortMode to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliSortMode {
    Asc,
    Desc,
    Inferred,
}

impl From<CliSortMode> for SortMode {
    fn from(cli_mode: CliSortMode) -> Self {
        match cli_mode {
            CliSortMode::Asc => SortMode::Asc,
            CliSortMode::Desc => SortMode::Desc,
            CliSortMode::Inferred => SortMode::Inferred,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Join SRT files from a folder into one continuous subtitle file
    Join(JoinArgs),

    /// Generate shell completions for subjoin
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct JoinArgs {
    /// Folder containing the subtitle files
    #[arg(value_name = "FOLDER")]
    folder: Option<PathBuf>,

    /// Comma-separated globs or file names (e.g. '*.srt' or 'b.srt,a.srt')
    #[arg(short = 's', long = "files")]
    file_spec: Option<String>,

    /// Output SRT file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Silence inserted between files, in milliseconds
    #[arg(short, long)]
    buffer_ms: Option<u64>,

    /// Ordering of the resolved files
    #[arg(long, value_enum)]
    sort: Option<CliSortMode>,

    /// Report what would be joined without writing the output
    #[arg(long)]
    dry_run: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subjoin - join SRT subtitle files
///
/// Resolves subtitle files in a folder, shifts each one after the previous
/// with a silence buffer, renumbers the result and writes a single SRT file.
#[derive(Parser, Debug)]
#[command(name = "subjoin")]
#[command(version)]
#[command(about = "Join SRT subtitle files into one continuous track")]
#[command(long_about = "subjoin merges several SRT files into one, keeping each file's internal timing.

EXAMPLES:
    subjoin join ./subs -o joined.srt                  # Join every *.srt in ./subs
    subjoin join ./subs -s 'b.srt,a.srt' -o out.srt    # Join in the given order
    subjoin join ./subs -s '*.srt' --sort desc -o out.srt
    subjoin join ./subs -b 500 -o out.srt              # Half a second between files
    subjoin join ./subs --dry-run                      # Show what would be joined
    subjoin completions bash > subjoin.bash            # Generate bash completions

CONFIGURATION:
    Defaults are read from conf.json when present (see --config-path).
    Command line options override the configuration file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // Filtering is left to log::max_level so the level can change after init
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Info by default; updated once the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subjoin", &mut std::io::stdout());
            Ok(())
        }
        Commands::Join(args) => run_join(args),
    }
}

fn run_join(options: JoinArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = options.log_level {
        let level: app_config::LogLevel = cmd_log_level.into();
        log::set_max_level(level.into());
    }

    let mut config = Config::load_or_default(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(folder) = options.folder {
        config.join.folder = Some(folder);
    }
    if let Some(file_spec) = options.file_spec {
        config.join.file_spec = file_spec;
    }
    if let Some(output) = options.output {
        config.join.output_path = Some(output);
    }
    if let Some(buffer_ms) = options.buffer_ms {
        config.join.buffer_ms = buffer_ms;
    }
    if let Some(sort) = options.sort {
        config.join.sort_mode = sort.into();
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.into());
    }

    debug!("Join settings: {:?}", config.join);

    let controller = Controller::with_config(config.join);
    let report = if options.dry_run {
        controller.dry_run()
    } else {
        controller.run()
    }
    .context("Join failed")?;

    println!("{}", report);
    Ok(())
}
