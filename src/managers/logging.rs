//! Logging setup
//!
//! Console output goes to stderr at a level chosen by the `-v` count.
//! With a log directory configured, everything at DEBUG and above is also
//! written to a daily-rotated file.

use anyhow::{Context, Result};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "tarsnap-backup";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for console output
    pub console_level: Level,
    /// Directory for log files; no file output when unset
    pub log_directory: Option<PathBuf>,
    /// Maximum number of log files to keep
    pub max_files: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: Level::WARN,
            log_directory: None,
            max_files: 10,
        }
    }
}

impl LoggingConfig {
    /// Build from the `-v` count and the resolved log settings
    pub fn from_verbosity(verbose: u8, log_directory: Option<&Path>, max_files: u32) -> Self {
        Self {
            console_level: verbosity_level(verbose),
            log_directory: log_directory.map(Path::to_path_buf),
            max_files,
        }
    }
}

/// 0 → WARN, 1 → INFO, 2 or more → DEBUG
pub fn verbosity_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Initialize logging with console and optional file output
///
/// Returns a guard that must be kept alive for the duration of the program.
/// When the guard is dropped, any remaining logs are flushed to disk.
pub fn init_logging(config: &LoggingConfig) -> Result<LogGuard> {
    let (file_layer, file_guard) = match config.log_directory.as_deref() {
        Some(log_dir) => {
            fs::create_dir_all(log_dir)
                .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

            let file_appender = RollingFileAppender::new(
                Rotation::DAILY,
                log_dir,
                format!("{}.log", LOG_FILE_PREFIX),
            );
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_span_events(FmtSpan::NONE)
                .with_filter(level_filter(Level::DEBUG));

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::NONE)
        .with_filter(level_filter(config.console_level));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    if let Some(log_dir) = config.log_directory.as_deref() {
        cleanup_old_logs(log_dir, config.max_files)?;
    }

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

/// Level filter for a layer; `RUST_LOG` directives take precedence
fn level_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy()
}

/// Cleanup old log files, keeping only the most recent N files
fn cleanup_old_logs(log_dir: &Path, max_files: u32) -> Result<()> {
    let mut log_files: Vec<_> = fs::read_dir(log_dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.starts_with(LOG_FILE_PREFIX) && name.contains(".log")
        })
        .collect();

    // Newest first
    log_files.sort_by(|a, b| {
        let a_time = a.metadata().and_then(|m| m.modified()).ok();
        let b_time = b.metadata().and_then(|m| m.modified()).ok();
        b_time.cmp(&a_time)
    });

    for file in log_files.into_iter().skip(max_files as usize) {
        if let Err(e) = fs::remove_file(file.path()) {
            tracing::warn!("Failed to remove old log file {:?}: {}", file.path(), e);
        } else {
            tracing::debug!("Removed old log file: {:?}", file.path());
        }
    }

    Ok(())
}

/// Guard that keeps the logging system alive
///
/// When dropped, flushes any remaining logs to disk.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}
