//! File-only tracing setup. The terminal belongs to the viewer, so nothing is
//! ever logged to stdout or stderr while it runs.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Overrides the level-derived filter with a full `EnvFilter` directive.
pub const FILTER_ENV: &str = "TOFU_PEEK_LOG_FILTER";

#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LogConfig {
    pub level: LogLevel,
    /// No file, no logging.
    pub file: Option<PathBuf>,
}

#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error("failed to open log file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to configure logger: {0}")]
    Configure(String),
}

fn build_env_filter(level: LogLevel) -> EnvFilter {
    match std::env::var(FILTER_ENV) {
        Ok(directives) => EnvFilter::new(directives),
        // dependencies stay at warn whatever the crate's own level is
        Err(_) => EnvFilter::new(format!("warn,tofu_peek={}", level.as_str())),
    }
}

/// Installs the global subscriber. Returns whether logging was enabled.
pub fn init(config: &LogConfig) -> Result<bool, InitError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| InitError::Io {
            path: path.clone(),
            source,
        })?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config.level))
        .with_ansi(false)
        .with_target(config.level >= LogLevel::Debug)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| InitError::Configure(err.to_string()))?;
    Ok(true)
}
