use std::path::PathBuf;

use clap::Parser;

use crate::logging::{LogConfig, LogLevel};

/// View a file as a hex and ASCII dump, one terminal page at a time.
#[derive(Debug, Parser)]
#[command(name = "tofu-peek", version, about)]
pub struct Config {
    /// File to view
    pub file: PathBuf,

    /// Append diagnostics to this file
    #[arg(long, env = "TOFU_PEEK_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// How much to write to the log file
    #[arg(long, value_enum, env = "TOFU_PEEK_LOG", default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level,
            file: self.log_file.clone(),
        }
    }

    /// Name shown in the status line.
    pub fn display_name(&self) -> String {
        format!("{}", self.file.display())
    }
}
