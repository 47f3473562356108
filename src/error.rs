use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::logging::InitError;

/// A scroll that could not be completed. The viewport is left exactly as it
/// was before the attempt.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("couldn't query file size: {0}")]
    Size(#[source] io::Error),

    #[error("seek to {offset:#010x} failed: {source}")]
    Seek { offset: u64, source: io::Error },

    #[error("read of {len} bytes at {offset:#010x} failed: {source}")]
    Read {
        offset: u64,
        len: usize,
        source: io::Error,
    },
}

/// Errors that end the process.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("couldn't open {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("couldn't stat {path:?}: {source}")]
    Stat { path: PathBuf, source: io::Error },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Logging(#[from] InitError),
}
