#![deny(clippy::all)]
use std::io::{stdout, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use tofu_peek::config::Config;
use tofu_peek::hex_view::screen::{TerminalGuard, TerminalScreen};
use tofu_peek::hex_view::view::HexView;
use tofu_peek::{logging, ByteSource, Viewport, ViewerError};
use tracing::{error, info};

const STDOUT_BUF: usize = 8192;

fn run(config: Config) -> Result<(), ViewerError> {
    logging::init(&config.log_config())?;

    let mut source = ByteSource::open(&config.file).map_err(|source| ViewerError::Open {
        path: config.file.clone(),
        source,
    })?;
    let file_size = source.size().map_err(|source| ViewerError::Stat {
        path: config.file.clone(),
        source,
    })?;
    info!(path = %config.file.display(), file_size, "opened file");

    let stdout = stdout();
    let _guard = TerminalGuard::enter()?;
    let screen = TerminalScreen::new(BufWriter::with_capacity(STDOUT_BUF, stdout.lock()));
    let mut view = HexView::new(Viewport::new(source), screen, config.display_name());
    view.run_event_loop()?;
    Ok(())
}

fn main() -> ExitCode {
    let config = Config::parse();
    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "exiting");
            eprintln!("tofu-peek: {}", e);
            ExitCode::FAILURE
        }
    }
}
