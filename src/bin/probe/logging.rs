//! tracing subscriber setup
//!
//! The TUI owns the terminal, so interactive sessions only log when a file is
//! given. Headless commands log to stderr.

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use std::{fs::File, path::Path, sync::Mutex};
use tracing_subscriber::EnvFilter;

pub enum LogSink<'a> {
    File(&'a Path),
    Stderr,
    Off,
}

/// Install the global subscriber. `RUST_LOG` wins over `level`.
pub fn init(level: &str, sink: LogSink<'_>) -> EyreResult<()> {
    let filter = || -> EyreResult<EnvFilter> {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .wrap_err_with(|| format!("invalid log level {level:?}"))
    };

    let installed = match sink {
        LogSink::File(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter()?)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .try_init()
        }
        LogSink::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter()?)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init(),
        LogSink::Off => return Ok(()),
    };

    installed.map_err(|err| eyre!("failed to install tracing subscriber: {err}"))
}
