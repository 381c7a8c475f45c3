use anyhow::{anyhow, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Non-interactive commands
    Stderr,
    /// The browser owns the terminal, so logs are appended to a file
    File(PathBuf),
    /// The browser without a configured log file
    Suppressed,
}

fn build_filter(verbose: bool) -> Result<EnvFilter> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    Ok(EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
        .add_directive("rusqlite=warn".parse()?))
}

pub fn init_logging(verbose: bool, sink: LogSink) -> Result<()> {
    let filter = match sink {
        LogSink::Suppressed => return Ok(()),
        _ => build_filter(verbose)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    match sink {
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!(e))?;
        }
        _ => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!(e))?;
        }
    }

    Ok(())
}
