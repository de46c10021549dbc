//! tracing setup for the CLI: `nozomi.log` in the XDG state dir, or stderr.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "nozomi.log";

/// `RUST_LOG` wins over the configured directive.
fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// `$XDG_STATE_HOME/nozomi/nozomi.log`, creating the directory if needed.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("nozomi")?;
    xdg_dirs
        .place_state_file(LOG_FILE_NAME)
        .context("create nozomi state directory")
}

/// Log to `nozomi.log` in the state dir and return its path.
/// Errors leave no subscriber installed; callers fall back to [`init_logging_stderr`].
pub fn init_logging(default_filter: &str) -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;

    tracing::info!("nozomi logging initialized at {}", path.display());
    Ok(path)
}

/// Log to stderr only.
pub fn init_logging_stderr(default_filter: &str) {
    // A subscriber may already be installed; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
