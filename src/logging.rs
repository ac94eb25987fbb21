//! Logging init: file under the XDG state dir, or stderr when unavailable.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,fdl_core=debug"))
}

fn open_log_file() -> Result<fs::File> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fdl")?;
    let state_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&state_dir)
        .with_context(|| format!("create state dir {}", state_dir.display()))?;
    let path = state_dir.join("fdl.log");
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Initialize structured logging to `~/.local/state/fdl/fdl.log`, falling
/// back to stderr when the state dir is unwritable.
pub fn init() {
    match open_log_file() {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
            tracing::info!("fdl logging initialized");
        }
        Err(err) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
            tracing::warn!("log file unavailable ({err:#}); logging to stderr");
        }
    }
}
