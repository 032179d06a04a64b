//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so in that mode logs go to a file instead of stderr.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE: &str = "civpath.log";

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Build the filter: RUST_LOG wins, then `-v`, then the configured level.
pub fn env_filter(verbose: bool, configured_level: &str) -> EnvFilter {
    let fallback = if verbose { "debug" } else { configured_level };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Path of the TUI log file inside `dir`.
pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE)
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(target: LogTarget, filter: EnvFilter) -> io::Result<()> {
    let builder = fmt().with_env_filter(filter).with_target(false);
    let result = match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = File::create(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    result.map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
