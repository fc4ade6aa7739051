//! Tracing setup for the binary.
//!
//! The terminal UI owns stdout and stderr, so logs go to a file:
//! `$EARLY_HERO_LOG` if set, else `~/.early-hero/early-hero.log`.

use crate::core::constants::LOG_FILE;
use crate::store::data_dir;
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

pub const LOG_PATH_ENV: &str = "EARLY_HERO_LOG";

/// Where logs should be written, if anywhere.
pub fn log_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(LOG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    data_dir().ok().map(|dir| dir.join(LOG_FILE))
}

fn open_log(path: &PathBuf) -> Option<File> {
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Installs the global subscriber. `RUST_LOG` overrides the `info` default.
/// Without a writable log file, events are dropped.
pub fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    match log_path().as_ref().and_then(open_log) {
        Some(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .try_init();
        }
    }
}
