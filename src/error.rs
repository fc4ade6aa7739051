//! Error types shared by the library.
//!
//! Nothing here is fatal to gameplay: the session recovers from every
//! variant with a default state, an in-memory fallback, or a rejected command.

use chrono::NaiveTime;
use std::io;

/// Failures of the key-value store backing the saved session.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not determine home directory")]
    HomeDirUnavailable,

    #[error("could not encode value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors surfaced by session commands and the saved-blob decoder.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown quest id: {0:?}")]
    InvalidQuestId(String),

    #[error("saved session is corrupt: {0}")]
    CorruptPersistedState(String),
}

/// A config file that parsed but describes an impossible schedule.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bonus cutoff {bonus_cutoff} must not be later than the deadline {deadline}")]
    InvalidWindow {
        bonus_cutoff: NaiveTime,
        deadline: NaiveTime,
    },

    #[error("warning window must be at least one minute")]
    ZeroWarningWindow,

    #[error("tick interval must be non-zero")]
    ZeroTickInterval,

    #[error("area unlock streak must be non-zero")]
    ZeroUnlockStreak,
}
