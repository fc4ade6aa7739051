//! Early Hero - a daily morning-routine monster game.
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod monsters;
pub mod store;

pub use crate::config::GameConfig;
pub use crate::core::constants::{SAVE_KEY, TICK_INTERVAL_MS};
pub use crate::core::{
    Clock, Command, DateKey, DayTransition, DeadlineMonitor, FixedClock, Outcome, QuestId,
    QuestLedger, Session, SessionEvent, SessionSnapshot, SessionState, SystemClock, TickInfo,
};
pub use crate::error::{ConfigError, SessionError, StoreError};
pub use crate::store::{JsonFileStore, KeyValueStore, MemoryStore};
