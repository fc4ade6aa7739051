//! Deadline monitor.
//!
//! The time-window rules are pure functions of `(config, now)`. The
//! [`DeadlineMonitor`] only decides *when* to tick and feeds the session a
//! `Tick` command with the time read from its [`Clock`].

use super::clock::Clock;
use super::session::{Command, Session, SessionEvent};
use crate::config::GameConfig;
use crate::store::KeyValueStore;
use chrono::{Duration, NaiveDateTime};
use std::time::Instant;

/// Countdown flags computed on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInfo {
    /// Time until the next deadline (today's, or tomorrow's once passed).
    pub remaining: Duration,
    pub bonus_active: bool,
    pub warning_active: bool,
}

/// True from the deadline time (inclusive) until the end of the day.
pub fn deadline_passed(config: &GameConfig, now: NaiveDateTime) -> bool {
    now.time() >= config.deadline
}

pub fn bonus_window_active(config: &GameConfig, now: NaiveDateTime) -> bool {
    now.time() < config.bonus_cutoff
}

/// Next occurrence of the deadline, rolling to tomorrow once today's is past.
pub fn next_deadline(config: &GameConfig, now: NaiveDateTime) -> NaiveDateTime {
    let todays = now.date().and_time(config.deadline);
    if now > todays {
        todays + Duration::days(1)
    } else {
        todays
    }
}

pub fn time_remaining(config: &GameConfig, now: NaiveDateTime) -> Duration {
    next_deadline(config, now) - now
}

pub fn warning_active(config: &GameConfig, remaining: Duration) -> bool {
    remaining > Duration::zero() && remaining < config.warning_window()
}

pub fn evaluate(config: &GameConfig, now: NaiveDateTime) -> TickInfo {
    let remaining = time_remaining(config, now);
    TickInfo {
        remaining,
        bonus_active: bonus_window_active(config, now),
        warning_active: warning_active(config, remaining),
    }
}

/// Formats a countdown as `HH:MM:SS`.
pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Drives periodic `Tick` commands into a [`Session`].
pub struct DeadlineMonitor<C: Clock> {
    clock: C,
    interval: std::time::Duration,
    last_tick: Option<Instant>,
    running: bool,
}

impl<C: Clock> DeadlineMonitor<C> {
    pub fn new(clock: C, config: &GameConfig) -> Self {
        Self {
            clock,
            interval: std::time::Duration::from_millis(config.tick_interval_ms),
            last_tick: None,
            running: true,
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a tick is owed. The first poll always ticks.
    pub fn is_due(&self) -> bool {
        self.running
            && self
                .last_tick
                .map_or(true, |last| last.elapsed() >= self.interval)
    }

    /// Ticks the session if the interval has elapsed.
    pub fn poll<S: KeyValueStore>(&mut self, session: &mut Session<S>) -> Vec<SessionEvent> {
        if !self.is_due() {
            return Vec::new();
        }
        self.tick_now(session)
    }

    /// Ticks immediately, ignoring the interval.
    pub fn tick_now<S: KeyValueStore>(&mut self, session: &mut Session<S>) -> Vec<SessionEvent> {
        if !self.running {
            return Vec::new();
        }
        self.last_tick = Some(Instant::now());
        session.handle(Command::Tick, self.clock.now())
    }

    /// Stops ticking. Saved state is untouched: every mutation was already
    /// written when it happened.
    pub fn stop(&mut self) {
        self.running = false;
    }
}
