//! Daily schedule configuration.

use crate::core::constants::{
    AREA_UNLOCK_STREAK, BONUS_CUTOFF_HOUR, BONUS_CUTOFF_MINUTE, CONFIG_FILE, DEADLINE_HOUR,
    DEADLINE_MINUTE, TICK_INTERVAL_MS, WARNING_WINDOW_MINUTES,
};
use crate::error::ConfigError;
use crate::store::load_json_or_default;
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Time-of-day settings for the daily session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// After this time, a day with the door quest open is lost.
    pub deadline: NaiveTime,

    /// Completing the door quest before this time deals double damage.
    pub bonus_cutoff: NaiveTime,

    /// The countdown turns into a warning when less than this many minutes remain.
    pub warning_window_minutes: u32,

    /// Deadline monitor cadence.
    pub tick_interval_ms: u64,

    /// A win whose streak is a multiple of this unlocks a new map area.
    pub area_unlock_streak: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            deadline: NaiveTime::from_hms_opt(DEADLINE_HOUR, DEADLINE_MINUTE, 0)
                .unwrap_or_default(),
            bonus_cutoff: NaiveTime::from_hms_opt(BONUS_CUTOFF_HOUR, BONUS_CUTOFF_MINUTE, 0)
                .unwrap_or_default(),
            warning_window_minutes: WARNING_WINDOW_MINUTES,
            tick_interval_ms: TICK_INTERVAL_MS,
            area_unlock_streak: AREA_UNLOCK_STREAK,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bonus_cutoff > self.deadline {
            return Err(ConfigError::InvalidWindow {
                bonus_cutoff: self.bonus_cutoff,
                deadline: self.deadline,
            });
        }
        if self.warning_window_minutes == 0 {
            return Err(ConfigError::ZeroWarningWindow);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.area_unlock_streak == 0 {
            return Err(ConfigError::ZeroUnlockStreak);
        }
        Ok(())
    }

    pub fn warning_window(&self) -> Duration {
        Duration::minutes(i64::from(self.warning_window_minutes))
    }

    /// Reads `config.json` from `dir`. Missing or invalid files yield defaults.
    pub fn load_from_dir(dir: &Path) -> Self {
        let config: GameConfig = load_json_or_default(dir, CONFIG_FILE);
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!(error = %e, "invalid config, using defaults");
                GameConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn temp_dir() -> PathBuf {
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "early-hero-config-test-{}-{}",
            std::process::id(),
            id
        ))
    }

    #[test]
    fn test_default_schedule() {
        let config = GameConfig::default();
        assert_eq!(config.deadline, NaiveTime::from_hms_opt(7, 45, 0).unwrap());
        assert_eq!(config.bonus_cutoff, NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert_eq!(config.warning_window(), Duration::minutes(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"deadline":"08:15:00"}"#).unwrap();
        assert_eq!(config.deadline, NaiveTime::from_hms_opt(8, 15, 0).unwrap());
        assert_eq!(config.tick_interval_ms, TICK_INTERVAL_MS);
    }

    #[test]
    fn test_bonus_after_deadline_is_invalid() {
        let config = GameConfig {
            bonus_cutoff: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_zero_values_are_invalid() {
        let zero_warning = GameConfig {
            warning_window_minutes: 0,
            ..Default::default()
        };
        assert_eq!(zero_warning.validate(), Err(ConfigError::ZeroWarningWindow));

        let zero_tick = GameConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(zero_tick.validate(), Err(ConfigError::ZeroTickInterval));
    }

    #[test]
    fn test_load_from_dir_rejects_invalid_schedule() {
        let dir = temp_dir();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(CONFIG_FILE),
            r#"{"deadline":"06:00:00","bonus_cutoff":"06:30:00"}"#,
        )
        .unwrap();

        assert_eq!(GameConfig::load_from_dir(&dir), GameConfig::default());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_from_dir_reads_valid_file() {
        let dir = temp_dir();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILE), r#"{"warning_window_minutes":10}"#).unwrap();

        let config = GameConfig::load_from_dir(&dir);
        assert_eq!(config.warning_window(), Duration::minutes(10));
        assert_eq!(config.deadline, GameConfig::default().deadline);
        std::fs::remove_dir_all(&dir).ok();
    }
}
