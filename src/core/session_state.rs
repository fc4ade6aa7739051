//! The persisted session aggregate and its JSON blob codec.

use super::constants::{MONSTER_MAX_HEALTH, STARTING_LEVEL};
use super::quests::QuestLedger;
use crate::error::SessionError;
use crate::monsters::{area_index_for_level, level_to_monster, Monster};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one local calendar day, rendered `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    pub fn from_datetime(now: NaiveDateTime) -> Self {
        Self::from_date(now.date())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything that survives a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub current_level: u32,
    /// Always `area_index_for_level(current_level)`; written for readers of
    /// the blob, recomputed on load.
    pub current_area: u32,
    pub streak: u32,
    pub total_wins: u32,
    /// Last day whose outcome (win or loss) was finalized. Older saves hold
    /// free-form date strings that never match a key, so they reconcile once.
    #[serde(rename = "lastCompletedDate")]
    pub last_completed_date_key: Option<DateKey>,
    /// Day the quest ledger belongs to.
    #[serde(default)]
    pub quest_date_key: Option<DateKey>,
    /// Extra damage dealt by early door completions on the ledger's day.
    #[serde(default)]
    pub bonus_damage: u32,
    pub quests: QuestLedger,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_level: STARTING_LEVEL,
            current_area: area_index_for_level(STARTING_LEVEL),
            streak: 0,
            total_wins: 0,
            last_completed_date_key: None,
            quest_date_key: None,
            bonus_damage: 0,
            quests: QuestLedger::default(),
        }
    }
}

impl SessionState {
    pub fn active_monster(&self) -> &'static Monster {
        level_to_monster(self.current_level)
    }

    /// Monster health implied by the ledger and any bonus damage.
    pub fn current_health(&self) -> u32 {
        let max = self.active_monster().max_health;
        let damage = self.quests.completed_count().saturating_add(self.bonus_damage);
        max.saturating_sub(damage)
    }

    pub fn is_finalized_on(&self, today: &DateKey) -> bool {
        self.last_completed_date_key.as_ref() == Some(today)
    }

    /// Whether the ledger's day ended in a recorded outcome.
    pub fn ledger_day_finalized(&self) -> bool {
        self.quest_date_key.is_some() && self.last_completed_date_key == self.quest_date_key
    }

    pub fn set_level(&mut self, level: u32) {
        self.current_level = level.max(STARTING_LEVEL);
        self.current_area = area_index_for_level(self.current_level);
    }

    /// Clears the ledger for a new day.
    pub fn start_day(&mut self, today: DateKey) {
        self.quests.reset();
        self.bonus_damage = 0;
        self.quest_date_key = Some(today);
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decodes a stored blob.
    ///
    /// Structural damage (bad JSON, wrong field types, a zero level, bonus
    /// damage beyond a monster's health) is an error. A `quests` object that
    /// doesn't match the fixed quest set is replaced with an empty ledger and
    /// the rest of the blob is kept.
    pub fn decode(blob: &str) -> Result<Self, SessionError> {
        let raw: RawSessionState = serde_json::from_str(blob)
            .map_err(|e| SessionError::CorruptPersistedState(e.to_string()))?;

        if raw.current_level < STARTING_LEVEL {
            return Err(SessionError::CorruptPersistedState(format!(
                "level {} is below {}",
                raw.current_level, STARTING_LEVEL
            )));
        }

        if raw.bonus_damage > MONSTER_MAX_HEALTH {
            return Err(SessionError::CorruptPersistedState(format!(
                "bonus damage {} exceeds monster health {}",
                raw.bonus_damage, MONSTER_MAX_HEALTH
            )));
        }

        let quests = match serde_json::from_value::<QuestLedger>(raw.quests) {
            Ok(ledger) => ledger,
            Err(e) => {
                tracing::warn!(error = %e, "saved quest ledger does not match quest set, resetting it");
                QuestLedger::default()
            }
        };

        let mut state = SessionState {
            current_level: raw.current_level,
            current_area: 0,
            streak: raw.streak,
            total_wins: raw.total_wins,
            last_completed_date_key: raw.last_completed_date_key,
            quest_date_key: raw.quest_date_key,
            bonus_damage: raw.bonus_damage,
            quests,
        };
        state.set_level(raw.current_level);
        Ok(state)
    }
}

/// Loosely typed mirror of [`SessionState`] used for validation on load.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSessionState {
    current_level: u32,
    #[serde(default)]
    streak: u32,
    #[serde(default)]
    total_wins: u32,
    #[serde(rename = "lastCompletedDate", default)]
    last_completed_date_key: Option<DateKey>,
    #[serde(default)]
    quest_date_key: Option<DateKey>,
    #[serde(default)]
    bonus_damage: u32,
    #[serde(default)]
    quests: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quests::QuestId;

    fn day(d: u32) -> DateKey {
        DateKey::from_date(NaiveDate::from_ymd_opt(2024, 5, d).unwrap())
    }

    #[test]
    fn test_date_key_format() {
        assert_eq!(day(7).as_str(), "2024-05-07");
        let midnight = NaiveDate::from_ymd_opt(2024, 5, 7)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(DateKey::from_datetime(midnight), day(7));
    }

    #[test]
    fn test_default_state() {
        let state = SessionState::default();
        assert_eq!(state.current_level, 1);
        assert_eq!(state.current_area, 0);
        assert_eq!(state.streak, 0);
        assert_eq!(state.total_wins, 0);
        assert!(state.last_completed_date_key.is_none());
        assert_eq!(state.quests.completed_count(), 0);
        assert_eq!(state.current_health(), 5);
    }

    #[test]
    fn test_health_counts_bonus_damage_and_floors_at_zero() {
        let mut state = SessionState::default();
        state.quests.set(QuestId::Door, true);
        state.bonus_damage = 1;
        assert_eq!(state.current_health(), 3);

        for quest in QuestId::ALL {
            state.quests.set(quest, true);
        }
        assert_eq!(state.current_health(), 0);
    }

    #[test]
    fn test_blob_uses_camel_case_keys() {
        let mut state = SessionState::default();
        state.last_completed_date_key = Some(day(3));
        let json = state.encode().unwrap();
        assert!(json.contains("\"currentLevel\":1"));
        assert!(json.contains("\"lastCompletedDate\":\"2024-05-03\""));
        assert!(json.contains("\"fishoil\":false"));
    }

    #[test]
    fn test_decode_recomputes_area() {
        let blob = r#"{"currentLevel":5,"currentArea":0,"streak":2,"totalWins":4,
            "lastCompletedDate":"2024-05-01",
            "quests":{"dressed":true,"breakfast":false,"fishoil":false,"door":false,"toilet":false}}"#;
        let state = SessionState::decode(blob).unwrap();
        assert_eq!(state.current_level, 5);
        assert_eq!(state.current_area, 2);
        assert!(state.quests.is_completed(QuestId::Dressed));
        assert_eq!(state.quest_date_key, None);
    }

    #[test]
    fn test_decode_ignores_legacy_fields() {
        let blob = r#"{"currentLevel":2,"currentArea":0,"streak":1,"totalWins":1,
            "monstersDefeated":[],"lastCompletedDate":"Tue May 07 2024",
            "quests":{"dressed":false,"breakfast":false,"fishoil":false,"door":false,"toilet":false}}"#;
        let state = SessionState::decode(blob).unwrap();
        assert_eq!(state.total_wins, 1);
        assert_eq!(
            state.last_completed_date_key.as_ref().map(DateKey::as_str),
            Some("Tue May 07 2024")
        );
    }

    #[test]
    fn test_decode_normalizes_bad_ledger() {
        let blob = r#"{"currentLevel":3,"streak":1,"totalWins":2,"lastCompletedDate":null,
            "quests":{"dressed":true,"shower":true}}"#;
        let state = SessionState::decode(blob).unwrap();
        assert_eq!(state.current_level, 3);
        assert_eq!(state.quests, QuestLedger::default());
    }

    #[test]
    fn test_decode_rejects_structural_damage() {
        assert!(matches!(
            SessionState::decode("{not json"),
            Err(SessionError::CorruptPersistedState(_))
        ));
        assert!(matches!(
            SessionState::decode(r#"{"currentLevel":"three"}"#),
            Err(SessionError::CorruptPersistedState(_))
        ));
        assert!(matches!(
            SessionState::decode(r#"{"currentLevel":0}"#),
            Err(SessionError::CorruptPersistedState(_))
        ));
        assert!(matches!(
            SessionState::decode(r#"{"currentLevel":2,"streak":-1}"#),
            Err(SessionError::CorruptPersistedState(_))
        ));
    }

    #[test]
    fn test_decode_rejects_impossible_bonus_damage() {
        let blob = r#"{"currentLevel":2,"streak":1,"totalWins":1,"lastCompletedDate":null,
            "bonusDamage":4294967295,
            "quests":{"dressed":true,"breakfast":false,"fishoil":false,"door":false,"toilet":false}}"#;
        assert!(matches!(
            SessionState::decode(blob),
            Err(SessionError::CorruptPersistedState(_))
        ));
    }

    #[test]
    fn test_health_never_overflows() {
        let mut state = SessionState::default();
        for quest in QuestId::ALL {
            state.quests.set(quest, true);
        }
        state.bonus_damage = u32::MAX;
        assert_eq!(state.current_health(), 0);
    }

    #[test]
    fn test_ledger_day_finalized() {
        let mut state = SessionState::default();
        assert!(!state.ledger_day_finalized());
        state.quest_date_key = Some(day(4));
        state.last_completed_date_key = Some(day(3));
        assert!(!state.ledger_day_finalized());
        state.last_completed_date_key = Some(day(4));
        assert!(state.ledger_day_finalized());
    }
}
