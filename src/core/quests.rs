//! The fixed set of daily quests and the per-day completion ledger.

use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five morning routines. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestId {
    Dressed,
    Breakfast,
    Fishoil,
    /// Leaving the house. Only this quest can earn bonus damage, and only
    /// this quest being incomplete lets the deadline force a loss.
    Door,
    Toilet,
}

impl QuestId {
    pub const ALL: [QuestId; 5] = [
        QuestId::Dressed,
        QuestId::Breakfast,
        QuestId::Fishoil,
        QuestId::Door,
        QuestId::Toilet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestId::Dressed => "dressed",
            QuestId::Breakfast => "breakfast",
            QuestId::Fishoil => "fishoil",
            QuestId::Door => "door",
            QuestId::Toilet => "toilet",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestId::Dressed => "Get dressed",
            QuestId::Breakfast => "Eat breakfast",
            QuestId::Fishoil => "Take fish oil",
            QuestId::Door => "Out the door",
            QuestId::Toilet => "Use the toilet",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            QuestId::Dressed => "👕",
            QuestId::Breakfast => "🍳",
            QuestId::Fishoil => "💊",
            QuestId::Door => "🚪",
            QuestId::Toilet => "🚽",
        }
    }

    /// Zero-based position in [`QuestId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Quest bound to a 1-based hotkey digit.
    pub fn from_hotkey(digit: char) -> Option<Self> {
        let n = digit.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestId {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|q| q.as_str() == wanted)
            .ok_or_else(|| SessionError::InvalidQuestId(s.to_string()))
    }
}

/// Completion flags for today's quests.
///
/// Always holds exactly the five [`QuestId`]s. Deserialization rejects
/// missing or extra keys so the save decoder can fall back to a clean ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestLedger {
    dressed: bool,
    breakfast: bool,
    fishoil: bool,
    door: bool,
    toilet: bool,
}

impl QuestLedger {
    pub fn is_completed(&self, quest: QuestId) -> bool {
        match quest {
            QuestId::Dressed => self.dressed,
            QuestId::Breakfast => self.breakfast,
            QuestId::Fishoil => self.fishoil,
            QuestId::Door => self.door,
            QuestId::Toilet => self.toilet,
        }
    }

    /// Sets a flag and returns the previous value.
    pub fn set(&mut self, quest: QuestId, completed: bool) -> bool {
        let slot = match quest {
            QuestId::Dressed => &mut self.dressed,
            QuestId::Breakfast => &mut self.breakfast,
            QuestId::Fishoil => &mut self.fishoil,
            QuestId::Door => &mut self.door,
            QuestId::Toilet => &mut self.toilet,
        };
        std::mem::replace(slot, completed)
    }

    pub fn completed_count(&self) -> u32 {
        QuestId::ALL
            .into_iter()
            .filter(|q| self.is_completed(*q))
            .count() as u32
    }

    pub fn all_completed(&self) -> bool {
        QuestId::ALL.into_iter().all(|q| self.is_completed(q))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestId, bool)> + '_ {
        QuestId::ALL.into_iter().map(|q| (q, self.is_completed(q)))
    }
}
