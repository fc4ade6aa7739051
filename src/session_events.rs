//! Maps [`SessionEvent`]s to UI notices and countdown state.
//!
//! Binary-only: it bridges library events to the terminal's [`UiState`].

use crate::ui::UiState;
use early_hero::{DayTransition, SessionEvent};

/// Short human-readable description of an event, if it deserves one.
pub fn describe(event: &SessionEvent) -> Option<String> {
    match event {
        SessionEvent::MonsterDamaged {
            quest,
            damage,
            health,
        } => Some(format!(
            "{} {}: {} damage! Monster health {}",
            quest.icon(),
            quest.label(),
            damage,
            health
        )),
        SessionEvent::MonsterHealed {
            quest,
            amount,
            health,
        } => Some(format!(
            "Undid {}: the monster healed {} (health {})",
            quest.label(),
            amount,
            health
        )),
        SessionEvent::Win {
            streak,
            total_wins,
            area_unlocked,
        } => {
            let mut text = format!("Victory! {streak} day streak, {total_wins} monsters defeated");
            if *area_unlocked {
                text.push_str(". New map area unlocked!");
            }
            Some(text)
        }
        SessionEvent::Loss => {
            Some("The deadline passed. The monster struck back and your streak reset.".to_string())
        }
        SessionEvent::DayReconciled { transition, level } => Some(match transition {
            DayTransition::Advanced => format!("A new day! On to level {level}."),
            DayTransition::Retried => format!("A new day. Level {level} again, you can do it!"),
        }),
        SessionEvent::StoreWarning { message } => Some(message.clone()),
        SessionEvent::Tick(_) => None,
    }
}

/// Folds events into the presentation state.
pub fn apply_session_events(ui: &mut UiState, events: &[SessionEvent]) {
    for event in events {
        match event {
            SessionEvent::Tick(info) => {
                ui.last_tick = Some(*info);
            }
            SessionEvent::Win { area_unlocked, .. } => {
                ui.area_unlocked = *area_unlocked;
                ui.notice = describe(event);
            }
            _ => {
                if let Some(text) = describe(event) {
                    ui.notice = Some(text);
                }
            }
        }
    }
}
