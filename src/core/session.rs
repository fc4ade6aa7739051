//! The daily session state machine.
//!
//! [`Session`] owns the [`SessionState`] and is the only thing that mutates
//! it. Every change goes through [`Session::handle`] (or the operation it
//! dispatches to), is written to the store right away, and reports what
//! happened as a list of [`SessionEvent`]s. The presentation layer renders
//! from [`Session::snapshot`] and never touches the state directly.
//!
//! Day boundaries are handled lazily: finishing a day only stamps
//! `last_completed_date_key`. Level changes and the ledger reset happen in
//! [`Session::reconcile_day`], the next time the calendar date is seen to
//! have moved on.

use super::constants::{DOOR_BONUS_DAMAGE, QUEST_DAMAGE, SAVE_KEY};
use super::deadline::{self, TickInfo};
use super::quests::QuestId;
use super::session_state::{DateKey, SessionState};
use crate::config::GameConfig;
use crate::error::{SessionError, StoreError};
use crate::monsters::Monster;
use crate::store::KeyValueStore;
use chrono::NaiveDateTime;

/// Requests from the presentation layer and the deadline monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleQuest { quest: QuestId, completed: bool },
    /// Dismiss the win/loss result. Does not advance the day.
    AcknowledgeDay,
    /// Wipe the saved session and start over.
    Reset,
    Tick,
}

/// How a day boundary was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTransition {
    /// Yesterday's monster fell: on to the next level.
    Advanced,
    /// Yesterday's monster survived: same level again.
    Retried,
}

/// A finalized result waiting for the player to acknowledge it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

/// Something the presentation layer may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    MonsterDamaged {
        quest: QuestId,
        damage: u32,
        health: u32,
    },
    MonsterHealed {
        quest: QuestId,
        amount: u32,
        health: u32,
    },
    Win {
        streak: u32,
        total_wins: u32,
        area_unlocked: bool,
    },
    Loss,
    DayReconciled {
        transition: DayTransition,
        level: u32,
    },
    Tick(TickInfo),
    /// The store rejected a read or write; play continues in memory.
    StoreWarning {
        message: String,
    },
}

/// Read-only view of the session for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub today: DateKey,
    pub monster: &'static Monster,
    pub current_health: u32,
    pub max_health: u32,
    pub bonus_window_active: bool,
    pub outcome_finalized: bool,
    pub pending_outcome: Option<Outcome>,
    pub storage_degraded: bool,
}

pub struct Session<S: KeyValueStore> {
    state: SessionState,
    store: S,
    config: GameConfig,
    bonus_window_active: bool,
    pending_outcome: Option<Outcome>,
    storage_degraded: bool,
    /// The saved blob exists but could not be read. Writing now would
    /// replace it with whatever this process has in memory.
    save_unreadable: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Loads the saved session (or a fresh one) and reconciles it with `now`.
    pub fn initialize(store: S, config: GameConfig, now: NaiveDateTime) -> (Self, Vec<SessionEvent>) {
        let mut events = Vec::new();
        let mut save_unreadable = false;

        let state = match store.get(SAVE_KEY) {
            Ok(Some(blob)) => SessionState::decode(&blob).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "discarding saved session");
                SessionState::default()
            }),
            Ok(None) => {
                tracing::info!("no saved session, starting fresh");
                SessionState::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not read saved session, playing in memory");
                save_unreadable = true;
                events.push(SessionEvent::StoreWarning {
                    message: format!("Could not load save: {e}"),
                });
                SessionState::default()
            }
        };

        let mut session = Self {
            bonus_window_active: deadline::bonus_window_active(&config, now),
            state,
            store,
            config,
            pending_outcome: None,
            storage_degraded: save_unreadable,
            save_unreadable,
        };
        events.extend(session.reconcile_day(now));
        (session, events)
    }

    /// Single entry point for every mutation.
    pub fn handle(&mut self, command: Command, now: NaiveDateTime) -> Vec<SessionEvent> {
        match command {
            Command::ToggleQuest { quest, completed } => {
                let mut events = self.reconcile_day(now);
                events.extend(self.set_quest_completion(quest, completed, now));
                events
            }
            Command::AcknowledgeDay => {
                self.acknowledge_day_transition();
                Vec::new()
            }
            Command::Reset => self.request_reset(now),
            Command::Tick => self.tick(now),
        }
    }

    /// Parses a quest name at the boundary, then toggles it.
    pub fn toggle_quest_by_name(
        &mut self,
        name: &str,
        completed: bool,
        now: NaiveDateTime,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        let quest: QuestId = name.parse()?;
        Ok(self.handle(Command::ToggleQuest { quest, completed }, now))
    }

    /// Resolves a day boundary if one has passed since the ledger was started.
    ///
    /// Repeated calls on the same day are no-ops. One call resolves exactly
    /// one day, however long the gap.
    pub fn reconcile_day(&mut self, now: NaiveDateTime) -> Vec<SessionEvent> {
        let today = DateKey::from_datetime(now);
        let mut events = Vec::new();

        if self.is_continuation(&today) {
            if self.state.quest_date_key.is_none() {
                self.state.quest_date_key = Some(today);
                events.extend(self.persist());
            }
            return events;
        }

        let successful =
            self.state.current_health() == 0 || self.state.quests.all_completed();
        let transition = if successful {
            self.state.set_level(self.state.current_level + 1);
            DayTransition::Advanced
        } else {
            // A stamped ledger whose day never got an outcome was abandoned
            let abandoned =
                self.state.quest_date_key.is_some() && !self.state.ledger_day_finalized();
            if abandoned {
                self.state.streak = 0;
            }
            DayTransition::Retried
        };

        tracing::info!(
            ?transition,
            level = self.state.current_level,
            from = ?self.state.quest_date_key,
            to = %today,
            "day reconciled"
        );

        self.state.start_day(today);
        events.extend(self.persist());
        events.push(SessionEvent::DayReconciled {
            transition,
            level: self.state.current_level,
        });
        events
    }

    /// Marks a quest done or not done.
    ///
    /// Ignored once today's outcome is finalized. Completing deals 1 damage
    /// (2 for the door quest inside the bonus window); un-completing heals 1.
    /// Assumes the day is already reconciled; callers go through `handle`.
    pub(crate) fn set_quest_completion(
        &mut self,
        quest: QuestId,
        completed: bool,
        now: NaiveDateTime,
    ) -> Vec<SessionEvent> {
        let today = DateKey::from_datetime(now);
        if self.state.is_finalized_on(&today) {
            tracing::debug!(%quest, "quests are locked for today");
            return Vec::new();
        }

        self.bonus_window_active = deadline::bonus_window_active(&self.config, now);
        let health_before = self.state.current_health();
        let was_completed = self.state.quests.set(quest, completed);
        if was_completed == completed {
            return Vec::new();
        }

        let mut events = Vec::new();
        if completed {
            let damage = if quest == QuestId::Door && self.bonus_window_active {
                self.state.bonus_damage += DOOR_BONUS_DAMAGE - QUEST_DAMAGE;
                DOOR_BONUS_DAMAGE
            } else {
                QUEST_DAMAGE
            };
            let health = self.state.current_health();
            tracing::debug!(%quest, damage, health, "quest completed");
            events.push(SessionEvent::MonsterDamaged {
                quest,
                damage,
                health,
            });
        } else {
            let health = self.state.current_health();
            tracing::debug!(%quest, health, "quest un-completed");
            events.push(SessionEvent::MonsterHealed {
                quest,
                amount: health.saturating_sub(health_before),
                health,
            });
        }

        events.extend(self.persist());
        events.extend(self.check_outcome(now));
        events
    }

    /// Finalizes a win once the monster's health reaches zero.
    pub(crate) fn check_outcome(&mut self, now: NaiveDateTime) -> Vec<SessionEvent> {
        let today = DateKey::from_datetime(now);
        if self.state.current_health() > 0 || self.state.is_finalized_on(&today) {
            return Vec::new();
        }

        self.state.total_wins += 1;
        self.state.streak += 1;
        self.state.last_completed_date_key = Some(today);
        self.pending_outcome = Some(Outcome::Win);

        let area_unlocked = self.state.streak.checked_rem(self.config.area_unlock_streak) == Some(0);
        tracing::info!(
            streak = self.state.streak,
            total_wins = self.state.total_wins,
            area_unlocked,
            "monster defeated"
        );

        let mut events: Vec<SessionEvent> = self.persist().into_iter().collect();
        events.push(SessionEvent::Win {
            streak: self.state.streak,
            total_wins: self.state.total_wins,
            area_unlocked,
        });
        events
    }

    /// Finalizes a loss if the deadline has passed with the door quest open.
    pub(crate) fn force_loss_if_deadline_passed(&mut self, now: NaiveDateTime) -> Vec<SessionEvent> {
        let today = DateKey::from_datetime(now);
        if self.state.is_finalized_on(&today)
            || self.state.quests.is_completed(QuestId::Door)
            || self.state.current_health() == 0
            || !deadline::deadline_passed(&self.config, now)
        {
            return Vec::new();
        }

        self.state.streak = 0;
        self.state.last_completed_date_key = Some(today);
        self.pending_outcome = Some(Outcome::Loss);
        tracing::info!(health = self.state.current_health(), "deadline passed, day lost");

        let mut events: Vec<SessionEvent> = self.persist().into_iter().collect();
        events.push(SessionEvent::Loss);
        events
    }

    /// The player has seen the result. The day itself advances on the next
    /// [`reconcile_day`](Self::reconcile_day).
    pub fn acknowledge_day_transition(&mut self) {
        self.pending_outcome = None;
    }

    /// Deletes the saved session and starts again from level 1.
    pub fn request_reset(&mut self, now: NaiveDateTime) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        match self.store.remove(SAVE_KEY) {
            // The player chose to discard the old save, readable or not
            Ok(()) => self.save_unreadable = false,
            Err(e) => {
                tracing::warn!(error = %e, "could not delete saved session");
                self.storage_degraded = true;
                events.push(SessionEvent::StoreWarning {
                    message: format!("Could not delete save: {e}"),
                });
            }
        }
        tracing::info!("session reset");
        self.state = SessionState::default();
        self.pending_outcome = None;
        self.bonus_window_active = deadline::bonus_window_active(&self.config, now);
        events.extend(self.reconcile_day(now));
        events
    }

    /// One deadline-monitor tick: roll the day over if the date changed,
    /// refresh the bonus flag, and apply the deadline.
    pub fn tick(&mut self, now: NaiveDateTime) -> Vec<SessionEvent> {
        let mut events = self.reconcile_day(now);
        let info = deadline::evaluate(&self.config, now);
        self.bonus_window_active = info.bonus_active;
        events.extend(self.force_loss_if_deadline_passed(now));
        events.push(SessionEvent::Tick(info));
        events
    }

    pub fn snapshot(&self, now: NaiveDateTime) -> SessionSnapshot {
        let today = DateKey::from_datetime(now);
        let monster = self.state.active_monster();
        SessionSnapshot {
            outcome_finalized: self.state.is_finalized_on(&today),
            state: self.state.clone(),
            today,
            monster,
            current_health: self.state.current_health(),
            max_health: monster.max_health,
            bonus_window_active: self.bonus_window_active,
            pending_outcome: self.pending_outcome,
            storage_degraded: self.storage_degraded,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn pending_outcome(&self) -> Option<Outcome> {
        self.pending_outcome
    }

    pub fn storage_degraded(&self) -> bool {
        self.storage_degraded
    }

    /// Writes the current state. Failures are reported, never raised.
    fn persist(&mut self) -> Option<SessionEvent> {
        if self.save_unreadable {
            tracing::debug!("saved session was unreadable, keeping changes in memory");
            return None;
        }
        let result = self
            .state
            .encode()
            .map_err(StoreError::from)
            .and_then(|blob| self.store.set(SAVE_KEY, &blob));
        match result {
            Ok(()) => {
                if self.storage_degraded {
                    tracing::info!("store is writable again");
                    self.storage_degraded = false;
                }
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not save session, continuing in memory");
                self.storage_degraded = true;
                Some(SessionEvent::StoreWarning {
                    message: format!("Could not save: {e}"),
                })
            }
        }
    }

    fn is_continuation(&self, today: &DateKey) -> bool {
        let state = &self.state;
        state.quest_date_key.as_ref() == Some(today)
            || state.is_finalized_on(today)
            || (state.last_completed_date_key.is_none() && state.quest_date_key.is_none())
    }
}
