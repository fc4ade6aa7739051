//! Quest toggling and monster health.
//!
//! Randomized toggle sequences use a seeded ChaCha RNG so failures replay.

use chrono::{NaiveDate, NaiveDateTime};
use early_hero::{
    Command, GameConfig, MemoryStore, Outcome, QuestId, Session, SessionEvent,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, 4)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn fresh(now: NaiveDateTime) -> Session<MemoryStore> {
    Session::initialize(MemoryStore::new(), GameConfig::default(), now).0
}

fn toggle(session: &mut Session<MemoryStore>, quest: QuestId, completed: bool, now: NaiveDateTime) -> Vec<SessionEvent> {
    session.handle(Command::ToggleQuest { quest, completed }, now)
}

#[test]
fn test_health_tracks_completed_count_outside_bonus_window() {
    for seed in 0..50u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut session = fresh(at(7, 31));
        let max = session.snapshot(at(7, 31)).max_health;

        for step in 0..30 {
            let quest = QuestId::ALL[rng.gen_range(0..QuestId::ALL.len())];
            let completed = rng.gen_bool(0.6);
            toggle(&mut session, quest, completed, at(7, 31 + step / 10));

            let state = session.state();
            assert_eq!(
                state.current_health(),
                max - state.quests.completed_count(),
                "seed {seed} step {step}"
            );
        }
    }
}

#[test]
fn test_each_quest_deals_one_damage_after_cutoff() {
    let mut session = fresh(at(7, 30));
    let mut healths = Vec::new();
    for quest in QuestId::ALL {
        for event in toggle(&mut session, quest, true, at(7, 35)) {
            if let SessionEvent::MonsterDamaged { damage, health, .. } = event {
                assert_eq!(damage, 1);
                healths.push(health);
            }
        }
    }
    assert_eq!(healths, vec![4, 3, 2, 1, 0]);
    assert_eq!(session.pending_outcome(), Some(Outcome::Win));
}

#[test]
fn test_early_door_deals_double_damage() {
    let mut session = fresh(at(6, 50));
    let events = toggle(&mut session, QuestId::Door, true, at(7, 10));
    assert_eq!(
        events,
        vec![SessionEvent::MonsterDamaged {
            quest: QuestId::Door,
            damage: 2,
            health: 3
        }]
    );
    assert_eq!(session.state().bonus_damage, 1);
}

#[test]
fn test_early_door_wins_with_four_quests() {
    let mut session = fresh(at(6, 50));
    toggle(&mut session, QuestId::Door, true, at(7, 0));

    let mut wins = 0;
    for quest in [QuestId::Dressed, QuestId::Breakfast, QuestId::Fishoil] {
        let events = toggle(&mut session, quest, true, at(7, 20));
        wins += events
            .iter()
            .filter(|e| matches!(e, SessionEvent::Win { .. }))
            .count();
    }
    assert_eq!(wins, 1);
    assert_eq!(session.state().current_health(), 0);
    assert_eq!(session.state().quests.completed_count(), 4);
    assert_eq!(session.state().streak, 1);
    assert_eq!(session.state().total_wins, 1);
}

#[test]
fn test_door_after_cutoff_is_normal_damage() {
    let mut session = fresh(at(6, 50));
    let events = toggle(&mut session, QuestId::Door, true, at(7, 30));
    assert!(matches!(
        events.as_slice(),
        [SessionEvent::MonsterDamaged { damage: 1, health: 4, .. }]
    ));
    assert_eq!(session.state().bonus_damage, 0);
}

#[test]
fn test_uncompleting_door_heals_one() {
    let mut session = fresh(at(6, 50));
    toggle(&mut session, QuestId::Door, true, at(7, 0));
    assert_eq!(session.state().current_health(), 3);

    let events = toggle(&mut session, QuestId::Door, false, at(7, 1));
    assert_eq!(
        events,
        vec![SessionEvent::MonsterHealed {
            quest: QuestId::Door,
            amount: 1,
            health: 4
        }]
    );
}

#[test]
fn test_quests_locked_after_win() {
    let mut session = fresh(at(7, 35));
    for quest in QuestId::ALL {
        toggle(&mut session, quest, true, at(7, 36));
    }
    let before = session.state().clone();

    for quest in QuestId::ALL {
        assert!(toggle(&mut session, quest, false, at(8, 0)).is_empty());
    }
    assert_eq!(session.state(), &before);
}

#[test]
fn test_quests_locked_after_loss() {
    let mut session = fresh(at(7, 35));
    toggle(&mut session, QuestId::Dressed, true, at(7, 36));
    session.handle(Command::Tick, at(7, 45));
    assert_eq!(session.pending_outcome(), Some(Outcome::Loss));

    let events = toggle(&mut session, QuestId::Door, true, at(7, 46));
    assert!(events.is_empty());
    assert!(!session.state().quests.is_completed(QuestId::Door));
    assert_eq!(session.state().current_health(), 4);
}

#[test]
fn test_win_is_finalized_once() {
    for seed in 0..20u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut session = fresh(at(7, 31));
        let mut wins = 0;

        for _ in 0..40 {
            let quest = QuestId::ALL[rng.gen_range(0..QuestId::ALL.len())];
            let events = toggle(&mut session, quest, rng.gen_bool(0.7), at(7, 40));
            wins += events
                .iter()
                .filter(|e| matches!(e, SessionEvent::Win { .. }))
                .count();
        }

        assert!(wins <= 1, "seed {seed}");
        assert_eq!(session.state().total_wins as usize, wins);
    }
}
