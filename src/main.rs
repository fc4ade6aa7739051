mod session_events;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use early_hero::build_info;
use early_hero::core::constants::INPUT_POLL_MS;
use early_hero::core::deadline::{self, format_remaining};
use early_hero::logging::init_logging;
use early_hero::monsters::area_for_index;
use early_hero::store::data_dir;
use early_hero::{
    Clock, Command, DeadlineMonitor, GameConfig, JsonFileStore, KeyValueStore, MemoryStore,
    QuestId, Session, SessionEvent, SessionSnapshot, SystemClock,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use session_events::{apply_session_events, describe};
use std::io;
use std::time::Duration;
use ui::{draw_ui, UiState};

type GameSession = Session<Box<dyn KeyValueStore>>;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => run_tui(),
        Some("--version") | Some("-v") => {
            println!("{}", build_info::version_line());
            Ok(())
        }
        Some("--help") | Some("-h") => {
            print_help();
            Ok(())
        }
        Some("status") => {
            let (session, events) = open_session();
            print_events(&events);
            print_status(&session.snapshot(SystemClock.now()), session.config());
            Ok(())
        }
        Some(cmd @ ("done" | "undo")) => {
            let Some(name) = args.get(2) else {
                eprintln!("Usage: early-hero {cmd} <quest>");
                eprintln!("Quests: {}", quest_names());
                std::process::exit(1);
            };
            let (mut session, events) = open_session();
            print_events(&events);
            match session.toggle_quest_by_name(name, cmd == "done", SystemClock.now()) {
                Ok(events) => {
                    print_events(&events);
                    print_status(&session.snapshot(SystemClock.now()), session.config());
                    Ok(())
                }
                Err(e) => {
                    eprintln!("{e}");
                    eprintln!("Quests: {}", quest_names());
                    std::process::exit(1);
                }
            }
        }
        Some("reset") => {
            if args.get(2).map(String::as_str) != Some("--yes") {
                eprintln!("This erases all progress. Run 'early-hero reset --yes' to confirm.");
                std::process::exit(1);
            }
            let (mut session, _) = open_session();
            let events = session.handle(Command::Reset, SystemClock.now());
            print_events(&events);
            println!("Progress reset.");
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Run 'early-hero --help' for usage.");
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!("Early Hero - beat the morning monster before the deadline\n");
    println!("Usage: early-hero [command]\n");
    println!("Commands:");
    println!("  (none)         Open the game");
    println!("  status         Show today's progress");
    println!("  done <quest>   Mark a quest complete");
    println!("  undo <quest>   Mark a quest incomplete");
    println!("  reset --yes    Erase all progress");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
    println!("\nQuests: {}", quest_names());
}

fn quest_names() -> String {
    QuestId::ALL
        .iter()
        .map(|q| q.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sets up logging, config and the store, then loads the session.
fn open_session() -> (GameSession, Vec<SessionEvent>) {
    init_logging();

    let config = match data_dir() {
        Ok(dir) => GameConfig::load_from_dir(&dir),
        Err(e) => {
            tracing::warn!(error = %e, "no data directory, using default config");
            GameConfig::default()
        }
    };

    let store: Box<dyn KeyValueStore> = match JsonFileStore::new() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "file store unavailable, progress will not be saved");
            Box::new(MemoryStore::new())
        }
    };

    Session::initialize(store, config, SystemClock.now())
}

fn print_events(events: &[SessionEvent]) {
    for text in events.iter().filter_map(describe) {
        println!("{text}");
    }
}

fn print_status(snapshot: &SessionSnapshot, config: &GameConfig) {
    let state = &snapshot.state;
    let area = area_for_index(state.current_area);
    println!(
        "Level {} ({} {})   streak {}   wins {}",
        state.current_level, area.icon, area.name, state.streak, state.total_wins
    );

    let monster = snapshot.monster;
    match monster.display_name_secondary {
        Some(secondary) => println!(
            "Monster: {} {} ({})   health {}/{}",
            monster.icon,
            monster.display_name,
            secondary,
            snapshot.current_health,
            snapshot.max_health
        ),
        None => println!(
            "Monster: {} {}   health {}/{}",
            monster.icon, monster.display_name, snapshot.current_health, snapshot.max_health
        ),
    }

    println!("Quests:");
    for (quest, done) in state.quests.iter() {
        let check = if done { "x" } else { " " };
        println!("  [{check}] {:<10} {}", quest.as_str(), quest.label());
    }

    let info = deadline::evaluate(config, SystemClock.now());
    let mut countdown = format!("Deadline in {}", format_remaining(info.remaining));
    if info.bonus_active {
        countdown.push_str("   (early bird bonus active)");
    }
    if info.warning_active {
        countdown.push_str("   (hurry!)");
    }
    println!("{countdown}");

    if snapshot.outcome_finalized {
        if snapshot.current_health == 0 {
            println!("Today's monster is defeated. See you tomorrow!");
        } else {
            println!("Today's monster got away. Try again tomorrow.");
        }
    }
    if snapshot.storage_degraded {
        println!("Warning: progress is not being saved.");
    }
}

fn run_tui() -> io::Result<()> {
    let (mut session, events) = open_session();
    let mut ui = UiState::default();
    apply_session_events(&mut ui, &events);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Every mutation is saved as it happens, so quitting needs no final write
    let result = run_game_loop(&mut terminal, &mut session, &mut ui);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("See you tomorrow, hero!");
    result
}

fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession,
    ui: &mut UiState,
) -> io::Result<()> {
    let mut monitor = DeadlineMonitor::new(SystemClock, session.config());

    loop {
        let events = monitor.poll(session);
        apply_session_events(ui, &events);

        let snapshot = session.snapshot(monitor.now());
        terminal.draw(|frame| draw_ui(frame, &snapshot, ui))?;

        // Poll for input (non-blocking)
        if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            continue;
        }
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        // Handle reset confirmation dialog
        if ui.showing_reset_confirm {
            match key_event.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    ui.showing_reset_confirm = false;
                    let events = session.handle(Command::Reset, monitor.now());
                    *ui = UiState::default();
                    apply_session_events(ui, &events);
                    let events = monitor.tick_now(session);
                    apply_session_events(ui, &events);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    ui.showing_reset_confirm = false;
                }
                _ => {}
            }
            continue;
        }

        // Handle the win/loss dialog
        if snapshot.pending_outcome.is_some() {
            match key_event.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => {
                    session.handle(Command::AcknowledgeDay, monitor.now());
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => break,
                _ => {}
            }
            continue;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => break,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                ui.showing_reset_confirm = true;
            }
            KeyCode::Char(c) => {
                if let Some(quest) = QuestId::from_hotkey(c) {
                    let completed = !snapshot.state.quests.is_completed(quest);
                    let events =
                        session.handle(Command::ToggleQuest { quest, completed }, monitor.now());
                    apply_session_events(ui, &events);
                }
            }
            _ => {}
        }
    }

    monitor.stop();
    Ok(())
}
