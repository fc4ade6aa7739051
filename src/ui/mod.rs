mod map_panel;
mod monster_panel;
mod quest_panel;
pub mod reset_confirm;
pub mod result_modal;
mod stats_panel;

use early_hero::core::deadline::format_remaining;
use early_hero::{SessionSnapshot, TickInfo};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Presentation-only state kept by the event loop.
#[derive(Debug, Default)]
pub struct UiState {
    pub showing_reset_confirm: bool,
    pub last_tick: Option<TickInfo>,
    /// Latest one-line notice (damage dealt, save problems, ...)
    pub notice: Option<String>,
    /// Whether the most recent win opened a new map area.
    pub area_unlocked: bool,
}

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, snapshot: &SessionSnapshot, ui: &UiState) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stats
            Constraint::Min(9),    // Monster + quests
            Constraint::Length(4), // Map
            Constraint::Length(3), // Countdown
            Constraint::Length(3), // Footer
        ])
        .split(size);

    stats_panel::draw_stats_panel(frame, v_chunks[0], snapshot);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(v_chunks[1]);
    monster_panel::draw_monster_panel(frame, h_chunks[0], snapshot);
    quest_panel::draw_quest_panel(frame, h_chunks[1], snapshot);

    map_panel::draw_map_panel(frame, v_chunks[2], snapshot);
    draw_countdown(frame, v_chunks[3], snapshot, ui.last_tick.as_ref());
    draw_footer(frame, v_chunks[4], snapshot, ui);

    if let Some(outcome) = snapshot.pending_outcome {
        result_modal::draw_result_modal(frame, snapshot, outcome, ui.area_unlocked);
    }
    if ui.showing_reset_confirm {
        reset_confirm::draw_reset_confirm(frame);
    }
}

fn draw_countdown(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot, tick: Option<&TickInfo>) {
    let mut spans = vec![Span::raw(" Deadline in ")];
    match tick {
        Some(info) => {
            let color = if info.warning_active {
                Color::Red
            } else {
                Color::White
            };
            spans.push(Span::styled(
                format_remaining(info.remaining),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            if info.warning_active {
                spans.push(Span::styled(
                    "  Hurry! The monster is getting ready to strike back",
                    Style::default().fg(Color::Red),
                ));
            }
        }
        None => spans.push(Span::raw("--:--:--")),
    }
    if snapshot.bonus_window_active {
        spans.push(Span::styled(
            "  ⚡ Early bird: leaving the house deals double damage",
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Countdown "));
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot, ui: &UiState) {
    let mut spans = vec![
        Span::styled("[1-5]", Style::default().fg(Color::Cyan)),
        Span::raw(" Toggle quest  "),
        Span::styled("[R]", Style::default().fg(Color::Cyan)),
        Span::raw(" Reset  "),
        Span::styled("[Q]", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit"),
    ];
    if snapshot.storage_degraded {
        spans.push(Span::styled(
            "  ⚠ progress is not being saved",
            Style::default().fg(Color::Red),
        ));
    } else if let Some(notice) = &ui.notice {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(notice.clone(), Style::default().fg(Color::Gray)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Centered rectangle of at most `width` x `height` inside `area`.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(4));
    let h = height.min(area.height.saturating_sub(4));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}
