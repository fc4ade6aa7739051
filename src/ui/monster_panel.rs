use early_hero::SessionSnapshot;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

fn health_color(current: u32, max: u32) -> Color {
    if max == 0 || current * 3 <= max {
        Color::Red
    } else if current * 3 <= max * 2 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Draws today's monster and its health bar.
pub fn draw_monster_panel(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Today's Monster ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let monster = snapshot.monster;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::raw(monster.icon)),
        Line::from(Span::styled(
            monster.display_name,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(secondary) = monster.display_name_secondary {
        lines.push(Line::from(Span::styled(
            secondary,
            Style::default().fg(Color::DarkGray),
        )));
    }
    if snapshot.outcome_finalized {
        let text = if snapshot.current_health == 0 {
            "Defeated! Come back tomorrow."
        } else {
            "The monster got away. Try again tomorrow."
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Cyan),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[0],
    );

    let ratio = if snapshot.max_health == 0 {
        0.0
    } else {
        f64::from(snapshot.current_health) / f64::from(snapshot.max_health)
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(health_color(
            snapshot.current_health,
            snapshot.max_health,
        )))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}/{}", snapshot.current_health, snapshot.max_health));
    frame.render_widget(gauge, chunks[1]);
}
