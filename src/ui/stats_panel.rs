use early_hero::SessionSnapshot;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the level / streak / total wins bar.
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot) {
    let state = &snapshot.state;
    let value = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::raw("Level "),
        Span::styled(state.current_level.to_string(), value),
        Span::raw("    🔥 Streak "),
        Span::styled(state.streak.to_string(), value),
        Span::raw("    🏆 Monsters defeated "),
        Span::styled(state.total_wins.to_string(), value),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Early Hero ")
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(paragraph, area);
}
