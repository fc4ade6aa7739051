use super::centered_rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draws the reset confirmation dialog as an overlay
pub fn draw_reset_confirm(frame: &mut Frame) {
    let dialog_area = centered_rect(frame.size(), 44, 10);
    frame.render_widget(Clear, dialog_area);

    let title = Line::from(vec![Span::styled(
        " Reset all progress? ",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "This will erase:",
            Style::default().fg(Color::Red),
        )),
        Line::from("  - Level, streak and total wins"),
        Line::from("  - Today's quest progress"),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[Y] Yes, reset",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                "[N] Cancel",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, dialog_area);
}
