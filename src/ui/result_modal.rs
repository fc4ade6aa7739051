use super::centered_rect;
use early_hero::{Outcome, SessionSnapshot};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draws the victory or defeat dialog as an overlay
pub fn draw_result_modal(
    frame: &mut Frame,
    snapshot: &SessionSnapshot,
    outcome: Outcome,
    area_unlocked: bool,
) {
    let dialog_area = centered_rect(frame.size(), 46, 11);
    frame.render_widget(Clear, dialog_area);

    let state = &snapshot.state;
    let (title, color, mut lines) = match outcome {
        Outcome::Win => {
            let mut lines = vec![
                Line::from(""),
                Line::from(format!("{} has been defeated!", snapshot.monster.display_name)),
                Line::from(""),
                Line::from(format!("🏆 {} day streak", state.streak)),
                Line::from(format!("⭐ {} monsters defeated in total", state.total_wins)),
            ];
            if area_unlocked {
                lines.push(Line::from(Span::styled(
                    "🎊 New map area unlocked!",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            (" Victory! ", Color::Green, lines)
        }
        Outcome::Loss => (
            " The monster struck back ",
            Color::Red,
            vec![
                Line::from(""),
                Line::from("The deadline passed before you got out the door."),
                Line::from(""),
                Line::from("Your streak is back to 0."),
                Line::from(format!(
                    "{} will be waiting tomorrow.",
                    snapshot.monster.display_name
                )),
            ],
        ),
    };

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Continue",
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, dialog_area);
}
