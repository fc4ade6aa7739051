use early_hero::{QuestId, SessionSnapshot};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the quest checklist with hotkeys.
pub fn draw_quest_panel(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot) {
    let locked = snapshot.outcome_finalized;
    let mut lines = vec![Line::from("")];

    for (i, (quest, done)) in snapshot.state.quests.iter().enumerate() {
        let check = if done { "[x]" } else { "[ ]" };
        let label_style = if done {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::Cyan)),
            Span::raw(format!("{check} {} ", quest.icon())),
            Span::styled(quest.label(), label_style),
        ];
        if quest == QuestId::Door && snapshot.bonus_window_active && !done {
            spans.push(Span::styled(" x2", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(spans));
    }

    let title = if locked {
        " Quests (locked until tomorrow) "
    } else {
        " Morning Quests "
    };
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}
