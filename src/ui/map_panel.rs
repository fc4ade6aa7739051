use early_hero::monsters::AREAS;
use early_hero::SessionSnapshot;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the area track. Areas before the current one are unlocked.
pub fn draw_map_panel(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot) {
    let current = snapshot.state.current_area as usize;
    // After a full lap every area stays unlocked and the marker wraps
    let lap_done = current >= AREAS.len();
    let marker = current % AREAS.len();

    let mut nodes = Vec::new();
    let mut names = Vec::new();
    for (i, map_area) in AREAS.iter().enumerate() {
        if i > 0 {
            nodes.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
            names.push(Span::raw("    "));
        }
        let style = if i == marker {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if i < marker || lap_done {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let node = if i == marker {
            format!("🦸{}", map_area.icon)
        } else if i < marker || lap_done {
            format!("✓{}", map_area.icon)
        } else {
            format!("🔒{}", map_area.icon)
        };
        nodes.push(Span::styled(node, style));
        names.push(Span::styled(map_area.name, style));
    }

    let paragraph = Paragraph::new(vec![Line::from(nodes), Line::from(names)])
        .block(Block::default().borders(Borders::ALL).title(" Map "));
    frame.render_widget(paragraph, area);
}
