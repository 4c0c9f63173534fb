use crate::app::AppState;
use ratatui::{
    Frame,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

/// Companion view: an otherwise blank screen with the small panel that
/// mirrors the first entries.
pub fn render(f: &mut Frame, state: &AppState) {
    let screen = f.area();
    f.render_widget(Clear, screen);
    f.render_widget(
        Block::default().style(Style::default().bg(state.theme.background)),
        screen,
    );

    let area = state.companion.area(screen);
    let lines: Vec<Line> = state
        .companion_lines()
        .into_iter()
        .map(|text| Line::from(format!("• {text}")))
        .collect();

    let border = if state.companion.is_dragging() {
        state.theme.header
    } else {
        state.theme.companion_border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Plans ")
        .title_bottom(Line::from(" double-click: restore ").centered())
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(state.theme.companion_fg));

    f.render_widget(paragraph, area);
}
