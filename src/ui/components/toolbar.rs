use crate::app::AppState;
use crate::app::layout::{ToolbarAction, ToolbarGeometry};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

const BUTTON_GAP: u16 = 2;

pub fn render(f: &mut Frame, state: &mut AppState, area: Rect) {
    f.render_widget(
        Block::default().style(Style::default().bg(state.theme.background)),
        area,
    );

    let style = Style::default()
        .fg(state.theme.toolbar_fg)
        .bg(state.theme.toolbar_bg)
        .add_modifier(Modifier::BOLD);

    let mut buttons = Vec::with_capacity(ToolbarAction::ALL.len());
    let mut x = area.x + 1;
    for action in ToolbarAction::ALL {
        let label = action.label();
        let width = label.width() as u16;
        if x + width > area.right() {
            break;
        }
        let rect = Rect::new(x, area.y, width, 1);
        f.render_widget(Paragraph::new(label).style(style), rect);
        buttons.push((rect, action));
        x += width + BUTTON_GAP;
    }

    state.toolbar = ToolbarGeometry { buttons };
}
