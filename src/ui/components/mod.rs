pub mod companion;
pub mod plan_table;
pub mod status_bar;
pub mod toolbar;

use crate::app::AppState;
use crate::app::menu::{ContextMenu, MenuItem};
use crate::app::prompt::Prompt;
use crate::utils::text_field::TextField;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, state: &mut AppState) {
    // Update terminal dimensions for click calculations
    state.terminal_width = f.area().width;
    state.terminal_height = f.area().height;

    if state.companion.visible {
        companion::render(f, state);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Plan table
            Constraint::Length(1), // Toolbar
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    plan_table::render(f, state, chunks[0]);
    toolbar::render(f, state, chunks[1]);
    status_bar::render(f, state, chunks[2]);

    if let Some(menu) = state.context_menu {
        render_context_menu(f, state, &menu);
    }

    if let Some(ref prompt) = state.prompt {
        render_prompt(f, state, prompt);
    }

    if let Some(ref message) = state.warning {
        render_warning(f, state, message);
    }

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(state.theme.foreground);
    let section_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let entry = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("    {keys:<16}"), key_style),
            Span::styled(desc, desc_style),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("  ── Plans ──", section_style)),
        entry("Alt+A", "Add a plan"),
        entry("Alt+E", "Edit the selected plan"),
        entry("Alt+D / Del", "Delete the selected plan"),
        entry("Ctrl+D", "Delete all plans"),
        entry("F2 / dbl-click", "Edit plan text in place"),
        entry("drag", "Move a plan (drop on the blank row for last)"),
        Line::from(""),
        Line::from(Span::styled("  ── Files ──", section_style)),
        entry("Alt+L", "Link a file to the selected plan"),
        entry("Alt+O", "Open the linked file"),
        entry("right-click", "Row menu"),
        Line::from(""),
        Line::from(Span::styled("  ── View ──", section_style)),
        entry("j k / ↑ ↓", "Move selection"),
        entry("Alt+F", "Float: show the compact panel"),
        entry("?", "Toggle this help"),
        entry("q / Ctrl+C", "Quit"),
    ];

    let area = centered_rect(70, 80, f.area());
    let list = List::new(lines.into_iter().map(ListItem::new).collect::<Vec<_>>()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_bottom(Line::from(" Esc close ").centered())
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(Clear, area);
    f.render_widget(list, area);
}

fn render_prompt(f: &mut Frame, state: &AppState, prompt: &Prompt) {
    let area = centered_fixed(60, 4, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(prompt.kind.title())
        .title_bottom(Line::from(" Enter ok  Esc cancel ").centered())
        .style(
            Style::default()
                .bg(state.theme.background)
                .fg(state.theme.foreground),
        );
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
    f.render_widget(Paragraph::new(prompt.kind.label()), rows[0]);
    f.render_widget(
        Paragraph::new(field_line(&prompt.field, rows[1].width, Style::default())),
        rows[1],
    );
}

fn render_warning(f: &mut Frame, state: &AppState, message: &str) {
    let area = centered_rect(60, 30, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Warning ")
        .title_bottom(Line::from(" Enter dismiss ").centered())
        .style(
            Style::default()
                .bg(state.theme.background)
                .fg(state.theme.warning),
        );

    let paragraph = Paragraph::new(message)
        .block(block)
        .style(Style::default().fg(state.theme.warning))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn render_context_menu(f: &mut Frame, state: &AppState, menu: &ContextMenu) {
    let area = menu.area(f.area());
    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == menu.highlighted {
                Style::default()
                    .bg(state.theme.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(format!(" {}", item.label()), style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .style(
                Style::default()
                    .bg(state.theme.background)
                    .fg(state.theme.foreground),
            ),
    );

    f.render_widget(Clear, area);
    f.render_widget(list, area);
}

/// One-line rendering of a text field with a block cursor, scrolled so the
/// cursor stays inside `width` columns.
pub(crate) fn field_line(field: &TextField, width: u16, base: Style) -> Line<'_> {
    let text = field.text();
    let cursor = field.cursor();
    let (before, after) = text.split_at(cursor);

    // Drop leading characters until the cursor fits
    let mut start = 0;
    if field.cursor_column() >= width {
        while start < before.len() && before[start..].width() >= width as usize {
            start += before[start..].chars().next().map(|c| c.len_utf8()).unwrap_or(1);
        }
    }
    let before = &before[start..];

    let cursor_len = after.chars().next().map(|c| c.len_utf8()).unwrap_or(0);
    let (cursor_char, rest) = if after.is_empty() {
        (" ", "")
    } else {
        after.split_at(cursor_len)
    };

    Line::from(vec![
        Span::styled(before, base),
        Span::styled(cursor_char, Style::default().bg(Color::Yellow).fg(Color::Black)),
        Span::styled(rest, base),
    ])
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Like `centered_rect`, with a height in rows instead of a percentage.
fn centered_fixed(percent_x: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    area
}
