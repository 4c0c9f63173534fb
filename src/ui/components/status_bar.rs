use crate::app::AppState;
use crate::app::mode::Mode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    if state.mode() == Mode::ConfirmClear {
        render_confirm_clear(f, state, area);
        return;
    }

    if let Some((message, time)) = &state.status_message
        && time.elapsed().as_secs() <= 3
    {
        render_status_message(f, message, area);
        return;
    }

    let count = state.plan_list.len();
    let selection = match state.selected {
        Some(i) => format!(" | row {}", i + 1),
        None => String::new(),
    };
    let left_content = format!(
        " {} | {} plan{}{}",
        state.mode(),
        count,
        if count == 1 { "" } else { "s" },
        selection
    );
    let nav_hint = match state.mode() {
        Mode::Edit => "Enter save  Esc cancel",
        Mode::Prompt => "Enter ok  Esc cancel",
        Mode::ContextMenu => "Enter choose  Esc close",
        _ => "? help  q quit",
    };
    let version_text = format!("v{VERSION}");

    let padding = area.width.saturating_sub(
        left_content.len() as u16 + nav_hint.len() as u16 + version_text.len() as u16 + 3,
    );

    let style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let status_line = format!(
        "{} {}{:>padding$} {} ",
        left_content,
        nav_hint,
        "",
        version_text,
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}

fn render_confirm_clear(f: &mut Frame, state: &AppState, area: Rect) {
    let count = state.plan_list.len();
    let prompt = format!(
        " Delete all {} plan{}? (Y/n) ",
        count,
        if count == 1 { "" } else { "s" }
    );

    let style = Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(180, 100, 0))
        .add_modifier(Modifier::BOLD);

    let padding = area.width.saturating_sub(prompt.len() as u16);
    let status_line = format!("{}{:padding$}", prompt, "", padding = padding as usize);

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}

fn render_status_message(f: &mut Frame, message: &str, area: Rect) {
    let display_message = format!(" {message} ");

    let style = Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(0, 100, 0))
        .add_modifier(Modifier::BOLD);

    let padding = area.width.saturating_sub(display_message.len() as u16);
    let status_line = format!(
        "{}{:padding$}",
        display_message,
        "",
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}
