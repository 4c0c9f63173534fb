use super::layout::ToolbarAction;
use super::menu::MenuItem;
use super::mode::Mode;
use super::state::AppState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    if state.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            state.show_help = false;
        }
        return Ok(());
    }

    match state.mode() {
        Mode::Navigate => handle_navigate_mode(key, state),
        Mode::Edit => handle_edit_mode(key, state),
        Mode::Prompt => handle_prompt_mode(key, state),
        Mode::ConfirmClear => handle_confirm_clear_mode(key, state),
        Mode::Warning => handle_warning_mode(key, state),
        Mode::ContextMenu => handle_context_menu_mode(key, state),
        Mode::Companion => handle_companion_mode(key, state),
    }
    Ok(())
}

fn handle_navigate_mode(key: KeyEvent, state: &mut AppState) {
    if key.modifiers.contains(KeyModifiers::ALT) {
        if let KeyCode::Char(c) = key.code {
            match c.to_ascii_lowercase() {
                'a' => state.open_add_prompt(),
                'e' => state.open_edit_prompt(),
                'd' => {
                    state.delete_selected();
                }
                'l' => state.link_file(),
                'o' => state.open_selected_file(),
                'f' => state.enter_companion_mode(),
                _ => {}
            }
        }
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('d') => state.request_clear_all(),
            KeyCode::Char('c') => state.should_quit = true,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('?') => state.show_help = true,
        KeyCode::Up | KeyCode::Char('k') => state.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_selection_down(),
        KeyCode::Delete => {
            state.delete_selected();
        }
        KeyCode::F(2) => {
            if let Some(index) = state.selected {
                state.start_inline_edit(index);
            }
        }
        KeyCode::Menu => state.open_context_menu_for_selection(),
        KeyCode::Esc => state.select(None),
        _ => {}
    }
}

fn handle_edit_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Enter => state.commit_inline_edit(),
        KeyCode::Esc => state.cancel_inline_edit(),
        _ => {
            if let Some(edit) = state.inline_edit.as_mut() {
                edit.field.handle_key(key);
            }
        }
    }
}

fn handle_prompt_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Enter => state.submit_prompt(),
        KeyCode::Esc => state.cancel_prompt(),
        _ => {
            if let Some(prompt) = state.prompt.as_mut() {
                prompt.field.handle_key(key);
            }
        }
    }
}

fn handle_confirm_clear_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => state.answer_clear_all(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => state.answer_clear_all(false),
        _ => {}
    }
}

fn handle_warning_mode(key: KeyEvent, state: &mut AppState) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        state.dismiss_warning();
    }
}

fn handle_context_menu_mode(key: KeyEvent, state: &mut AppState) {
    let Some(menu) = state.context_menu.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => menu.up(),
        KeyCode::Down | KeyCode::Char('j') => menu.down(),
        KeyCode::Enter => {
            let item = menu.highlighted_item();
            state.activate_menu_item(item);
        }
        KeyCode::Esc | KeyCode::Char('q') => state.close_context_menu(),
        _ => {}
    }
}

fn handle_companion_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => state.restore_main_view(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true
        }
        KeyCode::Char('q') => state.should_quit = true,
        _ => {}
    }
}

pub fn handle_mouse_event(mouse: MouseEvent, state: &mut AppState) -> Result<()> {
    handle_mouse_event_at(mouse, state, Instant::now())
}

/// Mouse handling against an explicit clock, so double-clicks can be
/// driven from tests.
pub fn handle_mouse_event_at(mouse: MouseEvent, state: &mut AppState, now: Instant) -> Result<()> {
    if state.show_help {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            state.show_help = false;
        }
        return Ok(());
    }

    let mode = state.mode();
    if mode.is_modal() {
        return Ok(());
    }
    match mode {
        Mode::Companion => handle_companion_mouse(mouse, state, now),
        Mode::ContextMenu => handle_context_menu_mouse(mouse, state),
        _ => handle_main_mouse(mouse, state, now),
    }
    Ok(())
}

fn handle_main_mouse(mouse: MouseEvent, state: &mut AppState, now: Instant) {
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(action) = state.toolbar.action_at(column, row) {
                state.table_clicks.reset();
                run_toolbar_action(action, state);
                return;
            }

            let Some(cell) = state.table.row_at(column, row) else {
                state.table_clicks.reset();
                return;
            };
            if state.table_clicks.press(cell, now) {
                state.double_click_cell(Some(cell));
            } else {
                state.press_cell(cell.0, cell.1);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if !state.drag.is_idle() {
                let hit = state.table.row_at(column, row);
                state.drag_over(hit);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            state.release_drag();
        }
        MouseEventKind::Down(MouseButton::Right) => {
            if let Some((row_index, _)) = state.table.row_at(column, row)
                && state.plan_list.row(row_index).is_some()
            {
                state.open_context_menu(column, row, row_index);
            }
        }
        MouseEventKind::ScrollUp => state.move_selection_up(),
        MouseEventKind::ScrollDown => state.move_selection_down(),
        _ => {}
    }
}

fn run_toolbar_action(action: ToolbarAction, state: &mut AppState) {
    match action {
        ToolbarAction::Add => state.open_add_prompt(),
        ToolbarAction::Edit => state.open_edit_prompt(),
        ToolbarAction::Float => state.enter_companion_mode(),
    }
}

fn handle_context_menu_mouse(mouse: MouseEvent, state: &mut AppState) {
    let Some(menu) = state.context_menu else {
        return;
    };
    let screen = state.screen();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match menu.item_at(mouse.column, mouse.row, screen) {
                Some(item) => state.activate_menu_item(item),
                None if menu.contains(mouse.column, mouse.row, screen) => {}
                None => state.close_context_menu(),
            }
        }
        MouseEventKind::Down(_) => state.close_context_menu(),
        MouseEventKind::Moved => {
            if let Some(item) = menu.item_at(mouse.column, mouse.row, screen)
                && let Some(open) = state.context_menu.as_mut()
            {
                open.highlighted = MenuItem::ALL
                    .iter()
                    .position(|i| *i == item)
                    .unwrap_or(0);
            }
        }
        _ => {}
    }
}

fn handle_companion_mouse(mouse: MouseEvent, state: &mut AppState, now: Instant) {
    let screen = state.screen();
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !state.companion.contains(column, row, screen) {
                state.companion_clicks.reset();
                return;
            }
            if state.companion_clicks.press((), now) {
                state.companion.end_drag();
                state.restore_main_view();
            } else {
                state.companion.begin_drag(column, row, screen);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => state.companion.drag_to(column, row, screen),
        MouseEventKind::Up(MouseButton::Left) => state.companion.end_drag(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::layout::Column;
    use crate::app::state::tests::{Fixture, fixture};
    use crate::plan::PlanEntry;
    use crate::ui::components::render;
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};
    use std::path::PathBuf;
    use std::time::Duration;

    fn draw(state: &mut AppState) {
        let mut terminal = Terminal::new(TestBackend::new(70, 16)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn alt(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key_event(key(KeyCode::Char(c)), state).unwrap();
        }
    }

    fn mouse(kind: MouseEventKind, (column, row): (u16, u16)) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn send(state: &mut AppState, kind: MouseEventKind, at: (u16, u16), now: Instant) {
        handle_mouse_event_at(mouse(kind, at), state, now).unwrap();
    }

    fn plan_cell(state: &AppState, row_index: usize) -> (u16, u16) {
        let cell = state.table.cell_rect(row_index, Column::Plan).unwrap();
        (cell.x + 1, cell.y)
    }

    fn texts(fx: &Fixture) -> Vec<String> {
        fx.state
            .plan_list
            .entries()
            .iter()
            .map(|e| e.text.clone())
            .collect()
    }

    fn abc() -> Vec<PlanEntry> {
        ["A", "B", "C"].into_iter().map(PlanEntry::new).collect()
    }

    #[test]
    fn test_add_through_keyboard() {
        let mut fx = fixture(vec![]);
        handle_key_event(alt('a'), &mut fx.state).unwrap();
        assert_eq!(fx.state.mode(), Mode::Prompt);
        type_text(&mut fx.state, "Call Bob");
        handle_key_event(key(KeyCode::Enter), &mut fx.state).unwrap();

        assert_eq!(texts(&fx), vec!["Call Bob"]);
        assert_eq!(fx.plans_on_disk().unwrap(), r#"[["Call Bob",""]]"#);
    }

    #[test]
    fn test_prompt_escape_discards_input() {
        let mut fx = fixture(vec![]);
        handle_key_event(alt('a'), &mut fx.state).unwrap();
        type_text(&mut fx.state, "Nope");
        handle_key_event(key(KeyCode::Esc), &mut fx.state).unwrap();
        assert!(fx.state.plan_list.is_empty());
        assert_eq!(fx.state.mode(), Mode::Navigate);
    }

    #[test]
    fn test_q_inside_prompt_is_text() {
        let mut fx = fixture(vec![]);
        handle_key_event(alt('a'), &mut fx.state).unwrap();
        type_text(&mut fx.state, "quit smoking");
        assert!(!fx.state.should_quit);
        handle_key_event(key(KeyCode::Enter), &mut fx.state).unwrap();
        assert_eq!(texts(&fx), vec!["quit smoking"]);
    }

    #[test]
    fn test_clear_all_confirmation_keys() {
        let mut fx = fixture(abc());
        handle_key_event(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            &mut fx.state,
        )
        .unwrap();
        assert_eq!(fx.state.mode(), Mode::ConfirmClear);
        handle_key_event(key(KeyCode::Char('n')), &mut fx.state).unwrap();
        assert_eq!(fx.state.plan_list.len(), 3);

        handle_key_event(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            &mut fx.state,
        )
        .unwrap();
        handle_key_event(key(KeyCode::Char('y')), &mut fx.state).unwrap();
        assert!(fx.state.plan_list.is_empty());
    }

    #[test]
    fn test_drag_with_mouse_reorders() {
        let mut fx = fixture(abc());
        draw(&mut fx.state);

        let a = plan_cell(&fx.state, 0);
        let b = plan_cell(&fx.state, 1);
        let c = plan_cell(&fx.state, 2);
        let now = Instant::now();
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Left), a, now);
        send(&mut fx.state, MouseEventKind::Drag(MouseButton::Left), b, now);
        send(&mut fx.state, MouseEventKind::Drag(MouseButton::Left), c, now);
        send(&mut fx.state, MouseEventKind::Up(MouseButton::Left), c, now);

        assert_eq!(texts(&fx), vec!["B", "A", "C"]);
        assert_eq!(fx.plans_on_disk().unwrap(), r#"[["B",""],["A",""],["C",""]]"#);
    }

    #[test]
    fn test_click_after_drop_is_not_a_double_click() {
        let mut fx = fixture(abc());
        draw(&mut fx.state);

        let a = plan_cell(&fx.state, 0);
        let c = plan_cell(&fx.state, 2);
        let now = Instant::now();
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Left), a, now);
        send(&mut fx.state, MouseEventKind::Drag(MouseButton::Left), c, now);
        send(&mut fx.state, MouseEventKind::Up(MouseButton::Left), c, now);
        assert_eq!(texts(&fx), vec!["B", "A", "C"]);

        // Same cell as the drag's press, now holding "B"
        let later = now + Duration::from_millis(200);
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Left), a, later);
        send(&mut fx.state, MouseEventKind::Up(MouseButton::Left), a, later);

        assert_eq!(fx.state.mode(), Mode::Navigate);
        assert!(fx.state.inline_edit.is_none());
        assert_eq!(fx.state.selected, Some(0));
    }

    #[test]
    fn test_drag_to_anchor_row_moves_to_end() {
        let mut fx = fixture(abc());
        draw(&mut fx.state);

        let a = plan_cell(&fx.state, 0);
        let anchor = plan_cell(&fx.state, 3);
        let now = Instant::now();
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Left), a, now);
        send(&mut fx.state, MouseEventKind::Drag(MouseButton::Left), anchor, now);
        send(&mut fx.state, MouseEventKind::Up(MouseButton::Left), anchor, now);

        assert_eq!(texts(&fx), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_double_click_edits_in_place() {
        let mut fx = fixture(abc());
        draw(&mut fx.state);

        let b = plan_cell(&fx.state, 1);
        let now = Instant::now();
        for offset in [0, 100] {
            let at = now + Duration::from_millis(offset);
            send(&mut fx.state, MouseEventKind::Down(MouseButton::Left), b, at);
            send(&mut fx.state, MouseEventKind::Up(MouseButton::Left), b, at);
        }
        assert_eq!(fx.state.mode(), Mode::Edit);

        type_text(&mut fx.state, "2");
        handle_key_event(key(KeyCode::Enter), &mut fx.state).unwrap();
        assert_eq!(texts(&fx), vec!["A", "B2", "C"]);
        assert_eq!(fx.state.mode(), Mode::Navigate);
    }

    #[test]
    fn test_slow_clicks_do_not_edit() {
        let mut fx = fixture(abc());
        draw(&mut fx.state);

        let b = plan_cell(&fx.state, 1);
        let now = Instant::now();
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Left), b, now);
        let later = now + Duration::from_secs(2);
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Left), b, later);
        assert_eq!(fx.state.mode(), Mode::Navigate);
        assert_eq!(fx.state.selected, Some(1));
    }

    #[test]
    fn test_right_click_menu_links_file() {
        let mut fx = fixture(abc());
        *fx.platform.next_pick.borrow_mut() = Some(PathBuf::from("/tmp/plan.md"));
        draw(&mut fx.state);

        let c = plan_cell(&fx.state, 2);
        let now = Instant::now();
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Right), c, now);
        assert_eq!(fx.state.mode(), Mode::ContextMenu);
        assert_eq!(fx.state.selected, Some(2));

        // Link file is the first item, one row below the menu border
        let area = fx.state.context_menu.unwrap().area(fx.state.screen());
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Left), (area.x + 2, area.y + 1), now);

        assert_eq!(fx.state.mode(), Mode::Navigate);
        assert_eq!(
            fx.state.plan_list.entries()[2].file_path(),
            Some(std::path::Path::new("/tmp/plan.md"))
        );
    }

    #[test]
    fn test_click_outside_menu_closes_it() {
        let mut fx = fixture(abc());
        draw(&mut fx.state);
        let a = plan_cell(&fx.state, 0);
        let now = Instant::now();
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Right), a, now);
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Left), (69, 0), now);
        assert!(fx.state.context_menu.is_none());
    }

    #[test]
    fn test_toolbar_float_and_companion_restore() {
        let mut fx = fixture(abc());
        draw(&mut fx.state);

        let (float_rect, _) = *fx
            .state
            .toolbar
            .buttons
            .iter()
            .find(|(_, action)| *action == ToolbarAction::Float)
            .unwrap();
        let now = Instant::now();
        let float = (float_rect.x, float_rect.y);
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Left), float, now);
        assert_eq!(fx.state.mode(), Mode::Companion);

        draw(&mut fx.state);
        let panel = fx.state.companion.area(fx.state.screen());
        let inside = (panel.x + 2, panel.y + 2);
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Left), inside, now);
        send(&mut fx.state, MouseEventKind::Up(MouseButton::Left), inside, now);
        assert_eq!(fx.state.mode(), Mode::Companion);
        let second = now + Duration::from_millis(150);
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Left), inside, second);
        assert_eq!(fx.state.mode(), Mode::Navigate);
    }

    #[test]
    fn test_companion_can_be_dragged() {
        let mut fx = fixture(abc());
        draw(&mut fx.state);
        handle_key_event(alt('f'), &mut fx.state).unwrap();

        let screen = fx.state.screen();
        let before = fx.state.companion.area(screen);
        let now = Instant::now();
        let grip = (before.x + 1, before.y + 1);
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Left), grip, now);
        send(&mut fx.state, MouseEventKind::Drag(MouseButton::Left), (1, 1), now);
        send(&mut fx.state, MouseEventKind::Up(MouseButton::Left), (1, 1), now);

        let after = fx.state.companion.area(screen);
        assert_eq!((after.x, after.y), (0, 0));
        assert_eq!(fx.state.mode(), Mode::Companion);
    }

    #[test]
    fn test_modal_ignores_mouse() {
        let mut fx = fixture(abc());
        draw(&mut fx.state);
        let a = plan_cell(&fx.state, 0);
        fx.state.request_clear_all();
        send(&mut fx.state, MouseEventKind::Down(MouseButton::Left), a, Instant::now());
        assert_eq!(fx.state.selected, None);
        assert_eq!(fx.state.mode(), Mode::ConfirmClear);
    }

    #[test]
    fn test_warning_dismissed_with_enter() {
        let mut fx = fixture(vec![PlanEntry::with_file("Gone", "/definitely/not/here.txt")]);
        fx.state.select(Some(0));
        handle_key_event(alt('o'), &mut fx.state).unwrap();
        assert_eq!(fx.state.mode(), Mode::Warning);
        handle_key_event(key(KeyCode::Enter), &mut fx.state).unwrap();
        assert_eq!(fx.state.mode(), Mode::Navigate);
    }
}
