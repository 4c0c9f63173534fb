pub mod components;
pub mod theme;

use crate::app::{
    AppState,
    event::{handle_key_event, handle_mouse_event},
};
use crate::storage::WindowGeometry;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetSize, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, warn};

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = disable_raw_mode();
        let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
        let _ = stdout.flush();
    }
}

/// Runs the interactive session until the user quits. The state stays
/// with the caller on every path, so the final save always happens.
pub fn run_tui(state: &mut AppState, restore_size: Option<WindowGeometry>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let _guard = TerminalGuard;

    if let Some(size) = restore_size {
        // Terminals that don't support resizing simply ignore this
        if let Err(e) = execute!(stdout, SetSize(size.width, size.height)) {
            warn!("Could not restore terminal size: {}", e);
        }
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, state);
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    loop {
        state.clear_expired_status_message();

        terminal.draw(|f| {
            components::render(f, state);
        })?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(key, state)?;
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, state)?,
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    state.on_resize(width, height);
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
