use super::click::ClickTracker;
use super::companion::{CompanionState, MIRRORED_ENTRIES};
use super::drag::DragState;
use super::inline_edit::InlineEdit;
use super::layout::{Column, TableGeometry, ToolbarGeometry};
use super::menu::{ContextMenu, MenuItem};
use super::mode::Mode;
use super::prompt::{Prompt, PromptKind};
use crate::config::{Config, FilePickerKind};
use crate::plan::{PlanEntry, PlanList, RowRef};
use crate::platform::Platform;
use crate::storage::{Storage, WindowGeometry};
use crate::ui::theme::Theme;
use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

const STATUS_MESSAGE_SECS: u64 = 3;

pub struct AppState {
    pub plan_list: PlanList,
    /// Selected entry; never the anchor
    pub selected: Option<usize>,
    pub drag: DragState,
    pub inline_edit: Option<InlineEdit>,
    pub prompt: Option<Prompt>,
    pub confirm_clear: bool,
    pub warning: Option<String>,
    pub context_menu: Option<ContextMenu>,
    pub companion: CompanionState,
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: Theme,
    pub status_message: Option<(String, Instant)>,
    /// Table geometry from the last frame, for pointer hit-testing
    pub table: TableGeometry,
    pub toolbar: ToolbarGeometry,
    pub table_state: TableState,
    /// Terminal size, updated on each render
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub table_clicks: ClickTracker<(usize, Column)>,
    pub companion_clicks: ClickTracker<()>,
    file_picker: FilePickerKind,
    storage: Storage,
    platform: Box<dyn Platform>,
}

impl AppState {
    pub fn new(
        plan_list: PlanList,
        storage: Storage,
        theme: Theme,
        config: &Config,
        platform: Box<dyn Platform>,
    ) -> Self {
        let double_click = Duration::from_millis(config.double_click_ms);
        Self {
            plan_list,
            selected: None,
            drag: DragState::default(),
            inline_edit: None,
            prompt: None,
            confirm_clear: false,
            warning: None,
            context_menu: None,
            companion: CompanionState::default(),
            show_help: false,
            should_quit: false,
            theme,
            status_message: None,
            table: TableGeometry::default(),
            toolbar: ToolbarGeometry::default(),
            table_state: TableState::default(),
            terminal_width: 80,  // Default, updated on first render
            terminal_height: 24, // Default, updated on first render
            table_clicks: ClickTracker::new(double_click),
            companion_clicks: ClickTracker::new(double_click),
            file_picker: config.file_picker,
            storage,
            platform,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.companion.visible {
            Mode::Companion
        } else if self.warning.is_some() {
            Mode::Warning
        } else if self.prompt.is_some() {
            Mode::Prompt
        } else if self.confirm_clear {
            Mode::ConfirmClear
        } else if self.context_menu.is_some() {
            Mode::ContextMenu
        } else if self.inline_edit.is_some() {
            Mode::Edit
        } else {
            Mode::Navigate
        }
    }

    pub fn screen(&self) -> Rect {
        Rect::new(0, 0, self.terminal_width, self.terminal_height)
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Writes the whole list through to disk. Failures are reported, not
    /// propagated: the session keeps running with the in-memory list.
    fn persist(&mut self) {
        if let Err(e) = self.storage.save_plans(&self.plan_list) {
            error!("Failed to save plans: {:#}", e);
            self.set_status_message(format!("Save failed: {e}"));
        }
    }

    /// Final save on exit. A pending inline edit is dropped, not committed.
    pub fn save_on_shutdown(&mut self) -> Result<()> {
        if self.inline_edit.take().is_some() {
            debug!("Discarding pending inline edit on exit");
        }
        self.storage.save_plans(&self.plan_list)
    }

    /// Ends the session: saves whatever the loop left behind, even when it
    /// stopped on an error, then reports the loop's error first.
    pub fn finish_session(&mut self, outcome: Result<()>) -> Result<()> {
        let saved = self.save_on_shutdown();
        if let Err(e) = &saved {
            error!("Failed to save plans on exit: {:#}", e);
        }
        outcome?;
        saved
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        if let Err(e) = self
            .storage
            .save_window_geometry(WindowGeometry::new(width, height))
        {
            warn!("Failed to save window size: {:#}", e);
        }
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_status_message(&mut self) {
        if let Some((_, time)) = &self.status_message
            && time.elapsed().as_secs() > STATUS_MESSAGE_SECS
        {
            self.status_message = None;
        }
    }

    pub fn selected_entry(&self) -> Option<&PlanEntry> {
        self.selected.and_then(|i| self.plan_list.get(i))
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.plan_list.len());
        self.table_state.select(self.selected);
    }

    pub fn move_selection_up(&mut self) {
        match self.selected {
            Some(i) => self.select(Some(i.saturating_sub(1))),
            None if !self.plan_list.is_empty() => self.select(Some(self.plan_list.len() - 1)),
            None => {}
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.selected {
            Some(i) if i + 1 < self.plan_list.len() => self.select(Some(i + 1)),
            Some(_) => {}
            None if !self.plan_list.is_empty() => self.select(Some(0)),
            None => {}
        }
    }

    pub fn open_add_prompt(&mut self) {
        self.commit_inline_edit();
        self.prompt = Some(Prompt::new(PromptKind::Add, ""));
    }

    pub fn open_edit_prompt(&mut self) {
        self.commit_inline_edit();
        let Some(index) = self.selected else {
            return;
        };
        let Some(entry) = self.plan_list.get(index) else {
            return;
        };
        self.prompt = Some(Prompt::new(PromptKind::Edit { entry: index }, &entry.text));
    }

    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        let text = prompt.field.into_text();
        match prompt.kind {
            PromptKind::Add => {
                self.add_plan(&text);
            }
            PromptKind::Edit { entry } => {
                self.edit_plan(entry, &text);
            }
            PromptKind::LinkPath { entry } => {
                let path = text.trim();
                if !path.is_empty() {
                    self.attach_file(entry, PathBuf::from(path));
                }
            }
        }
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    /// Appends a new plan. Empty text is ignored and nothing is saved.
    pub fn add_plan(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let index = self.plan_list.push(PlanEntry::new(text));
        info!(index, "Added plan");
        self.select(Some(index));
        self.persist();
        true
    }

    /// Replaces a plan's text, keeping its linked file.
    pub fn edit_plan(&mut self, index: usize, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        if self.plan_list.set_text(index, text.to_string()).is_err() {
            return false;
        }
        debug!(index, "Edited plan");
        self.persist();
        true
    }

    pub fn delete_selected(&mut self) -> bool {
        self.commit_inline_edit();
        let Some(index) = self.selected else {
            return false;
        };
        if self.plan_list.remove(index).is_err() {
            return false;
        }
        info!(index, "Deleted plan");

        let next = if self.plan_list.is_empty() {
            None
        } else {
            Some(index.min(self.plan_list.len() - 1))
        };
        self.select(next);
        self.persist();
        true
    }

    pub fn request_clear_all(&mut self) {
        self.commit_inline_edit();
        self.confirm_clear = true;
    }

    pub fn answer_clear_all(&mut self, confirmed: bool) {
        self.confirm_clear = false;
        if !confirmed {
            return;
        }
        let count = self.plan_list.len();
        self.plan_list.clear();
        self.drag.cancel();
        self.select(None);
        info!(count, "Cleared all plans");
        self.persist();
    }

    /// Asks for a file to link to the selected plan, either through the
    /// platform dialog or through the path prompt.
    pub fn link_file(&mut self) {
        self.commit_inline_edit();
        let Some(index) = self.selected else {
            return;
        };

        match self.file_picker {
            FilePickerKind::Prompt => {
                let current = self
                    .plan_list
                    .get(index)
                    .map(|e| e.file_label())
                    .unwrap_or_default();
                self.prompt = Some(Prompt::new(PromptKind::LinkPath { entry: index }, &current));
            }
            FilePickerKind::Native => {
                if let Some(path) = self.platform.pick_file("Select file") {
                    self.attach_file(index, path);
                }
            }
        }
    }

    pub fn attach_file(&mut self, index: usize, path: PathBuf) -> bool {
        let path = std::path::absolute(&path).unwrap_or(path);
        if self.plan_list.set_file(index, path.clone()).is_err() {
            return false;
        }
        info!(index, path = %path.display(), "Linked file");
        self.persist();
        true
    }

    /// Opens the selected plan's file, or explains why it can't.
    pub fn open_selected_file(&mut self) {
        self.commit_inline_edit();
        let Some(entry) = self.selected_entry() else {
            return;
        };

        let path = match entry.file_path() {
            Some(path) if path.exists() => path.to_path_buf(),
            other => {
                let shown = other.map(|p| p.display().to_string()).unwrap_or_default();
                warn!(path = %shown, "Linked file does not exist");
                self.warning = Some(format!("File path does not exist: {shown}"));
                return;
            }
        };

        if let Err(e) = self.platform.open(&path) {
            warn!("Failed to open {}: {:#}", path.display(), e);
            self.warning = Some(format!("{e:#}"));
        }
    }

    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    /// Begins editing an entry's plan cell in place, committing any edit
    /// already in progress first.
    pub fn start_inline_edit(&mut self, index: usize) -> bool {
        self.commit_inline_edit();
        let Some(entry) = self.plan_list.get(index) else {
            return false;
        };
        self.inline_edit = Some(InlineEdit::new(index, &entry.text));
        self.drag.cancel();
        self.select(Some(index));
        true
    }

    pub fn commit_inline_edit(&mut self) {
        let Some(edit) = self.inline_edit.take() else {
            return;
        };
        let index = edit.entry;
        if self.plan_list.set_text(index, edit.field.into_text()).is_ok() {
            debug!(index, "Committed inline edit");
            self.persist();
        }
    }

    pub fn cancel_inline_edit(&mut self) {
        self.inline_edit = None;
    }

    /// Double-click inside the table. Only the plan cell of a real entry
    /// opens an editor, but any double-click commits a pending one.
    pub fn double_click_cell(&mut self, hit: Option<(usize, Column)>) {
        self.drag.cancel();
        self.commit_inline_edit();
        if let Some((row, Column::Plan)) = hit
            && let Some(RowRef::Entry(index)) = self.plan_list.row(row)
        {
            self.start_inline_edit(index);
        }
    }

    /// Single press on a table cell: selects, and arms a drag from the
    /// plan column unless an inline edit owns the table.
    pub fn press_cell(&mut self, row: usize, column: Column) {
        match self.plan_list.row(row) {
            Some(RowRef::Entry(index)) => {
                self.select(Some(index));
                if column == Column::Plan && self.inline_edit.is_none() {
                    self.drag.press(index);
                }
            }
            Some(RowRef::Anchor) => self.select(None),
            None => {}
        }
    }

    pub fn drag_over(&mut self, hit: Option<(usize, Column)>) {
        let hovered = hit.and_then(|(row, _)| self.plan_list.row(row));
        self.drag.motion(hovered);
    }

    /// Ends a drag, moving the entry if a target was recorded.
    pub fn release_drag(&mut self) -> bool {
        let Some((source, target)) = self.drag.release() else {
            return false;
        };
        // Rows may have shifted, so a press before the drag can't pair
        // with the next one
        self.table_clicks.reset();

        match self.plan_list.move_entry(source, target) {
            Ok(new_index) => {
                info!(from = source, to = new_index, "Moved plan");
                self.select(Some(new_index));
                self.persist();
                true
            }
            Err(e) => {
                warn!("Drop ignored: {:#}", e);
                false
            }
        }
    }

    /// Right-click on a table row. Real rows become the selection; the
    /// anchor leaves the selection as it was.
    pub fn open_context_menu(&mut self, column: u16, row: u16, row_index: usize) {
        self.commit_inline_edit();
        self.drag.cancel();
        if let Some(RowRef::Entry(index)) = self.plan_list.row(row_index) {
            self.select(Some(index));
        }
        self.context_menu = Some(ContextMenu::at(column, row));
    }

    /// Keyboard variant: posts the menu under the selected row.
    pub fn open_context_menu_for_selection(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        let (column, row) = self
            .table
            .cell_rect(index, Column::Plan)
            .map(|cell| (cell.x, cell.y + 1))
            .unwrap_or((0, 0));
        self.open_context_menu(column, row, index);
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu = None;
    }

    pub fn activate_menu_item(&mut self, item: MenuItem) {
        self.context_menu = None;
        match item {
            MenuItem::LinkFile => self.link_file(),
            MenuItem::OpenFile => self.open_selected_file(),
        }
    }

    /// Hides the main view behind the compact companion panel.
    pub fn enter_companion_mode(&mut self) {
        self.commit_inline_edit();
        self.drag.cancel();
        self.context_menu = None;
        let screen = self.screen();
        self.companion.show(screen);
        self.companion_clicks.reset();
        info!("Switched to floating companion view");
    }

    pub fn restore_main_view(&mut self) {
        self.companion.hide();
        self.companion_clicks.reset();
        self.table_clicks.reset();
        info!("Restored main view");
    }

    /// Text the companion panel mirrors: the first few entries.
    pub fn companion_lines(&self) -> Vec<&str> {
        self.plan_list.leading_texts(MIRRORED_ENTRIES)
    }
}
