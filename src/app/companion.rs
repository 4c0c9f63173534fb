use ratatui::layout::{Position, Rect};

pub const COMPANION_WIDTH: u16 = 28;
pub const COMPANION_HEIGHT: u16 = 7;
/// How many entries the companion mirrors.
pub const MIRRORED_ENTRIES: usize = 3;

/// The compact panel shown while the main view is hidden. It can be
/// dragged around by its body: press records the pointer offset, motion
/// moves the panel, release ends the drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompanionState {
    pub visible: bool,
    position: Option<(u16, u16)>,
    drag_offset: Option<(u16, u16)>,
}

impl CompanionState {
    pub fn show(&mut self, screen: Rect) {
        if self.position.is_none() {
            // Right edge, a quarter of the way down
            let x = screen
                .width
                .saturating_sub(COMPANION_WIDTH)
                .saturating_sub(1);
            let y = screen.height / 4;
            self.position = Some((x, y));
        }
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.drag_offset = None;
    }

    pub fn area(&self, screen: Rect) -> Rect {
        let (x, y) = self.position.unwrap_or((0, 0));
        let width = COMPANION_WIDTH.min(screen.width);
        let height = COMPANION_HEIGHT.min(screen.height);
        Rect::new(
            x.min(screen.width.saturating_sub(width)),
            y.min(screen.height.saturating_sub(height)),
            width,
            height,
        )
    }

    pub fn contains(&self, column: u16, row: u16, screen: Rect) -> bool {
        self.area(screen).contains(Position::new(column, row))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    /// Starts a drag if the press is on the panel.
    pub fn begin_drag(&mut self, column: u16, row: u16, screen: Rect) -> bool {
        if !self.contains(column, row, screen) {
            return false;
        }
        let area = self.area(screen);
        self.drag_offset = Some((column - area.x, row - area.y));
        true
    }

    pub fn drag_to(&mut self, column: u16, row: u16, screen: Rect) {
        let Some((dx, dy)) = self.drag_offset else {
            return;
        };
        let x = column
            .saturating_sub(dx)
            .min(screen.width.saturating_sub(COMPANION_WIDTH));
        let y = row
            .saturating_sub(dy)
            .min(screen.height.saturating_sub(COMPANION_HEIGHT));
        self.position = Some((x, y));
    }

    pub fn end_drag(&mut self) {
        self.drag_offset = None;
    }
}
