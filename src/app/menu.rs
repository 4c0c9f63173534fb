use ratatui::layout::{Position, Rect};

const MENU_WIDTH: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    LinkFile,
    OpenFile,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::LinkFile, MenuItem::OpenFile];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::LinkFile => "Link file",
            MenuItem::OpenFile => "Open file",
        }
    }
}

/// Row action menu posted at the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMenu {
    pub column: u16,
    pub row: u16,
    pub highlighted: usize,
}

impl ContextMenu {
    pub fn at(column: u16, row: u16) -> Self {
        Self {
            column,
            row,
            highlighted: 0,
        }
    }

    /// Menu box, shifted so it stays on screen.
    pub fn area(&self, screen: Rect) -> Rect {
        let width = MENU_WIDTH.min(screen.width);
        let height = (MenuItem::ALL.len() as u16 + 2).min(screen.height);
        let x = self.column.min(screen.right().saturating_sub(width));
        let y = self.row.min(screen.bottom().saturating_sub(height));
        Rect::new(x, y, width, height)
    }

    pub fn item_at(&self, column: u16, row: u16, screen: Rect) -> Option<MenuItem> {
        let area = self.area(screen);
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let index = row.checked_sub(area.y + 1)? as usize;
        MenuItem::ALL.get(index).copied()
    }

    pub fn contains(&self, column: u16, row: u16, screen: Rect) -> bool {
        self.area(screen).contains(Position::new(column, row))
    }

    pub fn highlighted_item(&self) -> MenuItem {
        MenuItem::ALL[self.highlighted.min(MenuItem::ALL.len() - 1)]
    }

    pub fn up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.highlighted = (self.highlighted + 1).min(MenuItem::ALL.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_clamped_to_screen() {
        let screen = Rect::new(0, 0, 40, 10);
        let menu = ContextMenu::at(35, 9);
        assert_eq!(menu.area(screen), Rect::new(24, 6, 16, 4));
    }

    #[test]
    fn test_item_at() {
        let screen = Rect::new(0, 0, 80, 24);
        let menu = ContextMenu::at(10, 5);
        assert_eq!(menu.item_at(12, 5, screen), None); // top border
        assert_eq!(menu.item_at(12, 6, screen), Some(MenuItem::LinkFile));
        assert_eq!(menu.item_at(12, 7, screen), Some(MenuItem::OpenFile));
        assert_eq!(menu.item_at(12, 8, screen), None); // bottom border
        assert_eq!(menu.item_at(40, 6, screen), None);
    }

    #[test]
    fn test_keyboard_highlight_stays_in_range() {
        let mut menu = ContextMenu::at(0, 0);
        menu.up();
        assert_eq!(menu.highlighted_item(), MenuItem::LinkFile);
        menu.down();
        menu.down();
        assert_eq!(menu.highlighted_item(), MenuItem::OpenFile);
    }
}
