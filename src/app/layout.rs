//! Screen geometry recorded while drawing, used to map pointer positions
//! back to rows, cells and buttons.

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Plan,
    File,
}

/// Where the table's data rows and columns were last drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableGeometry {
    /// Area covered by data rows (header and borders excluded)
    pub rows: Rect,
    pub plan_column: Rect,
    pub file_column: Rect,
    /// Index of the first visible row
    pub offset: usize,
}

impl TableGeometry {
    /// Row index (anchor included, may exceed the row count when the
    /// pointer is over empty space) and column under a screen position.
    pub fn row_at(&self, column: u16, row: u16) -> Option<(usize, Column)> {
        if !self.rows.contains(Position::new(column, row)) {
            return None;
        }

        let row_index = self.offset + (row - self.rows.y) as usize;
        let hit_column = if column < self.file_column.x {
            Column::Plan
        } else {
            Column::File
        };
        Some((row_index, hit_column))
    }

    /// Screen rectangle of one cell, when that row is scrolled into view.
    pub fn cell_rect(&self, row_index: usize, column: Column) -> Option<Rect> {
        let visible = row_index.checked_sub(self.offset)?;
        if visible >= self.rows.height as usize {
            return None;
        }

        let col = match column {
            Column::Plan => self.plan_column,
            Column::File => self.file_column,
        };
        Some(Rect::new(col.x, self.rows.y + visible as u16, col.width, 1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Add,
    Edit,
    Float,
}

impl ToolbarAction {
    pub const ALL: [ToolbarAction; 3] = [
        ToolbarAction::Add,
        ToolbarAction::Edit,
        ToolbarAction::Float,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToolbarAction::Add => " Add (Alt+A) ",
            ToolbarAction::Edit => " Edit (Alt+E) ",
            ToolbarAction::Float => " Float (Alt+F) ",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolbarGeometry {
    pub buttons: Vec<(Rect, ToolbarAction)>,
}

impl ToolbarGeometry {
    pub fn action_at(&self, column: u16, row: u16) -> Option<ToolbarAction> {
        self.buttons
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(column, row)))
            .map(|(_, action)| *action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> TableGeometry {
        TableGeometry {
            rows: Rect::new(1, 2, 40, 5),
            plan_column: Rect::new(1, 2, 28, 5),
            file_column: Rect::new(30, 2, 11, 5),
            offset: 0,
        }
    }

    #[test]
    fn test_row_at_maps_columns() {
        let g = geometry();
        assert_eq!(g.row_at(1, 2), Some((0, Column::Plan)));
        assert_eq!(g.row_at(28, 4), Some((2, Column::Plan)));
        assert_eq!(g.row_at(30, 4), Some((2, Column::File)));
    }

    #[test]
    fn test_row_at_outside_rows() {
        let g = geometry();
        assert_eq!(g.row_at(5, 1), None);
        assert_eq!(g.row_at(5, 7), None);
        assert_eq!(g.row_at(0, 3), None);
    }

    #[test]
    fn test_row_at_accounts_for_scroll() {
        let g = TableGeometry {
            offset: 10,
            ..geometry()
        };
        assert_eq!(g.row_at(3, 3), Some((11, Column::Plan)));
    }

    #[test]
    fn test_cell_rect() {
        let g = TableGeometry {
            offset: 2,
            ..geometry()
        };
        assert_eq!(g.cell_rect(3, Column::Plan), Some(Rect::new(1, 3, 28, 1)));
        assert_eq!(g.cell_rect(1, Column::Plan), None);
        assert_eq!(g.cell_rect(7, Column::Plan), None);
    }

    #[test]
    fn test_toolbar_hit() {
        let toolbar = ToolbarGeometry {
            buttons: vec![
                (Rect::new(1, 10, 13, 1), ToolbarAction::Add),
                (Rect::new(16, 10, 14, 1), ToolbarAction::Edit),
            ],
        };
        assert_eq!(toolbar.action_at(5, 10), Some(ToolbarAction::Add));
        assert_eq!(toolbar.action_at(16, 10), Some(ToolbarAction::Edit));
        assert_eq!(toolbar.action_at(15, 10), None);
        assert_eq!(toolbar.action_at(5, 9), None);
    }
}
