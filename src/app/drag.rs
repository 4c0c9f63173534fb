use crate::plan::RowRef;

/// Pointer-drag reordering of a single entry.
///
/// `Idle` until a press lands on an entry's plan cell, `Armed` while the
/// button is held without a target, `Dragging` once the pointer has been
/// over some other row. Release always returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Armed {
        source: usize,
    },
    Dragging {
        source: usize,
        target: RowRef,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn press(&mut self, source: usize) {
        *self = DragState::Armed { source };
    }

    /// Pointer moved with the button held. `hovered` is the row under the
    /// pointer, if any. The source row itself and empty space never
    /// replace a recorded target.
    pub fn motion(&mut self, hovered: Option<RowRef>) {
        let source = match *self {
            DragState::Idle => return,
            DragState::Armed { source } | DragState::Dragging { source, .. } => source,
        };

        match hovered {
            Some(RowRef::Entry(row)) if row == source => {}
            Some(target) => *self = DragState::Dragging { source, target },
            None => {}
        }
    }

    /// Button released. Yields `(source, target)` when a drop should happen.
    pub fn release(&mut self) -> Option<(usize, RowRef)> {
        let drop = match *self {
            DragState::Dragging { source, target } => Some((source, target)),
            _ => None,
        };
        *self = DragState::Idle;
        drop
    }

    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    /// Current drop target, for highlighting.
    pub fn target(&self) -> Option<RowRef> {
        match self {
            DragState::Dragging { target, .. } => Some(*target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_drag_cycle() {
        let mut drag = DragState::default();
        drag.press(0);
        assert_eq!(drag, DragState::Armed { source: 0 });

        drag.motion(Some(RowRef::Entry(2)));
        assert_eq!(
            drag,
            DragState::Dragging {
                source: 0,
                target: RowRef::Entry(2)
            }
        );

        assert_eq!(drag.release(), Some((0, RowRef::Entry(2))));
        assert!(drag.is_idle());
    }

    #[test]
    fn test_release_without_target_is_noop() {
        let mut drag = DragState::default();
        drag.press(1);
        drag.motion(Some(RowRef::Entry(1)));
        assert_eq!(drag, DragState::Armed { source: 1 });
        assert_eq!(drag.release(), None);
        assert!(drag.is_idle());
    }

    #[test]
    fn test_last_target_survives_hover_over_source_or_empty_space() {
        let mut drag = DragState::default();
        drag.press(1);
        drag.motion(Some(RowRef::Anchor));
        drag.motion(Some(RowRef::Entry(1)));
        drag.motion(None);
        assert_eq!(drag.target(), Some(RowRef::Anchor));
        assert_eq!(drag.release(), Some((1, RowRef::Anchor)));
    }

    #[test]
    fn test_motion_while_idle_does_nothing() {
        let mut drag = DragState::default();
        drag.motion(Some(RowRef::Entry(3)));
        assert!(drag.is_idle());
        assert_eq!(drag.release(), None);
    }
}
