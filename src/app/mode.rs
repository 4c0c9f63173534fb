use std::fmt;

/// Which surface currently owns the keyboard. Derived from the app state,
/// see `AppState::mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Navigate,
    Edit,
    Prompt,
    ConfirmClear,
    Warning,
    ContextMenu,
    Companion,
}

impl Mode {
    /// Modes that swallow all pointer input until dismissed.
    pub fn is_modal(self) -> bool {
        matches!(self, Mode::Prompt | Mode::ConfirmClear | Mode::Warning)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Navigate => write!(f, "NAVIGATE"),
            Mode::Edit => write!(f, "EDIT"),
            Mode::Prompt => write!(f, "PROMPT"),
            Mode::ConfirmClear => write!(f, "CONFIRM"),
            Mode::Warning => write!(f, "WARNING"),
            Mode::ContextMenu => write!(f, "MENU"),
            Mode::Companion => write!(f, "FLOAT"),
        }
    }
}
