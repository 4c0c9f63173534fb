use crate::utils::text_field::TextField;

/// An in-place edit of one entry's plan cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineEdit {
    pub entry: usize,
    pub field: TextField,
}

impl InlineEdit {
    pub fn new(entry: usize, current_text: &str) -> Self {
        Self {
            entry,
            field: TextField::with_text(current_text),
        }
    }
}
