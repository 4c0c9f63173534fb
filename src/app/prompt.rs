use crate::utils::text_field::TextField;

/// What a submitted prompt does with its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Add,
    Edit { entry: usize },
    LinkPath { entry: usize },
}

impl PromptKind {
    pub fn title(&self) -> &'static str {
        match self {
            PromptKind::Add => " Add plan ",
            PromptKind::Edit { .. } => " Edit plan ",
            PromptKind::LinkPath { .. } => " Link file ",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::Add => "Enter your plan:",
            PromptKind::Edit { .. } => "Change your plan:",
            PromptKind::LinkPath { .. } => "Path of the file to link:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub field: TextField,
}

impl Prompt {
    pub fn new(kind: PromptKind, initial: &str) -> Self {
        Self {
            kind,
            field: TextField::with_text(initial),
        }
    }
}
