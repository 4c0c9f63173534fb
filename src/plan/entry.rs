use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One plan: display text plus an optional linked file.
///
/// On disk an entry is a two-element array `[text, filePath]`, with an
/// empty string standing in for "no file".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct PlanEntry {
    pub text: String,
    pub file_path: Option<PathBuf>,
}

impl PlanEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            file_path: None,
        }
    }

    pub fn with_file(text: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            file_path: Some(file_path.into()),
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Text shown in the `File` column.
    pub fn file_label(&self) -> String {
        self.file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}

impl From<(String, String)> for PlanEntry {
    fn from((text, file_path): (String, String)) -> Self {
        Self {
            text,
            file_path: if file_path.is_empty() {
                None
            } else {
                Some(PathBuf::from(file_path))
            },
        }
    }
}

impl From<PlanEntry> for (String, String) {
    fn from(entry: PlanEntry) -> Self {
        let file_path = entry
            .file_path
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        (entry.text, file_path)
    }
}
