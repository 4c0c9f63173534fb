use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::utils::paths::{get_config_path, get_plan_tui_dir};

/// How "Link file" asks the user for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilePickerKind {
    /// Desktop file dialog
    #[default]
    Native,
    /// Path typed into an in-terminal prompt
    Prompt,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Two clicks on the same cell within this window make a double-click
    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: u64,

    #[serde(default)]
    pub file_picker: FilePickerKind,

    /// Directory holding plans.json and window_size.json
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_restore_window_size")]
    pub restore_window_size: bool,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_double_click_ms() -> u64 {
    400
}

fn default_restore_window_size() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            double_click_ms: default_double_click_ms(),
            file_picker: FilePickerKind::default(),
            data_dir: None,
            restore_window_size: default_restore_window_size(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", config_path.display()))?;
        Ok(config)
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => get_plan_tui_dir(),
        }
    }
}
