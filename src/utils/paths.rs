use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

pub const PLANS_FILE_NAME: &str = "plans.json";
pub const WINDOW_SIZE_FILE_NAME: &str = "window_size.json";

pub fn get_plan_tui_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".plan-tui"))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_plan_tui_dir()?.join("config.toml"))
}

pub fn get_logs_dir() -> Result<PathBuf> {
    Ok(get_plan_tui_dir()?.join("logs"))
}

pub fn get_crash_log_path() -> Result<PathBuf> {
    Ok(get_plan_tui_dir()?.join("crash.log"))
}

pub fn get_plans_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PLANS_FILE_NAME)
}

pub fn get_window_size_path(data_dir: &Path) -> PathBuf {
    data_dir.join(WINDOW_SIZE_FILE_NAME)
}
