use plan_tui::app::AppState;
use plan_tui::config::Config;
use plan_tui::platform::DesktopPlatform;
use plan_tui::storage::Storage;
use plan_tui::ui::{self, theme::Theme};
use plan_tui::utils::paths::{get_crash_log_path, get_logs_dir};

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::io::Write;
use std::panic;
use tracing::{info, warn};

/// Install a panic hook that appends crash details to the crash log
/// before handing over to the default hook.
fn install_crash_handler() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if let Ok(crash_log_path) = get_crash_log_path() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let mut crash_report = format!("=== CRASH at {} ===\n", timestamp);

            if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
                crash_report.push_str(&format!("Message: {}\n", message));
            } else if let Some(message) = panic_info.payload().downcast_ref::<String>() {
                crash_report.push_str(&format!("Message: {}\n", message));
            }

            if let Some(location) = panic_info.location() {
                crash_report.push_str(&format!(
                    "Location: {}:{}:{}\n",
                    location.file(),
                    location.line(),
                    location.column()
                ));
            }

            crash_report.push_str(&format!(
                "\nBacktrace:\n{}\n\n",
                std::backtrace::Backtrace::force_capture()
            ));

            if let Some(parent) = crash_log_path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(mut file) = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log_path)
            {
                let _ = file.write_all(crash_report.as_bytes());
                eprintln!("\nCrash logged to: {}", crash_log_path.display());
            }
        }

        default_hook(panic_info);
    }));
}

/// File logging only: the terminal belongs to the TUI. Level comes from
/// `RUST_LOG`, defaulting to `info`.
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = get_logs_dir().ok()?;

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "plantui.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(guard)
}

fn main() -> Result<()> {
    install_crash_handler();

    let config = Config::load()?;
    let _log_guard = init_file_logging();

    let data_dir = config.data_dir()?;
    info!(data_dir = %data_dir.display(), "Starting plantui");

    let storage = Storage::in_dir(&data_dir);
    let plan_list = storage.load_plans().with_context(|| {
        format!(
            "Could not load plans from {}",
            storage.plans_path().display()
        )
    })?;
    info!(count = plan_list.len(), "Loaded plans");

    let restore_size = if config.restore_window_size {
        storage.load_window_geometry().unwrap_or_else(|e| {
            warn!("Ignoring saved window size: {:#}", e);
            None
        })
    } else {
        None
    };

    let theme = Theme::from_config(&config);
    let mut state = AppState::new(
        plan_list,
        storage,
        theme,
        &config,
        Box::new(DesktopPlatform),
    );

    let outcome = ui::run_tui(&mut state, restore_size);
    state.finish_session(outcome)?;
    info!(count = state.plan_list.len(), "Saved plans on exit");

    Ok(())
}
