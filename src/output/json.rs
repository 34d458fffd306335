//! JSON output formatting for pomodoro.

use serde_json::json;

use super::TransitionRecord;
use crate::config::Config;
use crate::error::PomodoroError;
use crate::timer::TimerView;

/// Format a simulation result as JSON
///
/// # Errors
///
/// Returns `PomodoroError::Json` if JSON serialization fails.
pub fn format_simulation_json(
    view: &TimerView,
    ticks: u32,
    transitions: &[TransitionRecord],
) -> Result<String, PomodoroError> {
    let output = json!({
        "ticks": ticks,
        "transitions": transitions,
        "state": view,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format configuration as JSON
///
/// # Errors
///
/// Returns `PomodoroError::Json` if JSON serialization fails.
pub fn format_config_json(config: &Config, path: &std::path::Path) -> Result<String, PomodoroError> {
    let output = json!({
        "path": path,
        "exists": path.exists(),
        "config": config,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
