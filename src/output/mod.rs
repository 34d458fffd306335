//! Output formatting for pomodoro.
//!
//! This module provides formatters for displaying timer state and
//! configuration in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomodoroError;
use crate::timer::TimerView;

pub use json::*;
pub use pretty::*;

/// A phase change seen while driving the timer headlessly.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TransitionRecord {
    /// Tick that caused the change, 0 for actions before the first tick
    pub tick: u32,
    /// Phase before
    pub from: crate::timer::Phase,
    /// Phase after
    pub to: crate::timer::Phase,
}

/// Format a simulation result based on output format
///
/// # Errors
///
/// Returns `PomodoroError::Json` if JSON serialization fails.
pub fn format_simulation(
    view: &TimerView,
    ticks: u32,
    transitions: &[TransitionRecord],
    format: OutputFormat,
) -> Result<String, PomodoroError> {
    match format {
        OutputFormat::Pretty => Ok(format_simulation_pretty(view, ticks, transitions)),
        OutputFormat::Json => format_simulation_json(view, ticks, transitions),
    }
}

/// Format configuration based on output format
///
/// # Errors
///
/// Returns `PomodoroError::Json` if JSON serialization fails.
pub fn format_config(
    config: &Config,
    path: &std::path::Path,
    format: OutputFormat,
) -> Result<String, PomodoroError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config, path)),
        OutputFormat::Json => format_config_json(config, path),
    }
}
