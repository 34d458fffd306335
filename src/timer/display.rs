//! Display derivation for the timer.
//!
//! Everything here is a pure function of [`TimerState`]; renderers consume
//! [`TimerView`] and never look at the state directly.

use chrono::Duration;
use serde::Serialize;

use super::durations::Durations;
use super::machine::{Phase, TimerState};
use super::session::Session;

/// Format a number of seconds as `MM:SS`.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

/// Elapsed share of the session's full duration, from 0 to 100.
#[must_use]
pub fn progress_percent(session: &Session, durations: &Durations) -> f64 {
    let total = durations.total_seconds(session.label);
    if total == 0 {
        return 100.0;
    }
    let remaining = f64::from(session.remaining_seconds);
    let percent = (1.0 - remaining / f64::from(total)) * 100.0;
    percent.clamp(0.0, 100.0)
}

/// Heading for an active session, e.g. `Focusing for 25:00 minutes`.
#[must_use]
pub fn session_title(session: &Session, durations: &Durations) -> String {
    format!(
        "{} for {} minutes",
        session.label,
        format_mmss(durations.total_seconds(session.label))
    )
}

/// Sub-heading for an active session, e.g. `24:59 remaining`.
#[must_use]
pub fn session_subtitle(session: &Session) -> String {
    format!("{} remaining", format_mmss(session.remaining_seconds))
}

/// Label for the focus duration control.
#[must_use]
pub fn focus_duration_text(durations: &Durations) -> String {
    format!(
        "Focus Duration: {}",
        format_mmss(durations.focus_minutes.saturating_mul(60))
    )
}

/// Label for the break duration control.
#[must_use]
pub fn break_duration_text(durations: &Durations) -> String {
    format!(
        "Break Duration: {}",
        format_mmss(durations.break_minutes.saturating_mul(60))
    )
}

/// Render a text progress bar for a percentage.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Active-session part of the view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    /// Session the view describes
    #[serde(flatten)]
    pub session: Session,
    /// `<Label> for MM:SS minutes`
    pub title: String,
    /// `MM:SS remaining`
    pub subtitle: String,
    /// Remaining time as `MM:SS`
    pub remaining: String,
    /// Elapsed share, 0 to 100
    pub progress: f64,
}

/// Everything a renderer needs, derived from a [`TimerState`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerView {
    /// Coarse state
    pub phase: Phase,
    /// Whether the countdown is advancing
    pub running: bool,
    /// Session exists but is not advancing
    pub paused: bool,
    /// Duration controls are usable
    pub adjust_enabled: bool,
    /// Stop control is usable
    pub stop_enabled: bool,
    /// Focus duration in minutes
    pub focus_minutes: u32,
    /// Break duration in minutes
    pub break_minutes: u32,
    /// `Focus Duration: MM:SS`
    pub focus_text: String,
    /// `Break Duration: MM:SS`
    pub break_text: String,
    /// Present while a session exists
    pub session: Option<SessionView>,
}

impl TimerView {
    /// Derive the view for a state.
    #[must_use]
    pub fn from_state(state: &TimerState) -> Self {
        let durations = &state.durations;
        let session = state.session.map(|session| SessionView {
            title: session_title(&session, durations),
            subtitle: session_subtitle(&session),
            remaining: format_mmss(session.remaining_seconds),
            progress: progress_percent(&session, durations),
            session,
        });

        Self {
            phase: state.phase(),
            running: state.running,
            paused: state.is_paused(),
            adjust_enabled: state.can_adjust(),
            stop_enabled: state.session.is_some(),
            focus_minutes: durations.focus_minutes,
            break_minutes: durations.break_minutes,
            focus_text: focus_duration_text(durations),
            break_text: break_duration_text(durations),
            session,
        }
    }

    /// Progress of the active session, or zero when idle.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.session.as_ref().map_or(0.0, |s| s.progress)
    }
}

impl From<&TimerState> for TimerView {
    fn from(state: &TimerState) -> Self {
        Self::from_state(state)
    }
}
