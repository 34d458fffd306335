//! Focus and break durations with their adjustment bounds.

use serde::{Deserialize, Serialize};

use super::session::SessionLabel;
use crate::error::PomodoroError;

/// Direction of a duration adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Add one step
    Increase,
    /// Remove one step
    Decrease,
}

/// Inclusive range and step for a duration, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBounds {
    /// Smallest allowed value
    pub min: u32,
    /// Largest allowed value
    pub max: u32,
    /// Amount one adjustment moves by
    pub step: u32,
}

impl DurationBounds {
    /// Default bounds for focus sessions: 5 to 60 minutes in steps of 5.
    pub const FOCUS: Self = Self {
        min: 5,
        max: 60,
        step: 5,
    };

    /// Default bounds for breaks: 1 to 15 minutes in steps of 1.
    pub const BREAK: Self = Self {
        min: 1,
        max: 15,
        step: 1,
    };

    /// Check that the bounds describe a usable, non-empty range.
    ///
    /// # Errors
    ///
    /// Returns `PomodoroError::Config` naming the offending field.
    pub fn validate(&self, name: &str) -> Result<(), PomodoroError> {
        if self.min == 0 {
            return Err(PomodoroError::Config(format!(
                "{name}.min must be at least 1 minute"
            )));
        }
        if self.step == 0 {
            return Err(PomodoroError::Config(format!(
                "{name}.step must be at least 1 minute"
            )));
        }
        if self.min > self.max {
            return Err(PomodoroError::Config(format!(
                "{name}.min ({}) is greater than {name}.max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Clamp a value into the range. `max` wins if the bounds are inverted.
    #[must_use]
    pub fn clamp(&self, minutes: u32) -> u32 {
        minutes.max(self.min).min(self.max)
    }

    /// The value one step away from `current` in `direction`.
    ///
    /// Already at the boundary means no change; otherwise the result is
    /// clamped so it never leaves the range.
    #[must_use]
    pub fn step_from(&self, current: u32, direction: Direction) -> u32 {
        match direction {
            Direction::Increase if current >= self.max => current,
            Direction::Decrease if current <= self.min => current,
            Direction::Increase => self.clamp(current.saturating_add(self.step)),
            Direction::Decrease => self.clamp(current.saturating_sub(self.step)),
        }
    }
}

/// Current focus and break durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    /// Focus duration in minutes
    pub focus_minutes: u32,
    /// Break duration in minutes
    pub break_minutes: u32,
    /// Bounds for `focus_minutes`
    pub focus_bounds: DurationBounds,
    /// Bounds for `break_minutes`
    pub break_bounds: DurationBounds,
}

impl Default for Durations {
    fn default() -> Self {
        Self::new(25, 5, DurationBounds::FOCUS, DurationBounds::BREAK)
    }
}

impl Durations {
    /// Create durations, clamping the initial values into their bounds.
    #[must_use]
    pub fn new(
        focus_minutes: u32,
        break_minutes: u32,
        focus_bounds: DurationBounds,
        break_bounds: DurationBounds,
    ) -> Self {
        Self {
            focus_minutes: focus_bounds.clamp(focus_minutes),
            break_minutes: break_bounds.clamp(break_minutes),
            focus_bounds,
            break_bounds,
        }
    }

    /// Move the focus duration one step.
    pub fn adjust_focus(&mut self, direction: Direction) {
        self.focus_minutes = self.focus_bounds.step_from(self.focus_minutes, direction);
    }

    /// Move the break duration one step.
    pub fn adjust_break(&mut self, direction: Direction) {
        self.break_minutes = self.break_bounds.step_from(self.break_minutes, direction);
    }

    /// Full countdown length for a label, in seconds.
    #[must_use]
    pub const fn total_seconds(&self, label: SessionLabel) -> u32 {
        let minutes = match label {
            SessionLabel::Focusing => self.focus_minutes,
            SessionLabel::OnBreak => self.break_minutes,
        };
        minutes.saturating_mul(60)
    }
}
