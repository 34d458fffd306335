//! Focus and break sessions.

use serde::{Deserialize, Serialize};

/// Label of a countdown session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionLabel {
    /// Work interval
    Focusing,
    /// Rest interval
    OnBreak,
}

impl SessionLabel {
    /// The label that follows this one when its countdown is exhausted.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Focusing => Self::OnBreak,
            Self::OnBreak => Self::Focusing,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focusing => "Focusing",
            Self::OnBreak => "On Break",
        }
    }
}

impl std::fmt::Display for SessionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An active countdown.
///
/// Sessions are values: ticking and transitioning produce a new `Session`
/// rather than mutating the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// What the interval is for
    pub label: SessionLabel,
    /// Seconds left in the countdown
    pub remaining_seconds: u32,
}

impl Session {
    /// Create a session with a full countdown of `minutes`.
    #[must_use]
    pub const fn new(label: SessionLabel, minutes: u32) -> Self {
        Self {
            label,
            remaining_seconds: minutes.saturating_mul(60),
        }
    }

    /// The session one second later. Never goes below zero.
    #[must_use]
    pub const fn ticked(self) -> Self {
        Self {
            label: self.label,
            remaining_seconds: self.remaining_seconds.saturating_sub(1),
        }
    }

    /// Whether the countdown has run out.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining_seconds == 0
    }
}
