//! The timer state machine.
//!
//! All state changes go through [`TimerState::apply`], which takes an
//! [`Action`] and returns the [`Effect`]s the caller should carry out. The
//! machine itself performs no I/O.

use serde::{Deserialize, Serialize};

use super::durations::{Direction, Durations};
use super::session::{Session, SessionLabel};

/// Coarse state of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No session
    Idle,
    /// A focus session exists (running or paused)
    Focusing,
    /// A break session exists (running or paused)
    OnBreak,
}

impl From<Option<Session>> for Phase {
    fn from(session: Option<Session>) -> Self {
        match session.map(|s| s.label) {
            None => Self::Idle,
            Some(SessionLabel::Focusing) => Self::Focusing,
            Some(SessionLabel::OnBreak) => Self::OnBreak,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Focusing => write!(f, "Focusing"),
            Self::OnBreak => write!(f, "On Break"),
        }
    }
}

/// Something that can happen to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Toggle running; starts a focus session from idle.
    PlayPause,
    /// Clear the session and stop running.
    Stop,
    /// One second elapsed.
    Tick,
    /// Change the focus duration (idle only).
    AdjustFocus(Direction),
    /// Change the break duration (idle only).
    AdjustBreak(Direction),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A countdown ran out; play the audible cue.
    PlayCue(SessionLabel),
    /// The phase changed.
    SessionChanged {
        /// Phase before the action
        from: Phase,
        /// Phase after the action
        to: Phase,
    },
}

/// Complete timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Whether ticks are being delivered
    pub running: bool,
    /// Current session, `None` when idle
    pub session: Option<Session>,
    /// Configured durations
    pub durations: Durations,
}

impl TimerState {
    /// Create an idle, stopped timer.
    #[must_use]
    pub const fn new(durations: Durations) -> Self {
        Self {
            running: false,
            session: None,
            durations,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::from(self.session)
    }

    /// Whether durations may be changed.
    #[must_use]
    pub const fn can_adjust(&self) -> bool {
        self.session.is_none()
    }

    /// Whether a session exists but ticks are suspended.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.session.is_some() && !self.running
    }

    /// Apply an action and return the effects it produced.
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        let before = self.phase();
        let mut effects = Vec::new();

        match action {
            Action::PlayPause => self.play_pause(),
            Action::Stop => self.stop(),
            Action::Tick => {
                if let Some(label) = self.tick() {
                    effects.push(Effect::PlayCue(label));
                }
            }
            Action::AdjustFocus(direction) => {
                if self.can_adjust() {
                    self.durations.adjust_focus(direction);
                }
            }
            Action::AdjustBreak(direction) => {
                if self.can_adjust() {
                    self.durations.adjust_break(direction);
                }
            }
        }

        let after = self.phase();
        if before != after {
            effects.push(Effect::SessionChanged {
                from: before,
                to: after,
            });
        }
        effects
    }

    fn play_pause(&mut self) {
        self.running = !self.running;
        if self.running && self.session.is_none() {
            self.session = Some(Session::new(
                SessionLabel::Focusing,
                self.durations.focus_minutes,
            ));
        }
    }

    fn stop(&mut self) {
        self.session = None;
        self.running = false;
    }

    /// Advance the countdown. Returns the label that just ran out, if any.
    fn tick(&mut self) -> Option<SessionLabel> {
        if !self.running {
            return None;
        }
        let session = self.session?;

        if session.is_exhausted() {
            let next = session.label.opposite();
            let minutes = match next {
                SessionLabel::Focusing => self.durations.focus_minutes,
                SessionLabel::OnBreak => self.durations.break_minutes,
            };
            self.session = Some(Session::new(next, minutes));
            Some(session.label)
        } else {
            self.session = Some(session.ticked());
            None
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}
