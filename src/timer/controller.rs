//! Ties the state machine to its collaborators.

use super::cue::AudioCue;
use super::display::TimerView;
use super::durations::Durations;
use super::machine::{Action, Effect, TimerState};

/// A timer plus the cue it plays when a countdown runs out.
pub struct Pomodoro {
    state: TimerState,
    cue: Box<dyn AudioCue>,
    cue_resource: String,
}

impl Pomodoro {
    /// Create an idle timer.
    pub fn new(durations: Durations, cue: Box<dyn AudioCue>, cue_resource: impl Into<String>) -> Self {
        Self {
            state: TimerState::new(durations),
            cue,
            cue_resource: cue_resource.into(),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &TimerState {
        &self.state
    }

    /// Derived view of the current state.
    #[must_use]
    pub fn view(&self) -> TimerView {
        TimerView::from_state(&self.state)
    }

    /// Apply an action and carry out its effects.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let effects = self.state.apply(action);

        for effect in &effects {
            match effect {
                Effect::PlayCue(label) => {
                    log::debug!("{label} session finished, playing cue");
                    self.cue.play(&self.cue_resource);
                }
                Effect::SessionChanged { from, to } => {
                    log::info!("Timer {from} -> {to}");
                }
            }
        }

        effects
    }

    /// Deliver `count` ticks, returning every effect they produced.
    pub fn tick_many(&mut self, count: u32) -> Vec<Effect> {
        (0..count).flat_map(|_| self.dispatch(Action::Tick)).collect()
    }
}

impl std::fmt::Debug for Pomodoro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pomodoro")
            .field("state", &self.state)
            .field("cue_resource", &self.cue_resource)
            .finish_non_exhaustive()
    }
}
