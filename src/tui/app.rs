//! Application state for the TUI.

use std::time::Instant;

use crate::timer::{Action, Effect, Phase, Pomodoro, Ticker, TimerView};

/// Default status bar text.
pub const HELP_TEXT: &str = "space:play/pause | s:stop | k/j:focus +/- | l/h:break +/- | q:quit";

/// Application state.
pub struct App {
    /// The timer being driven.
    timer: Pomodoro,
    /// Tick source, polled every loop iteration.
    ticker: Ticker,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(timer: Pomodoro, ticker: Ticker) -> Self {
        Self {
            timer,
            ticker,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Derived view of the timer.
    #[must_use]
    pub fn view(&self) -> TimerView {
        self.timer.view()
    }

    /// Tick source.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Apply a user action.
    pub fn dispatch(&mut self, action: Action) {
        let effects = self.timer.dispatch(action);
        self.announce(&effects);

        if let (Action::AdjustFocus(_) | Action::AdjustBreak(_), false) =
            (action, self.timer.state().can_adjust())
        {
            self.status = Some("Stop the session to change durations".to_string());
        }
    }

    /// Deliver any ticks that are due at `now`.
    ///
    /// Returns the number of ticks delivered.
    pub fn on_tick(&mut self, now: Instant) -> u32 {
        let running = self.timer.state().running;
        let due = self.ticker.due(now, running);
        if due > 0 {
            let effects = self.timer.tick_many(due);
            self.announce(&effects);
        }
        due
    }

    /// Show a help line in the status bar.
    pub fn show_help(&mut self) {
        self.status = Some(HELP_TEXT.to_string());
    }

    /// Clear the status message.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    fn announce(&mut self, effects: &[Effect]) {
        for effect in effects {
            if let Effect::SessionChanged { to, .. } = effect {
                self.status = Some(match to {
                    Phase::Idle => "Stopped".to_string(),
                    Phase::Focusing => "Time to focus".to_string(),
                    Phase::OnBreak => "Take a break".to_string(),
                });
            }
        }
    }
}
