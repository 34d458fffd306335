//! Focus/break interval timer.
//!
//! The timer is a small state machine over three pieces of state: a running
//! flag, the current session, and the focus/break durations.
//! - [`TimerState::apply`] is the only way state changes
//! - [`Ticker`] turns wall-clock time into ticks while running
//! - [`TimerView`] derives everything a renderer shows
//! - [`AudioCue`] announces exhausted countdowns

pub mod controller;
pub mod cue;
pub mod display;
pub mod durations;
pub mod machine;
pub mod session;
pub mod ticker;

pub use controller::Pomodoro;
pub use cue::{AudioCue, Silent, TerminalBell};
pub use display::{format_duration, format_mmss, progress_percent, render_progress_bar, TimerView};
pub use durations::{Direction, DurationBounds, Durations};
pub use machine::{Action, Effect, Phase, TimerState};
pub use session::{Session, SessionLabel};
pub use ticker::Ticker;
