//! pomodoro - A focus/break interval timer
//!
//! This crate provides the timer state machine, its display derivation, and
//! a terminal front end that drives it once per second.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomodoroError;
pub use timer::{Action, Pomodoro, TimerState, TimerView};
