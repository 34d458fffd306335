//! Command implementations.
//!
//! Each command returns the text to print; `main` does the printing.

mod completions;
mod config;
mod run;
mod simulate;

pub use completions::completions;
pub use config::config;
pub use run::run;
pub use simulate::simulate;

use crate::cli::args::{DurationArgs, OutputFormat};
use crate::config::{Config, Paths};
use crate::timer::Durations;

/// Loaded configuration and resolved settings shared by all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Active configuration
    pub config: Config,
    /// Where the configuration came from
    pub paths: Paths,
    /// Output format after applying the config default
    pub format: OutputFormat,
}

impl Context {
    /// Initial durations: command-line values over config values, clamped.
    #[must_use]
    pub fn durations(&self, args: &DurationArgs) -> Durations {
        let configured = self.config.timer.durations();
        Durations::new(
            args.focus.unwrap_or(configured.focus_minutes),
            args.break_minutes.unwrap_or(configured.break_minutes),
            configured.focus_bounds,
            configured.break_bounds,
        )
    }
}
