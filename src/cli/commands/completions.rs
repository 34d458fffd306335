//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::PomodoroError;

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, PomodoroError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pomodoro", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| PomodoroError::InvalidArgument(format!("Completion script is not UTF-8: {e}")))
}
