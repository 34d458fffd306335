//! Interactive timer command.

use crate::cli::args::RunArgs;
use crate::cli::commands::Context;
use crate::error::PomodoroError;
use crate::timer::{AudioCue, Pomodoro, Silent, Ticker};

/// Open the terminal UI and run until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn.
pub fn run(ctx: &Context, args: &RunArgs) -> Result<String, PomodoroError> {
    let sound = &ctx.config.sound;
    let cue: Box<dyn AudioCue> = if args.silent {
        Box::new(Silent)
    } else {
        sound.cue()
    };

    let timer = Pomodoro::new(ctx.durations(&args.durations), cue, sound.resource.clone());
    let ticker = Ticker::from_millis(ctx.config.timer.tick_millis);

    crate::tui::run(timer, ticker)?;
    Ok(String::new())
}
