//! Headless simulation command.

use crate::cli::args::SimulateArgs;
use crate::cli::commands::Context;
use crate::error::PomodoroError;
use crate::output::{format_simulation, TransitionRecord};
use crate::timer::{Action, Effect, Pomodoro, Silent};

/// Start a session, deliver ticks, and report the final state.
///
/// The cue is muted; a headless run has nobody to hear it.
///
/// # Errors
///
/// Returns an error if `--pause-after` exceeds `--ticks` or if output
/// formatting fails.
pub fn simulate(ctx: &Context, args: &SimulateArgs) -> Result<String, PomodoroError> {
    if let Some(pause_after) = args.pause_after {
        if pause_after > args.ticks {
            return Err(PomodoroError::InvalidArgument(format!(
                "--pause-after ({pause_after}) is greater than --ticks ({})",
                args.ticks
            )));
        }
    }

    let mut timer = Pomodoro::new(
        ctx.durations(&args.durations),
        Box::new(Silent),
        ctx.config.sound.resource.clone(),
    );
    let mut transitions = Vec::new();

    record(&mut transitions, 0, &timer.dispatch(Action::PlayPause));

    for tick in 1..=args.ticks {
        let effects = timer.dispatch(Action::Tick);
        record(&mut transitions, tick, &effects);

        if args.pause_after == Some(tick) {
            timer.dispatch(Action::PlayPause);
        }
    }

    if args.stop {
        record(&mut transitions, args.ticks, &timer.dispatch(Action::Stop));
    }

    log::info!(
        "Simulated {} ticks with {} transitions",
        args.ticks,
        transitions.len()
    );
    format_simulation(&timer.view(), args.ticks, &transitions, ctx.format)
}

fn record(transitions: &mut Vec<TransitionRecord>, tick: u32, effects: &[Effect]) {
    transitions.extend(effects.iter().filter_map(|effect| match *effect {
        Effect::SessionChanged { from, to } => Some(TransitionRecord { tick, from, to }),
        Effect::PlayCue(_) => None,
    }));
}
