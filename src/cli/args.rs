use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomodoro")]
#[command(about = "A focus/break interval timer for the terminal")]
#[command(long_about = "pomodoro - A focus/break interval timer

Alternates focus sessions and breaks until stopped, ringing the terminal
bell each time a countdown runs out. Durations can be adjusted while no
session is active.

QUICK START:
  pomodoro                       Open the interactive timer
  pomodoro run --focus 50        Start with 50-minute focus sessions
  pomodoro simulate --ticks 1501 Show the state after 1501 ticks
  pomodoro config show           Show the active configuration

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pomodoro <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(long, env = "POMODORO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether this invocation opens the terminal UI.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Run(_)))
    }

    /// Log level for the `-v` count.
    ///
    /// Capped at `warn` while the terminal UI owns the screen, since stderr
    /// output would be drawn over the frame.
    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        if self.is_interactive() {
            level.min(log::LevelFilter::Warn)
        } else {
            level
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// Keys:
    ///   space/p     play or pause
    ///   s           stop the current session
    ///   k/j         increase/decrease focus duration
    ///   l/h         increase/decrease break duration
    ///   q           quit
    #[command(alias = "r")]
    Run(RunArgs),

    /// Run the timer headlessly for a number of ticks
    ///
    /// Starts a focus session, delivers the ticks, and prints the final
    /// state. Useful for checking durations and transitions without waiting.
    ///
    /// # Examples
    ///
    ///   pomodoro simulate --ticks 1500
    ///   pomodoro simulate --focus 5 --break 1 --ticks 362
    ///   pomodoro simulate --ticks 60 --pause-after 30
    Simulate(SimulateArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: pomodoro completions bash > ~/.bash_completion.d/pomodoro
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Initial durations shared by `run` and `simulate`.
#[derive(Args, Debug, Clone, Default)]
pub struct DurationArgs {
    /// Focus duration in minutes (clamped to the configured bounds)
    #[arg(long, short = 'f')]
    pub focus: Option<u32>,

    /// Break duration in minutes (clamped to the configured bounds)
    #[arg(long = "break", short = 'b')]
    pub break_minutes: Option<u32>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub durations: DurationArgs,

    /// Do not play a cue when a session ends
    #[arg(long)]
    pub silent: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub durations: DurationArgs,

    /// Number of one-second ticks to deliver
    #[arg(long, short = 't')]
    pub ticks: u32,

    /// Pause after this many ticks; later ticks are ignored
    #[arg(long)]
    pub pause_after: Option<u32>,

    /// Stop the session after the last tick
    #[arg(long)]
    pub stop: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the active configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
