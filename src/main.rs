use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;

use pomodoro::cli::args::{Cli, Commands, RunArgs};
use pomodoro::cli::commands::{self, Context};
use pomodoro::config::{Config, Paths};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(level: log::LevelFilter) {
    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let paths = Paths::resolve(cli.config).context("could not locate configuration")?;
    let config = Config::load_from_path(&paths.config_file)
        .with_context(|| format!("could not load {}", paths.config_file.display()))?;
    config.general.color.apply();

    let ctx = Context {
        format: cli.output.unwrap_or(config.general.default_output),
        config,
        paths,
    };

    let output = match cli.command {
        None => commands::run(&ctx, &RunArgs::default())?,
        Some(Commands::Run(args)) => commands::run(&ctx, &args)?,
        Some(Commands::Simulate(args)) => commands::simulate(&ctx, &args)?,
        Some(Commands::Config(args)) => commands::config(&ctx, &args.command)?,
        Some(Commands::Completions { shell }) => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
