//! Configuration command implementation.

use colored::Colorize;

use crate::cli::args::ConfigCommands;
use crate::cli::commands::Context;
use crate::config::Config;
use crate::error::PomodoroError;
use crate::output::format_config;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the file cannot be written or output formatting fails.
pub fn config(ctx: &Context, cmd: &ConfigCommands) -> Result<String, PomodoroError> {
    match cmd {
        ConfigCommands::Show => format_config(&ctx.config, &ctx.paths.config_file, ctx.format),
        ConfigCommands::Path => Ok(ctx.paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => init(ctx, *force),
    }
}

/// Write a default configuration file.
fn init(ctx: &Context, force: bool) -> Result<String, PomodoroError> {
    let path = &ctx.paths.config_file;

    if path.exists() && !force {
        return Err(PomodoroError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        )));
    }

    ctx.paths.ensure_dirs()?;
    Config::default().save_to_path(path)?;
    log::info!("Wrote default config to {}", path.display());

    Ok(format!("{} {}", "Wrote".green(), path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use crate::config::Paths;
    use tempfile::TempDir;

    fn context(root: &std::path::Path) -> Context {
        Context {
            config: Config::default(),
            paths: Paths::with_root(root.join(".pomodoro")),
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_path_prints_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(temp_dir.path());

        let out = config(&ctx, &ConfigCommands::Path).unwrap();
        assert!(out.ends_with("config.yaml"));
    }

    #[test]
    fn test_init_writes_loadable_file() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(temp_dir.path());

        config(&ctx, &ConfigCommands::Init { force: false }).unwrap();

        let loaded = Config::load_from_path(&ctx.paths.config_file).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(temp_dir.path());

        config(&ctx, &ConfigCommands::Init { force: false }).unwrap();
        assert!(config(&ctx, &ConfigCommands::Init { force: false }).is_err());
        assert!(config(&ctx, &ConfigCommands::Init { force: true }).is_ok());
    }

    #[test]
    fn test_show_json() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(temp_dir.path());

        let out = config(&ctx, &ConfigCommands::Show).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["config"]["sound"]["enabled"], true);
    }
}
