//! Configuration settings for pomodoro.
//!
//! Settings are loaded from `~/.pomodoro/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::PomodoroError;
use crate::timer::{AudioCue, DurationBounds, Durations, Silent, TerminalBell};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer durations and tick rate.
    pub timer: TimerConfig,
    /// Audible cue settings.
    pub sound: SoundConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to `colored` output.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Initial focus duration in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Initial break duration in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Milliseconds between ticks.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    /// Allowed range for the focus duration.
    #[serde(default = "default_focus_bounds")]
    pub focus_bounds: DurationBounds,
    /// Allowed range for the break duration.
    #[serde(default = "default_break_bounds")]
    pub break_bounds: DurationBounds,
}

/// Audible cue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SoundConfig {
    /// Play a cue when a session ends.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Resource handed to the cue player.
    #[serde(default = "default_resource")]
    pub resource: String,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_focus_minutes() -> u32 {
    25
}

const fn default_break_minutes() -> u32 {
    5
}

const fn default_tick_millis() -> u64 {
    1000
}

const fn default_focus_bounds() -> DurationBounds {
    DurationBounds::FOCUS
}

const fn default_break_bounds() -> DurationBounds {
    DurationBounds::BREAK
}

const fn default_true() -> bool {
    true
}

fn default_resource() -> String {
    "https://bigsoundbank.com/UPLOAD/mp3/1482.mp3".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
            tick_millis: default_tick_millis(),
            focus_bounds: default_focus_bounds(),
            break_bounds: default_break_bounds(),
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            resource: default_resource(),
        }
    }
}

impl TimerConfig {
    /// Initial durations, clamped into their bounds.
    #[must_use]
    pub fn durations(&self) -> Durations {
        Durations::new(
            self.focus_minutes,
            self.break_minutes,
            self.focus_bounds,
            self.break_bounds,
        )
    }
}

impl SoundConfig {
    /// Build the cue player for these settings.
    #[must_use]
    pub fn cue(&self) -> Box<dyn AudioCue> {
        if self.enabled {
            Box::new(TerminalBell)
        } else {
            Box::new(Silent)
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// fails validation.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomodoroError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomodoroError> {
        let contents = serde_yaml::to_string(self)?;

        std::fs::write(path, contents).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Check the timer settings for unusable values.
    ///
    /// # Errors
    ///
    /// Returns `PomodoroError::Config` describing the first problem found.
    pub fn validate(&self) -> Result<(), PomodoroError> {
        self.timer.focus_bounds.validate("timer.focus_bounds")?;
        self.timer.break_bounds.validate("timer.break_bounds")?;
        if self.timer.tick_millis == 0 {
            return Err(PomodoroError::Config(
                "timer.tick_millis must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.timer.focus_minutes, 25);
        assert_eq!(config.timer.break_minutes, 5);
        assert_eq!(config.timer.tick_millis, 1000);
        assert_eq!(config.timer.focus_bounds, DurationBounds::FOCUS);
        assert_eq!(config.timer.break_bounds, DurationBounds::BREAK);
        assert!(config.sound.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.timer.focus_minutes = 30;
        config.sound.enabled = false;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.timer.focus_minutes, 30);
        assert!(!loaded.sound.enabled);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
timer:
  focus_minutes: 45
  break_bounds:
    min: 2
    max: 20
    step: 2
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.timer.focus_minutes, 45);
        assert_eq!(config.timer.break_bounds.max, 20);
        // Defaults should be used for missing fields
        assert_eq!(config.timer.break_minutes, 5);
        assert_eq!(config.timer.focus_bounds, DurationBounds::FOCUS);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml = r"
timer:
  focus_bounds:
    min: 30
    max: 10
    step: 5
";
        std::fs::write(&config_path, yaml).unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("timer.focus_bounds"));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let mut config = Config::default();
        config.timer.tick_millis = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer: [not, a, map").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, PomodoroError::Config(_)));
    }

    #[test]
    fn test_durations_clamped() {
        let timer = TimerConfig {
            focus_minutes: 3,
            break_minutes: 99,
            ..TimerConfig::default()
        };

        let durations = timer.durations();
        assert_eq!(durations.focus_minutes, 5);
        assert_eq!(durations.break_minutes, 15);
    }
}
