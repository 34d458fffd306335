//! Error types for pomodoro.
//!
//! The timer core itself never fails; these errors come from the layers around
//! it (configuration, terminal handling, output).

use thiserror::Error;

/// Errors that can occur outside the timer core.
#[derive(Error, Debug)]
pub enum PomodoroError {
    /// Configuration could not be read, parsed, or validated.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A command-line argument was out of range or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The terminal could not be set up, drawn to, or read from.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PomodoroError {
    /// Wrap a terminal backend failure with a short description of the step.
    pub fn terminal(step: &str, err: impl std::fmt::Display) -> Self {
        Self::Terminal(format!("{step}: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = PomodoroError::Config("bad bounds".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad bounds");
    }

    #[test]
    fn test_terminal_helper() {
        let err = PomodoroError::terminal("Failed to draw", "broken pipe");
        assert_eq!(err.to_string(), "Terminal error: Failed to draw: broken pipe");
    }

    #[test]
    fn test_json_error_from() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: PomodoroError = parse.unwrap_err().into();
        assert!(matches!(err, PomodoroError::Json(_)));
    }
}
