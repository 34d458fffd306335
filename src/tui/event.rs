//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomodoroError;
use crate::timer::{Action, Direction};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Quit the application.
    Quit,
    /// Apply a timer action.
    Timer(Action),
    /// Show key help.
    Help,
    /// Nothing bound to this key.
    Ignore,
}

/// Map a key press to a command.
#[must_use]
pub fn map_key(key: KeyEvent) -> Command {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,

        KeyCode::Char(' ' | 'p') => Command::Timer(Action::PlayPause),
        KeyCode::Char('s') => Command::Timer(Action::Stop),

        // Focus duration - vim style vertical
        KeyCode::Char('k') | KeyCode::Up => Command::Timer(Action::AdjustFocus(Direction::Increase)),
        KeyCode::Char('j') | KeyCode::Down => {
            Command::Timer(Action::AdjustFocus(Direction::Decrease))
        }

        // Break duration - vim style horizontal
        KeyCode::Char('l') | KeyCode::Right => {
            Command::Timer(Action::AdjustBreak(Direction::Increase))
        }
        KeyCode::Char('h') | KeyCode::Left => {
            Command::Timer(Action::AdjustBreak(Direction::Decrease))
        }

        KeyCode::Char('?') => Command::Help,

        _ => Command::Ignore,
    }
}

/// Wait up to `timeout` for a key press.
///
/// Returns the mapped command, or None if no key arrived.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn next_command(timeout: Duration) -> Result<Option<Command>, PomodoroError> {
    if !event::poll(timeout).map_err(|e| PomodoroError::terminal("Event poll failed", e))? {
        return Ok(None);
    }

    match event::read().map_err(|e| PomodoroError::terminal("Event read failed", e))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(map_key(key))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Command::Quit);
        assert_eq!(map_key(key(KeyCode::Esc)), Command::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Command::Quit
        );
    }

    #[test]
    fn test_timer_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char(' '))),
            Command::Timer(Action::PlayPause)
        );
        assert_eq!(map_key(key(KeyCode::Char('s'))), Command::Timer(Action::Stop));
        assert_eq!(
            map_key(key(KeyCode::Up)),
            Command::Timer(Action::AdjustFocus(Direction::Increase))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('h'))),
            Command::Timer(Action::AdjustBreak(Direction::Decrease))
        );
    }

    #[test]
    fn test_unbound_key_ignored() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), Command::Ignore);
        assert_eq!(map_key(key(KeyCode::Char('c'))), Command::Ignore);
    }

    #[test]
    fn test_help_key() {
        assert_eq!(map_key(key(KeyCode::Char('?'))), Command::Help);
    }
}
