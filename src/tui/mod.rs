//! Terminal User Interface (TUI) for pomodoro.
//!
//! Draws the timer and maps key presses to timer actions.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::PomodoroError;
use crate::timer::{Pomodoro, Ticker};

/// Longest time the loop waits for input before redrawing.
const MAX_POLL: Duration = Duration::from_millis(100);

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(timer: Pomodoro, ticker: Ticker) -> Result<(), PomodoroError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| PomodoroError::terminal("Failed to enable raw mode", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomodoroError::terminal("Failed to setup terminal", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomodoroError::terminal("Failed to create terminal", e))?;

    // Create app state and run main loop
    let mut app = App::new(timer, ticker);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PomodoroError> {
    while !app.should_quit {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomodoroError::terminal("Failed to draw", e))?;

        // Wait for input, but never past the next tick
        let timeout = app.ticker().until_next(Instant::now(), MAX_POLL);
        match event::next_command(timeout)? {
            Some(event::Command::Quit) => app.should_quit = true,
            Some(event::Command::Timer(action)) => {
                app.clear_status();
                app.dispatch(action);
            }
            Some(event::Command::Help) => app.show_help(),
            Some(event::Command::Ignore) | None => {}
        }

        app.on_tick(Instant::now());
    }

    Ok(())
}
