//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::timer::{Phase, TimerView};
use crate::tui::app::{App, HELP_TEXT};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let view = app.view();

    // Create layout: durations, controls, session, progress, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Durations
            Constraint::Length(1), // Controls
            Constraint::Length(4), // Session
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_durations(frame, &view, chunks[0]);
    render_controls(frame, &view, chunks[1]);
    render_session(frame, &view, chunks[2]);
    render_progress(frame, &view, chunks[3]);
    render_status_bar(frame, app, chunks[5]);
}

/// Accent color for the current phase.
const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Idle => Color::White,
        Phase::Focusing => Color::Green,
        Phase::OnBreak => Color::Yellow,
    }
}

/// Render the focus and break duration boxes.
fn render_durations(frame: &mut Frame<'_>, view: &TimerView, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Dim the controls while a session is active
    let style = if view.adjust_enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let focus = Paragraph::new(format!(" {}  [j -][k +]", view.focus_text))
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    let breaks = Paragraph::new(format!(" {}  [h -][l +]", view.break_text))
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));

    frame.render_widget(focus, columns[0]);
    frame.render_widget(breaks, columns[1]);
}

/// Render the play/pause and stop hints.
fn render_controls(frame: &mut Frame<'_>, view: &TimerView, area: Rect) {
    let play = if view.running { "[space] pause" } else { "[space] play" };
    let stop_style = if view.stop_enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {play}"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("[s] stop", stop_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the session title, remaining time, and paused marker.
fn render_session(frame: &mut Frame<'_>, view: &TimerView, area: Rect) {
    let Some(session) = &view.session else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            session.title.clone(),
            Style::default()
                .fg(phase_color(view.phase))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(session.subtitle.clone()),
    ];

    if view.paused {
        lines.push(Line::from(Span::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Render the progress gauge.
fn render_progress(frame: &mut Frame<'_>, view: &TimerView, area: Rect) {
    let Some(session) = &view.session else {
        return;
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(phase_color(view.phase)))
        .ratio((session.progress / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", session.progress));

    frame.render_widget(gauge, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP_TEXT);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
