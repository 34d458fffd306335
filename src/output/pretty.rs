use chrono::Duration;
use colored::Colorize;

use super::TransitionRecord;
use crate::config::Config;
use crate::timer::{format_duration, render_progress_bar, Phase, TimerView};

/// Format a timer view as a short status block
pub fn format_view_pretty(view: &TimerView) -> String {
    let mut output = Vec::new();

    output.push(view.focus_text.clone());
    output.push(view.break_text.clone());
    output.push("─".repeat(40));

    match &view.session {
        Some(session) => {
            let title = match view.phase {
                Phase::OnBreak => session.title.yellow().bold(),
                _ => session.title.green().bold(),
            };
            output.push(title.to_string());
            output.push(session.subtitle.clone());
            output.push(format!(
                "{} {:.0}%",
                render_progress_bar(session.progress, 30),
                session.progress
            ));
            if view.paused {
                output.push("PAUSED".dimmed().to_string());
            }
        }
        None => output.push("No active session.".dimmed().to_string()),
    }

    output.join("\n")
}

/// Format a simulation result with its transitions
pub fn format_simulation_pretty(
    view: &TimerView,
    ticks: u32,
    transitions: &[TransitionRecord],
) -> String {
    let mut output = Vec::new();

    let elapsed = format_duration(Duration::seconds(i64::from(ticks)));
    output.push(format!("Simulated {ticks} ticks ({elapsed})").bold().to_string());

    for record in transitions {
        output.push(format!(
            "  tick {:>6}  {} -> {}",
            record.tick, record.from, record.to
        ));
    }

    output.push(String::new());
    output.push(format_view_pretty(view));
    output.join("\n")
}

/// Format configuration as a readable summary
pub fn format_config_pretty(config: &Config, path: &std::path::Path) -> String {
    let mut output = Vec::new();

    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };
    output.push(format!("Config: {source}").bold().to_string());
    output.push("─".repeat(40));

    let timer = &config.timer;
    output.push(format!(
        "Focus:  {} ({}-{} min, step {})",
        format_duration(Duration::minutes(i64::from(timer.focus_minutes))),
        timer.focus_bounds.min,
        timer.focus_bounds.max,
        timer.focus_bounds.step
    ));
    output.push(format!(
        "Break:  {} ({}-{} min, step {})",
        format_duration(Duration::minutes(i64::from(timer.break_minutes))),
        timer.break_bounds.min,
        timer.break_bounds.max,
        timer.break_bounds.step
    ));
    output.push(format!("Tick:   {} ms", timer.tick_millis));

    let sound = if config.sound.enabled {
        config.sound.resource.clone()
    } else {
        "off".dimmed().to_string()
    };
    output.push(format!("Sound:  {sound}"));

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{Action, TimerState};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_view_pretty_idle() {
        plain();
        let text = format_view_pretty(&TimerView::from(&TimerState::default()));
        assert!(text.contains("Focus Duration: 25:00"));
        assert!(text.contains("Break Duration: 05:00"));
        assert!(text.contains("No active session."));
    }

    #[test]
    fn test_view_pretty_paused() {
        plain();
        let mut state = TimerState::default();
        state.apply(Action::PlayPause);
        state.apply(Action::Tick);
        state.apply(Action::PlayPause);

        let text = format_view_pretty(&TimerView::from(&state));
        assert!(text.contains("Focusing for 25:00 minutes"));
        assert!(text.contains("24:59 remaining"));
        assert!(text.contains("PAUSED"));
    }

    #[test]
    fn test_simulation_pretty_lists_transitions() {
        plain();
        let view = TimerView::from(&TimerState::default());
        let transitions = vec![TransitionRecord {
            tick: 1501,
            from: Phase::Focusing,
            to: Phase::OnBreak,
        }];

        let text = format_simulation_pretty(&view, 1501, &transitions);
        assert!(text.contains("Simulated 1501 ticks"));
        assert!(text.contains("Focusing -> On Break"));
    }

    #[test]
    fn test_config_pretty() {
        plain();
        let text = format_config_pretty(&Config::default(), std::path::Path::new("/nonexistent/c.yaml"));
        assert!(text.contains("not found"));
        assert!(text.contains("Focus:  25 minutes (5-60 min, step 5)"));
        assert!(text.contains("Break:  5 minutes (1-15 min, step 1)"));
    }
}
