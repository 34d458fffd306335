//! Audible cue played when a countdown runs out.
//!
//! Playback is fire-and-forget: implementations swallow their own failures.

use std::io::Write;

/// Something that can announce the end of a session.
#[cfg_attr(test, mockall::automock)]
pub trait AudioCue {
    /// Play the cue identified by `resource`.
    fn play(&self, resource: &str);
}

/// Rings the terminal bell.
///
/// The resource reference is only logged; a terminal has a single sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl AudioCue for TerminalBell {
    fn play(&self, resource: &str) {
        log::debug!("Ringing terminal bell for cue {resource}");
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            log::debug!("Terminal bell failed: {e}");
        }
    }
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioCue for Silent {
    fn play(&self, resource: &str) {
        log::trace!("Cue {resource} muted");
    }
}
