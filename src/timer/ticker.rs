//! Tick source for the timer.
//!
//! The ticker is polled from the UI loop. It only counts intervals while the
//! timer is running; pausing drops its anchor, so a resumed timer starts a
//! fresh interval instead of catching up on the paused time.

use std::time::{Duration, Instant};

/// Converts wall-clock time into whole ticks.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    anchor: Option<Instant>,
}

impl Ticker {
    /// Create a ticker firing every `interval`.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            anchor: None,
        }
    }

    /// Create a ticker from a millisecond interval.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Whether the ticker is currently counting.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.anchor.is_some()
    }

    /// Number of ticks that became due by `now`.
    ///
    /// While `running` is false the ticker is suspended and reports zero. The
    /// first call after (re)starting arms the ticker and also reports zero.
    pub fn due(&mut self, now: Instant, running: bool) -> u32 {
        if !running {
            self.anchor = None;
            return 0;
        }

        let Some(anchor) = self.anchor else {
            self.anchor = Some(now);
            return 0;
        };

        if self.interval.is_zero() {
            return 0;
        }

        let elapsed = now.saturating_duration_since(anchor);
        let ticks = elapsed.as_nanos() / self.interval.as_nanos();
        let ticks = u32::try_from(ticks).unwrap_or(u32::MAX);
        if ticks > 0 {
            self.anchor = Some(anchor + self.interval * ticks);
        }
        ticks
    }

    /// How long until the next tick is due, capped at `max`.
    ///
    /// Suspended tickers always return `max`.
    #[must_use]
    pub fn until_next(&self, now: Instant, max: Duration) -> Duration {
        self.anchor.map_or(max, |anchor| {
            let next = anchor + self.interval;
            next.saturating_duration_since(now).min(max)
        })
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_first_call_arms_without_ticking() {
        let mut ticker = Ticker::default();
        let start = Instant::now();

        assert_eq!(ticker.due(start, true), 0);
        assert!(ticker.is_armed());
    }

    #[test]
    fn test_counts_whole_intervals() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.due(start, true);

        assert_eq!(ticker.due(start + Duration::from_millis(999), true), 0);
        assert_eq!(ticker.due(start + SECOND, true), 1);
        assert_eq!(ticker.due(start + Duration::from_millis(3500), true), 2);
        // Remainder is kept for the next call.
        assert_eq!(ticker.due(start + Duration::from_millis(4000), true), 1);
    }

    #[test]
    fn test_suspended_while_not_running() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.due(start, true);

        assert_eq!(ticker.due(start + SECOND * 10, false), 0);
        assert!(!ticker.is_armed());

        // Resuming re-arms; paused time is not replayed.
        assert_eq!(ticker.due(start + SECOND * 20, true), 0);
        assert_eq!(ticker.due(start + SECOND * 21, true), 1);
    }

    #[test]
    fn test_until_next() {
        let mut ticker = Ticker::from_millis(1000);
        let start = Instant::now();
        let max = Duration::from_millis(250);

        assert_eq!(ticker.until_next(start, max), max);

        ticker.due(start, true);
        assert_eq!(
            ticker.until_next(start + Duration::from_millis(900), max),
            Duration::from_millis(100)
        );
        assert_eq!(ticker.until_next(start, max), max);
    }

    #[test]
    fn test_zero_interval_never_ticks() {
        let mut ticker = Ticker::new(Duration::ZERO);
        let start = Instant::now();
        ticker.due(start, true);
        assert_eq!(ticker.due(start + SECOND, true), 0);
    }
}
