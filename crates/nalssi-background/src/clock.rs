//! Monotonic frame clock.

use std::time::{Duration, Instant};

/// Elapsed-time source for one attached background.
///
/// Started when the background attaches and dropped when it detaches.
/// Samples never go backwards.
#[derive(Debug, Clone)]
pub struct FrameClock {
    started: Instant,
    last: Duration,
}

impl FrameClock {
    /// Start a clock at the current instant.
    pub fn start() -> Self {
        Self::started_at(Instant::now())
    }

    /// Start a clock at a given instant.
    pub fn started_at(started: Instant) -> Self {
        Self {
            started,
            last: Duration::ZERO,
        }
    }

    /// Elapsed time now. Call once per frame.
    pub fn sample(&mut self) -> Duration {
        self.sample_at(Instant::now())
    }

    /// Elapsed time at `now`, never less than the previous sample.
    pub fn sample_at(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.started);
        self.last = self.last.max(elapsed);
        self.last
    }

    /// The most recent sample.
    pub fn last(&self) -> Duration {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_tracks_wall_clock() {
        let start = Instant::now();
        let mut clock = FrameClock::started_at(start);
        assert_eq!(clock.sample_at(start), Duration::ZERO);
        assert_eq!(
            clock.sample_at(start + Duration::from_millis(250)),
            Duration::from_millis(250)
        );
        assert_eq!(clock.last(), Duration::from_millis(250));
    }

    #[test]
    fn test_sample_never_goes_backwards() {
        let start = Instant::now();
        let mut clock = FrameClock::started_at(start + Duration::from_millis(10));
        assert_eq!(clock.sample_at(start), Duration::ZERO);
        clock.sample_at(start + Duration::from_millis(500));
        assert_eq!(
            clock.sample_at(start + Duration::from_millis(100)),
            Duration::from_millis(490)
        );
    }
}
