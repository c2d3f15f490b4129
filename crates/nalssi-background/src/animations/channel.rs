//! Looping, time-parameterized animation channels.

use std::time::Duration;

use super::easing::Easing;

/// How a channel behaves when it reaches the end of its period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMode {
    /// Ping-pong: progress runs 0 → 1 over the first half and back to 0.
    Reverse,
    /// Sawtooth: progress runs 0 → 1, then jumps back to 0.
    Restart,
}

/// One independently looping animated scalar.
///
/// The value is a pure function of elapsed time, so a channel never stores
/// its current value and frame rate does not change apparent speed.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationChannel {
    /// Length of one full loop.
    pub period: Duration,
    /// Curve applied to the normalized progress.
    pub easing: Easing,
    /// Loop behavior.
    pub repeat: RepeatMode,
    /// Value at progress 0.
    pub from: f32,
    /// Value at progress 1.
    pub to: f32,
}

impl AnimationChannel {
    /// Create a channel over `[from, to]`.
    pub fn new(
        period_ms: u64,
        easing: Easing,
        repeat: RepeatMode,
        from: f32,
        to: f32,
    ) -> Self {
        Self {
            period: Duration::from_millis(period_ms),
            easing,
            repeat,
            from,
            to,
        }
    }

    /// Normalized, un-eased progress in `[0, 1]` at `elapsed`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let period = self.period.as_nanos();
        if period == 0 {
            return 0.0;
        }
        // Integer modulo keeps long sessions free of float drift.
        let phase = (elapsed.as_nanos() % period) as f64 / period as f64;
        let progress = match self.repeat {
            RepeatMode::Restart => phase,
            RepeatMode::Reverse if phase <= 0.5 => phase * 2.0,
            RepeatMode::Reverse => (1.0 - phase) * 2.0,
        };
        progress as f32
    }

    /// Channel value at `elapsed`.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        let eased = self.easing.apply(self.progress(elapsed));
        self.from + (self.to - self.from) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_reverse_round_trip() {
        let ch = AnimationChannel::new(22_000, Easing::Linear, RepeatMode::Reverse, 0.0, 1.0);
        assert_eq!(ch.value_at(ms(0)), 0.0);
        assert_eq!(ch.value_at(ms(11_000)), 1.0);
        assert_eq!(ch.value_at(ms(22_000)), 0.0);
        assert_eq!(ch.value_at(ms(5_500)), 0.5);
        assert_eq!(ch.value_at(ms(16_500)), 0.5);
    }

    #[test]
    fn test_reverse_peaks_once_per_period() {
        let ch = AnimationChannel::new(28_000, Easing::Linear, RepeatMode::Reverse, 0.0, 1.0);
        let peaks = (0..28_000u64)
            .step_by(10)
            .filter(|&t| ch.value_at(ms(t)) == 1.0)
            .count();
        assert_eq!(peaks, 1);
        assert_eq!(ch.value_at(ms(14_000)), 1.0);
    }

    #[test]
    fn test_restart_saws() {
        let ch = AnimationChannel::new(16_000, Easing::Linear, RepeatMode::Restart, 0.0, 1.0);
        assert_eq!(ch.value_at(ms(0)), 0.0);
        assert_eq!(ch.value_at(ms(8_000)), 0.5);
        assert!(ch.value_at(ms(15_999)) > 0.99);
        assert_eq!(ch.value_at(ms(16_000)), 0.0);
        assert_eq!(ch.value_at(ms(24_000)), 0.5);
    }

    #[test]
    fn test_value_range_and_easing() {
        let ch = AnimationChannel::new(
            12_000,
            Easing::FastOutSlowIn,
            RepeatMode::Reverse,
            0.96,
            1.06,
        );
        assert_eq!(ch.value_at(ms(0)), 0.96);
        assert!((ch.value_at(ms(6_000)) - 1.06).abs() < 1e-6);
        for t in (0..24_000u64).step_by(250) {
            let v = ch.value_at(ms(t));
            assert!((0.96 - 1e-6..=1.06 + 1e-6).contains(&v), "{v} at {t}ms");
        }
    }

    #[test]
    fn test_periodic_over_long_sessions() {
        let ch = AnimationChannel::new(22_000, Easing::Linear, RepeatMode::Reverse, 0.0, 1.0);
        assert_eq!(ch.value_at(ms(7_000)), ch.value_at(ms(7_000 + 22_000 * 3)));
        let week = 7 * 24 * 3_600_000u64;
        let base = week - week % 22_000;
        assert_eq!(ch.value_at(ms(7_000)), ch.value_at(ms(base + 7_000)));
    }

    #[test]
    fn test_zero_period_is_static() {
        let ch = AnimationChannel::new(0, Easing::Linear, RepeatMode::Restart, 2.0, 3.0);
        assert_eq!(ch.value_at(ms(1234)), 2.0);
    }
}
