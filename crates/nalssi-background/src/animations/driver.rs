//! The four background channels and their per-frame sample.

use std::time::Duration;

use super::channel::{AnimationChannel, RepeatMode};
use super::easing::Easing;

/// Lower bound of the pulse channel.
pub const PULSE_MIN: f32 = 0.96;
/// Upper bound of the pulse channel.
pub const PULSE_MAX: f32 = 1.06;

/// Owns the drift, pulse and particle phase channels of one background.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDriver {
    pub drift_a: AnimationChannel,
    pub drift_b: AnimationChannel,
    pub pulse: AnimationChannel,
    pub particle_phase: AnimationChannel,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver {
    /// Create the channel set with its fixed configuration.
    pub fn new() -> Self {
        Self {
            drift_a: AnimationChannel::new(22_000, Easing::Linear, RepeatMode::Reverse, 0.0, 1.0),
            drift_b: AnimationChannel::new(28_000, Easing::Linear, RepeatMode::Reverse, 0.0, 1.0),
            pulse: AnimationChannel::new(
                12_000,
                Easing::FastOutSlowIn,
                RepeatMode::Reverse,
                PULSE_MIN,
                PULSE_MAX,
            ),
            particle_phase: AnimationChannel::new(
                16_000,
                Easing::Linear,
                RepeatMode::Restart,
                0.0,
                1.0,
            ),
        }
    }

    /// Sample every channel at one instant.
    pub fn sample(&self, elapsed: Duration) -> ChannelSample {
        ChannelSample {
            drift_a: self.drift_a.value_at(elapsed),
            drift_b: self.drift_b.value_at(elapsed),
            pulse: self.pulse.value_at(elapsed),
            particle_phase: self.particle_phase.value_at(elapsed),
        }
    }
}

/// Channel values for one frame. Every layer of a frame reads the same sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSample {
    pub drift_a: f32,
    pub drift_b: f32,
    pub pulse: f32,
    pub particle_phase: f32,
}

impl Default for ChannelSample {
    fn default() -> Self {
        Self {
            drift_a: 0.0,
            drift_b: 0.0,
            pulse: PULSE_MIN,
            particle_phase: 0.0,
        }
    }
}

impl ChannelSample {
    /// Pulse normalized to a unit breathing signal.
    pub fn pulse01(&self) -> f32 {
        ((self.pulse - PULSE_MIN) / (PULSE_MAX - PULSE_MIN)).clamp(0.0, 1.0)
    }
}
