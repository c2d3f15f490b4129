//! Deterministic particle field and rain streaks.
//!
//! Particles are never stored. Every attribute is recomputed from the
//! particle index, the current phase and the viewport, so a field can be
//! iterated any number of times per frame and always yields the same values.

use nalssi_core::{Point, StyleCategory, StyleParameters, Viewport};

/// Multiplier of the dot seed hash.
const DOT_SEED_MUL: i64 = 1_103_515_245;
/// Increment of the dot seed hash.
const DOT_SEED_ADD: i64 = 12_345;
/// Multiplier of the streak seed hash.
const STREAK_SEED_MUL: i64 = 1_664_525;
/// Increment of the streak seed hash.
const STREAK_SEED_ADD: i64 = 1_013_904_223;

/// Streak horizontal extent as a fraction of viewport width.
const STREAK_DX: f32 = 0.05;
/// Streak vertical extent as a fraction of viewport height.
const STREAK_DY: f32 = 0.11;

/// Seed for dot `index`.
pub fn dot_seed(index: usize) -> i64 {
    (index as i64)
        .wrapping_mul(DOT_SEED_MUL)
        .wrapping_add(DOT_SEED_ADD)
}

/// Seed for streak `index`.
pub fn streak_seed(index: usize) -> i64 {
    (index as i64)
        .wrapping_mul(STREAK_SEED_MUL)
        .wrapping_add(STREAK_SEED_ADD)
}

/// Byte of `seed` starting at bit `shift`, scaled to `[0, 1]`.
fn unit_byte(seed: i64, shift: u32) -> f32 {
    (((seed as u64) >> shift) & 0xFF) as f32 / 255.0
}

/// Unit values derived from one seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedSample {
    /// Horizontal position, bits 16..24.
    pub x01: f32,
    /// Initial vertical phase, bits 8..16.
    pub phase: f32,
    /// Size, speed and opacity selector, bits 24..32.
    pub s01: f32,
}

impl SeedSample {
    pub fn from_seed(seed: i64) -> Self {
        Self {
            x01: unit_byte(seed, 16),
            phase: unit_byte(seed, 8),
            s01: unit_byte(seed, 24),
        }
    }
}

/// Fractional part, always in `[0, 1]`.
fn wrap_unit(v: f32) -> f32 {
    let r = v % 1.0;
    if r < 0.0 { r + 1.0 } else { r }
}

/// Scale a wrapped unit value to `[0, extent)`.
fn wrap_position(unit: f32, extent: f32) -> f32 {
    let pos = wrap_unit(unit) * extent;
    // Rounding can land exactly on the far edge, which is the near edge again.
    if pos < extent { pos } else { 0.0 }
}

/// One dot of the particle field for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub index: usize,
    pub center: Point,
    pub radius: f32,
    /// Fall speed in viewport heights per unit of phase.
    pub speed: f32,
    pub alpha: f32,
}

/// Compute dot `index` of `style` at phase `t`.
pub fn particle_at(style: StyleCategory, index: usize, t: f32, viewport: Viewport) -> Particle {
    let params = style.parameters();
    let seed = SeedSample::from_seed(dot_seed(index));
    let intensity = params.intensity;

    let radius = params.particle_radius.at(seed.s01) * intensity;
    let speed = params.particle_speed.at(seed.s01) * intensity;
    let alpha = params.particle_alpha.at(seed.s01) * intensity;

    let x = viewport.width * seed.x01;
    let y = wrap_position(t * speed + seed.phase, viewport.height);

    Particle {
        index,
        center: Point::new(x, y),
        radius,
        speed,
        alpha,
    }
}

/// Lazy, restartable sequence of the dots of one frame.
///
/// Clone it to iterate again from the start.
#[derive(Debug, Clone)]
pub struct ParticleField {
    style: StyleCategory,
    t: f32,
    viewport: Viewport,
    next: usize,
    count: usize,
}

/// The particle field of `style` at phase `t`.
///
/// Empty viewports produce an empty field.
pub fn particles(style: StyleCategory, t: f32, viewport: Viewport) -> ParticleField {
    let count = if viewport.is_empty() {
        0
    } else {
        style.parameters().particle_count()
    };
    ParticleField {
        style,
        t,
        viewport,
        next: 0,
        count,
    }
}

impl Iterator for ParticleField {
    type Item = Particle;

    fn next(&mut self) -> Option<Particle> {
        if self.next >= self.count {
            return None;
        }
        let particle = particle_at(self.style, self.next, self.t, self.viewport);
        self.next += 1;
        Some(particle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ParticleField {}

/// One diagonal rain streak for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Streak {
    pub index: usize,
    pub start: Point,
    pub end: Point,
    pub width: f32,
    pub alpha: f32,
}

/// Compute streak `index` for `params` at phase `t`.
fn streak_at(params: &StyleParameters, index: usize, t: f32, viewport: Viewport) -> Streak {
    let seed = SeedSample::from_seed(streak_seed(index));
    let dx = viewport.width * STREAK_DX;
    let dy = viewport.height * STREAK_DY;

    let x = viewport.width * seed.x01;
    // Travels over height + dy so a streak fully leaves before wrapping.
    let y = wrap_unit(t + seed.phase) * (viewport.height + dy) - dy;

    Streak {
        index,
        start: Point::new(x, y),
        end: Point::new(x + dx, y + dy),
        width: params.streak_width(),
        alpha: params.streak_alpha(),
    }
}

/// Lazy, restartable sequence of the rain streaks of one frame.
#[derive(Debug, Clone)]
pub struct StreakField {
    params: &'static StyleParameters,
    t: f32,
    viewport: Viewport,
    next: usize,
    count: usize,
}

/// The streak layer of `style` at phase `t`. Empty unless the style has streaks.
pub fn streaks(style: StyleCategory, t: f32, viewport: Viewport) -> StreakField {
    let params = style.parameters();
    let count = if viewport.is_empty() {
        0
    } else {
        params.streak_count()
    };
    StreakField {
        params,
        t,
        viewport,
        next: 0,
        count,
    }
}

impl Iterator for StreakField {
    type Item = Streak;

    fn next(&mut self) -> Option<Streak> {
        if self.next >= self.count {
            return None;
        }
        let streak = streak_at(self.params, self.next, self.t, self.viewport);
        self.next += 1;
        Some(streak)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StreakField {}
