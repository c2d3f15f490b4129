//! Weather code classification and the per-style parameter table.

use std::fmt;

/// Representative weather codes, one per visual style plus an unmapped code.
pub const SAMPLE_CODES: &[i32] = &[0, 2, 45, 61, 75, 95, 200];

/// Meteorological condition code as reported by the weather provider.
///
/// Any integer is accepted. Codes without a mapping fall back to
/// [`StyleCategory::Cloudy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeatherCode(pub i32);

impl WeatherCode {
    /// Style category this code is drawn with.
    pub fn style(self) -> StyleCategory {
        classify(self.0)
    }
}

impl From<i32> for WeatherCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse weather bucket driving every visual parameter of the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    Clear,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Thunder,
}

impl StyleCategory {
    /// All style categories.
    pub const ALL: [StyleCategory; 6] = [
        StyleCategory::Clear,
        StyleCategory::Cloudy,
        StyleCategory::Fog,
        StyleCategory::Rain,
        StyleCategory::Snow,
        StyleCategory::Thunder,
    ];

    /// Fixed visual parameters for this style.
    pub fn parameters(self) -> &'static StyleParameters {
        match self {
            StyleCategory::Clear => &CLEAR,
            StyleCategory::Cloudy => &CLOUDY,
            StyleCategory::Fog => &FOG,
            StyleCategory::Rain => &RAIN,
            StyleCategory::Snow => &SNOW,
            StyleCategory::Thunder => &THUNDER,
        }
    }

    /// Tonal intensity multiplier.
    pub fn intensity(self) -> f32 {
        self.parameters().intensity
    }

    /// Short display name.
    pub fn label(self) -> &'static str {
        match self {
            StyleCategory::Clear => "Clear",
            StyleCategory::Cloudy => "Cloudy",
            StyleCategory::Fog => "Fog",
            StyleCategory::Rain => "Rain",
            StyleCategory::Snow => "Snow",
            StyleCategory::Thunder => "Thunder",
        }
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a weather code to its style category.
///
/// Explicit code sets are matched before the rain ranges, and every code
/// without a mapping (negative ones included) resolves to `Cloudy`.
pub fn classify(code: i32) -> StyleCategory {
    match code {
        0 => StyleCategory::Clear,
        1..=3 => StyleCategory::Cloudy,
        45 | 48 => StyleCategory::Fog,
        71 | 73 | 75 | 77 | 85 | 86 => StyleCategory::Snow,
        95 | 96 | 99 => StyleCategory::Thunder,
        51..=67 | 80..=82 => StyleCategory::Rain,
        _ => StyleCategory::Cloudy,
    }
}

/// A linear attribute range sampled by a unit random value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Value at 0.
    pub base: f32,
    /// Added at 1.
    pub spread: f32,
}

impl ParamRange {
    const fn new(base: f32, spread: f32) -> Self {
        Self { base, spread }
    }

    /// Value for a unit sample `u` in `[0, 1]`.
    pub fn at(&self, u: f32) -> f32 {
        self.base + self.spread * u
    }

    /// Smallest value of the range.
    pub fn min(&self) -> f32 {
        self.base
    }

    /// Largest value of the range.
    pub fn max(&self) -> f32 {
        self.base + self.spread
    }
}

/// Visual parameters of one style category. Constant for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleParameters {
    /// Tonal intensity applied to count, size, speed and opacity.
    pub intensity: f32,
    /// Particle count before intensity scaling.
    pub particle_density_base: u32,
    /// Inclusive bounds for the scaled particle count.
    pub particle_count_clamp: (u32, u32),
    /// Fall speed in viewport heights per unit of particle phase.
    pub particle_speed: ParamRange,
    /// Dot radius in viewport pixels.
    pub particle_radius: ParamRange,
    /// Dot opacity.
    pub particle_alpha: ParamRange,
    /// Whether the diagonal rain streak layer is drawn.
    pub has_streaks: bool,
}

const DOT_ALPHA: ParamRange = ParamRange::new(0.10, 0.20);
const DOT_SPEED: ParamRange = ParamRange::new(0.03, 0.10);
const DOT_RADIUS: ParamRange = ParamRange::new(0.6, 1.2);

const STREAK_DENSITY_BASE: f32 = 34.0;
const STREAK_COUNT_CLAMP: (u32, u32) = (20, 60);

static CLEAR: StyleParameters = DOTS;

static CLOUDY: StyleParameters = StyleParameters {
    intensity: 0.95,
    ..DOTS
};

static FOG: StyleParameters = StyleParameters {
    intensity: 0.80,
    ..DOTS
};

static THUNDER: StyleParameters = StyleParameters {
    intensity: 1.20,
    ..DOTS
};

static RAIN: StyleParameters = StyleParameters {
    intensity: 1.10,
    particle_density_base: 110,
    particle_count_clamp: (80, 160),
    has_streaks: true,
    ..DOTS
};

static SNOW: StyleParameters = StyleParameters {
    intensity: 0.90,
    particle_density_base: 160,
    particle_count_clamp: (110, 220),
    particle_speed: ParamRange::new(0.10, 0.35),
    particle_radius: ParamRange::new(0.9, 1.8),
    ..DOTS
};

const DOTS: StyleParameters = StyleParameters {
    intensity: 1.00,
    particle_density_base: 120,
    particle_count_clamp: (80, 170),
    particle_speed: DOT_SPEED,
    particle_radius: DOT_RADIUS,
    particle_alpha: DOT_ALPHA,
    has_streaks: false,
};

impl StyleParameters {
    /// Number of dots drawn per frame.
    pub fn particle_count(&self) -> usize {
        let (min, max) = self.particle_count_clamp;
        scaled_count(self.particle_density_base as f32, self.intensity, min, max)
    }

    /// Number of rain streaks drawn per frame, zero for styles without streaks.
    pub fn streak_count(&self) -> usize {
        if !self.has_streaks {
            return 0;
        }
        let (min, max) = STREAK_COUNT_CLAMP;
        scaled_count(STREAK_DENSITY_BASE, self.intensity, min, max)
    }

    /// Streak stroke width in viewport pixels.
    pub fn streak_width(&self) -> f32 {
        (1.8 * self.intensity).max(1.2)
    }

    /// Streak opacity.
    pub fn streak_alpha(&self) -> f32 {
        0.06 * self.intensity
    }
}

fn scaled_count(base: f32, intensity: f32, min: u32, max: u32) -> usize {
    // Truncation toward zero, then clamp.
    ((base * intensity) as u32).clamp(min, max) as usize
}
