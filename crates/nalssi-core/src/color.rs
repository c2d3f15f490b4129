//! Colour primitives and the theme palette.

use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    /// Create a colour from float components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a colour from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: ((argb >> 24) & 0xFF) as f32 / 255.0,
            r: ((argb >> 16) & 0xFF) as f32 / 255.0,
            g: ((argb >> 8) & 0xFF) as f32 / 255.0,
            b: (argb & 0xFF) as f32 / 255.0,
        }
    }

    /// Same colour with its alpha replaced.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Same colour with its alpha multiplied by `factor`.
    pub fn fade(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// Component-wise linear interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Composite this colour over an opaque destination colour.
    pub fn over(self, dst: Rgba) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        Rgba {
            r: self.r * a + dst.r * (1.0 - a),
            g: self.g * a + dst.g * (1.0 - a),
            b: self.b * a + dst.b * (1.0 - a),
            a: 1.0,
        }
    }

    /// Quantize to 8-bit RGB, dropping alpha.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}

/// Light or dark theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Palette for this theme.
    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Dark => Palette::dark(),
            ThemeMode::Light => Palette::light(),
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

/// Theme tones the background is painted with.
///
/// Passed to the compositor explicitly so rendering never reads ambient
/// theme state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Top tone of the gradient wash.
    pub surface: Rgba,
    /// Base fill and middle tone of the wash.
    pub background: Rgba,
    /// Bottom tone of the wash, drawn translucent.
    pub surface_variant: Rgba,
    /// Vignette edge tone.
    pub scrim: Rgba,
    /// Dot and streak tone.
    pub on_background: Rgba,
}

impl Palette {
    /// Deep navy night palette.
    pub const fn dark() -> Self {
        Self {
            surface: Rgba::from_argb(0xFF10_1A2E),
            background: Rgba::from_argb(0xFF0B_1220),
            surface_variant: Rgba::from_argb(0xFF18_2640),
            scrim: Rgba::from_argb(0xFF00_0000),
            on_background: Rgba::from_argb(0xFFEA_F0FF),
        }
    }

    /// Pale daylight palette.
    pub const fn light() -> Self {
        Self {
            surface: Rgba::from_argb(0xFFFF_FFFF),
            background: Rgba::from_argb(0xFFF6_F8FF),
            surface_variant: Rgba::from_argb(0xFFEA_F0FF),
            scrim: Rgba::from_argb(0xFF00_0000),
            on_background: Rgba::from_argb(0xFF0F_172A),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
