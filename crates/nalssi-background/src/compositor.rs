//! Layered composition of one background frame.
//!
//! The compositor only describes what to draw, in viewport pixels. Turning a
//! [`Scene`] into pixels is the rasterizer's job.

use nalssi_core::{Palette, Point, Rgba, StyleCategory, Viewport};

use crate::animations::driver::ChannelSample;
use crate::animations::particles::{particles, streaks};

/// Alpha of the bottom stop of the gradient wash.
const WASH_BOTTOM_ALPHA: f32 = 0.35;
/// Alpha of the vignette edge.
const VIGNETTE_ALPHA: f32 = 0.45;
/// Vignette centre as fractions of width and height.
const VIGNETTE_CENTER: (f32, f32) = (0.55, 0.35);
/// Vignette radius as a fraction of the longest viewport side.
const VIGNETTE_RADIUS: f32 = 0.95;

/// A filled disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub center: Point,
    pub radius: f32,
    pub color: Rgba,
}

/// A straight line segment with round ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub start: Point,
    pub end: Point,
    pub width: f32,
    pub color: Rgba,
}

/// One full-viewport layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Opaque base colour.
    Fill(Rgba),
    /// Evenly spaced colour stops from top to bottom.
    VerticalGradient(Vec<Rgba>),
    /// Colour ramp from `inner` at `center` to `outer` at `radius`, clamped beyond.
    RadialGradient {
        center: Point,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    },
    /// Particle dots.
    Dots(Vec<Dot>),
    /// Rain streaks.
    Strokes(Vec<Stroke>),
}

impl Layer {
    /// Short layer name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Layer::Fill(_) => "fill",
            Layer::VerticalGradient(_) => "wash",
            Layer::RadialGradient { .. } => "vignette",
            Layer::Dots(_) => "dots",
            Layer::Strokes(_) => "streaks",
        }
    }
}

/// A composed frame: layers in paint order, bottom first.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub style: StyleCategory,
    /// The channel values the frame was composed with.
    pub sample: ChannelSample,
    pub layers: Vec<Layer>,
}

impl Scene {
    /// Whether the scene draws nothing.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of dots across all dot layers.
    pub fn dot_count(&self) -> usize {
        self.layers
            .iter()
            .map(|layer| match layer {
                Layer::Dots(dots) => dots.len(),
                _ => 0,
            })
            .sum()
    }

    /// Number of strokes across all stroke layers.
    pub fn stroke_count(&self) -> usize {
        self.layers
            .iter()
            .map(|layer| match layer {
                Layer::Strokes(strokes) => strokes.len(),
                _ => 0,
            })
            .sum()
    }
}

/// Compose the background for `style` at one sampled instant.
///
/// Drift and pulse are carried on the scene but do not move any layer; the
/// vignette is static. Empty viewports compose an empty scene.
pub fn compose(
    style: StyleCategory,
    viewport: Viewport,
    sample: &ChannelSample,
    palette: &Palette,
) -> Scene {
    let mut scene = Scene {
        viewport,
        style,
        sample: *sample,
        layers: Vec::new(),
    };
    if viewport.is_empty() {
        return scene;
    }

    scene.layers.push(Layer::Fill(palette.background));
    scene.layers.push(wash(palette));
    scene.layers.push(vignette(viewport, palette));

    let t = sample.particle_phase;
    let dot_color = palette.on_background;
    let dots = particles(style, t, viewport)
        .map(|p| Dot {
            center: p.center,
            radius: p.radius,
            color: dot_color.with_alpha(p.alpha),
        })
        .collect();
    scene.layers.push(Layer::Dots(dots));

    if style.parameters().has_streaks {
        let strokes = streaks(style, t, viewport)
            .map(|s| Stroke {
                start: s.start,
                end: s.end,
                width: s.width,
                color: dot_color.with_alpha(s.alpha),
            })
            .collect();
        scene.layers.push(Layer::Strokes(strokes));
    }

    scene
}

/// Vertical wash: surface, background, translucent surface variant.
fn wash(palette: &Palette) -> Layer {
    Layer::VerticalGradient(vec![
        palette.surface,
        palette.background,
        palette.surface_variant.with_alpha(WASH_BOTTOM_ALPHA),
    ])
}

/// Radial vignette darkening towards the edges.
fn vignette(viewport: Viewport, palette: &Palette) -> Layer {
    Layer::RadialGradient {
        center: Point::new(
            viewport.width * VIGNETTE_CENTER.0,
            viewport.height * VIGNETTE_CENTER.1,
        ),
        radius: viewport.longest_side() * VIGNETTE_RADIUS,
        inner: Rgba::TRANSPARENT,
        outer: palette.scrim.with_alpha(VIGNETTE_ALPHA),
    }
}
