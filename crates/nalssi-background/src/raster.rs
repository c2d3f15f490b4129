//! Software rasterizer for composed scenes.

use nalssi_core::{Point, Rgba};

use crate::compositor::{Dot, Layer, Scene, Stroke};

/// Opaque RGB pixel buffer, row major.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Create a black canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::new(0.0, 0.0, 0.0, 1.0); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resize, keeping the allocation when the size is unchanged.
    pub fn resize(&mut self, width: usize, height: usize) {
        if self.width != width || self.height != height {
            *self = Self::new(width, height);
        }
    }

    /// Pixel at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    fn blend(&mut self, x: usize, y: usize, color: Rgba, coverage: f32) {
        if coverage <= 0.0 {
            return;
        }
        let idx = y * self.width + x;
        self.pixels[idx] = color.fade(coverage.min(1.0)).over(self.pixels[idx]);
    }
}

/// Paint `scene` onto `canvas`, stretching the scene viewport over the canvas.
///
/// Empty scenes clear the canvas to black.
pub fn rasterize(scene: &Scene, canvas: &mut Canvas) {
    canvas.clear(Rgba::new(0.0, 0.0, 0.0, 1.0));
    if scene.is_empty() || scene.viewport.is_empty() || canvas.width == 0 || canvas.height == 0 {
        return;
    }

    let mapping = Mapping {
        sx: canvas.width as f32 / scene.viewport.width,
        sy: canvas.height as f32 / scene.viewport.height,
    };

    for layer in &scene.layers {
        match layer {
            Layer::Fill(color) => canvas.clear(color.with_alpha(1.0)),
            Layer::VerticalGradient(stops) => paint_vertical(canvas, stops),
            Layer::RadialGradient {
                center,
                radius,
                inner,
                outer,
            } => paint_radial(canvas, &mapping, *center, *radius, *inner, *outer),
            Layer::Dots(dots) => {
                for dot in dots {
                    paint_dot(canvas, &mapping, dot);
                }
            }
            Layer::Strokes(strokes) => {
                for stroke in strokes {
                    paint_stroke(canvas, &mapping, stroke);
                }
            }
        }
    }
}

/// Viewport to canvas scale factors.
struct Mapping {
    sx: f32,
    sy: f32,
}

impl Mapping {
    fn to_canvas(&self, p: Point) -> Point {
        Point::new(p.x * self.sx, p.y * self.sy)
    }

    fn to_viewport(&self, p: Point) -> Point {
        Point::new(p.x / self.sx, p.y / self.sy)
    }

    /// Isotropic length scale for radii and stroke widths.
    fn length(&self, len: f32) -> f32 {
        len * (self.sx + self.sy) * 0.5
    }
}

/// Colour at `t` along evenly spaced stops.
fn gradient_at(stops: &[Rgba], t: f32) -> Rgba {
    match stops {
        [] => Rgba::TRANSPARENT,
        [only] => *only,
        _ => {
            let segments = (stops.len() - 1) as f32;
            let pos = t.clamp(0.0, 1.0) * segments;
            let idx = (pos.floor() as usize).min(stops.len() - 2);
            stops[idx].lerp(stops[idx + 1], pos - idx as f32)
        }
    }
}

fn paint_vertical(canvas: &mut Canvas, stops: &[Rgba]) {
    let height = canvas.height as f32;
    for y in 0..canvas.height {
        let color = gradient_at(stops, (y as f32 + 0.5) / height);
        for x in 0..canvas.width {
            canvas.blend(x, y, color, 1.0);
        }
    }
}

fn paint_radial(
    canvas: &mut Canvas,
    mapping: &Mapping,
    center: Point,
    radius: f32,
    inner: Rgba,
    outer: Rgba,
) {
    for y in 0..canvas.height {
        for x in 0..canvas.width {
            let p = mapping.to_viewport(Point::new(x as f32 + 0.5, y as f32 + 0.5));
            let t = if radius > 0.0 {
                p.distance(center) / radius
            } else {
                1.0
            };
            canvas.blend(x, y, inner.lerp(outer, t), 1.0);
        }
    }
}

/// Pixel index range covering `[lo, hi]` in canvas space.
fn span(lo: f32, hi: f32, limit: usize) -> std::ops::Range<usize> {
    let start = lo.floor().max(0.0) as usize;
    let end = (hi.ceil().max(0.0) as usize).min(limit);
    start.min(end)..end
}

fn paint_dot(canvas: &mut Canvas, mapping: &Mapping, dot: &Dot) {
    let center = mapping.to_canvas(dot.center);
    let radius = mapping.length(dot.radius);
    if radius <= 0.0 {
        return;
    }
    // Discs thinner than a pixel fade by their size instead of vanishing.
    let thinness = (radius * 2.0).min(1.0);
    let reach = radius.max(0.5) + 0.5;

    for y in span(center.y - reach, center.y + reach, canvas.height) {
        for x in span(center.x - reach, center.x + reach, canvas.width) {
            let d = Point::new(x as f32 + 0.5, y as f32 + 0.5).distance(center);
            let coverage = (radius.max(0.5) + 0.5 - d).clamp(0.0, 1.0) * thinness;
            canvas.blend(x, y, dot.color, coverage);
        }
    }
}

/// Distance from `p` to the segment `a`-`b`.
fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len2 = abx * abx + aby * aby;
    if len2 <= f32::EPSILON {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len2).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + abx * t, a.y + aby * t))
}

fn paint_stroke(canvas: &mut Canvas, mapping: &Mapping, stroke: &Stroke) {
    let a = mapping.to_canvas(stroke.start);
    let b = mapping.to_canvas(stroke.end);
    let half = mapping.length(stroke.width) * 0.5;
    if half <= 0.0 {
        return;
    }
    let thinness = (half * 2.0).min(1.0);
    let reach = half.max(0.5) + 0.5;

    let ys = span(a.y.min(b.y) - reach, a.y.max(b.y) + reach, canvas.height);
    let xs = span(a.x.min(b.x) - reach, a.x.max(b.x) + reach, canvas.width);
    for y in ys {
        for x in xs.clone() {
            let d = segment_distance(Point::new(x as f32 + 0.5, y as f32 + 0.5), a, b);
            let coverage = (half.max(0.5) + 0.5 - d).clamp(0.0, 1.0) * thinness;
            canvas.blend(x, y, stroke.color, coverage);
        }
    }
}
