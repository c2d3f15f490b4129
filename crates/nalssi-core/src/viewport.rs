//! Render target geometry.

/// A position in viewport pixels, origin top-left, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport from width and height in pixels.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether anything can be drawn into this viewport.
    ///
    /// Zero, negative and non-finite sizes are empty.
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    /// The larger of width and height.
    pub fn longest_side(&self) -> f32 {
        self.width.max(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(!Viewport::new(320.0, 200.0).is_empty());
        assert!(Viewport::new(0.0, 200.0).is_empty());
        assert!(Viewport::new(320.0, -1.0).is_empty());
        assert!(Viewport::new(f32::NAN, 10.0).is_empty());
        assert!(Viewport::new(f32::INFINITY, 10.0).is_empty());
        assert!(Viewport::default().is_empty());
    }

    #[test]
    fn test_point_distance() {
        assert!((Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_longest_side() {
        assert_eq!(Viewport::new(320.0, 200.0).longest_side(), 320.0);
        assert_eq!(Viewport::new(80.0, 96.0).longest_side(), 96.0);
    }
}
