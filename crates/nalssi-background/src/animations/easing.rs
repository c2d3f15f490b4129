//! Easing curves applied to normalized channel progress.

/// Easing function mapping progress in `[0, 1]` to an eased value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Identity.
    Linear,
    /// Ease-in-out curve, cubic bezier (0.4, 0.0) (0.2, 1.0).
    FastOutSlowIn,
    /// Arbitrary cubic bezier through (0, 0), (x1, y1), (x2, y2), (1, 1).
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Evaluate the curve. Input outside `[0, 1]` is clamped.
    pub fn apply(self, progress: f32) -> f32 {
        let x = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => x,
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, x),
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, x),
        }
    }
}

/// One coordinate of a unit cubic bezier with endpoints 0 and 1.
fn bezier(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn bezier_slope(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    const EPSILON: f32 = 1e-6;

    // Newton-Raphson on the x curve, seeded with x itself.
    let mut t = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, t) - x;
        if err.abs() < EPSILON {
            return bezier(y1, y2, t);
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < EPSILON {
            break;
        }
        t = (t - err / slope).clamp(0.0, 1.0);
    }

    // Bisection fallback for flat regions.
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    t = x;
    for _ in 0..32 {
        let value = bezier(x1, x2, t);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }
    bezier(y1, y2, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_identity() {
        for i in 0..=10 {
            let x = i as f32 / 10.0;
            assert_eq!(Easing::Linear.apply(x), x);
        }
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn test_fast_out_slow_in_endpoints() {
        assert_eq!(Easing::FastOutSlowIn.apply(0.0), 0.0);
        assert_eq!(Easing::FastOutSlowIn.apply(1.0), 1.0);
    }

    #[test]
    fn test_fast_out_slow_in_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=200 {
            let y = Easing::FastOutSlowIn.apply(i as f32 / 200.0);
            assert!(y >= prev - 1e-5, "not monotonic at step {i}: {y} < {prev}");
            assert!((0.0..=1.0).contains(&y));
            prev = y;
        }
    }

    #[test]
    fn test_fast_out_slow_in_shape() {
        // Accelerates early and settles late.
        assert!(Easing::FastOutSlowIn.apply(0.5) > 0.6);
        assert!(Easing::FastOutSlowIn.apply(0.1) < 0.1);
    }

    #[test]
    fn test_linear_bezier_matches_identity() {
        let ease = Easing::CubicBezier {
            x1: 1.0 / 3.0,
            y1: 1.0 / 3.0,
            x2: 2.0 / 3.0,
            y2: 2.0 / 3.0,
        };
        for i in 0..=20 {
            let x = i as f32 / 20.0;
            assert!((ease.apply(x) - x).abs() < 1e-4);
        }
    }
}
