//! Easing curves for the animated total
//!
//! All curves map progress `t` in [0, 1] to eased progress in [0, 1] with
//! `f(0) = 0` and `f(1) = 1`. Input outside [0, 1] is clamped.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Solver tolerance for cubic Bézier curves
const BEZIER_EPSILON: f64 = 1e-7;
const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 64;

/// Cubic ease-out: fast start, slow finish
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Quadratic ease-out: gentler than cubic
#[inline]
pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Linear interpolation (no easing)
#[inline]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Interpolate between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Cubic Bézier timing curve through (0,0), (x1,y1), (x2,y2), (1,1)
///
/// `x1` and `x2` must lie in [0, 1] so the curve is a function of time.
pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        return t;
    }

    // Polynomial coefficients
    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample_x = |s: f64| ((ax * s + bx) * s + cx) * s;
    let sample_y = |s: f64| ((ay * s + by) * s + cy) * s;
    let slope_x = |s: f64| (3.0 * ax * s + 2.0 * bx) * s + cx;

    // Newton-Raphson first, bisection if the slope flattens out
    let mut s = t;
    for _ in 0..NEWTON_ITERATIONS {
        let error = sample_x(s) - t;
        if error.abs() < BEZIER_EPSILON {
            return sample_y(s);
        }
        let slope = slope_x(s);
        if slope.abs() < BEZIER_EPSILON {
            break;
        }
        s -= error / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = t;
    for _ in 0..BISECTION_ITERATIONS {
        let x = sample_x(s);
        if (x - t).abs() < BEZIER_EPSILON {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    sample_y(s)
}

/// Easing curve selection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Standard CSS ease-out, `cubic-bezier(0, 0, 0.58, 1)`
    #[default]
    EaseOut,
    EaseOutCubic,
    EaseOutQuad,
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Easing {
    /// Map linear progress to eased progress
    pub fn apply(&self, t: f64) -> f64 {
        match *self {
            Easing::Linear => linear(t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseOutCubic => ease_out_cubic(t),
            Easing::EaseOutQuad => ease_out_quad(t),
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Easing::CubicBezier { x1, y1, x2, y2 } = *self {
            if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                return Err(ConfigError::Invalid(
                    "cubic_bezier control points must be finite".to_string(),
                ));
            }
            if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                return Err(ConfigError::Invalid(format!(
                    "cubic_bezier x1 and x2 must be within [0, 1] (got {}, {})",
                    x1, x2
                )));
            }
        }
        Ok(())
    }
}
