//! Geometry and numeric helpers shared by the style model and the editor
//!
//! Everything here is a pure function over `f32`/`i32`/`Vec2` values:
//! - cubic Bezier evaluation (scalar and point)
//! - grid snapping
//! - angle conversion and normalization
//! - display formatting of floats for style files

use glam::Vec2;
use std::f32::consts::PI;

use crate::consts::DISPLAY_ZERO_TOLERANCE;

/// Evaluate the cubic Bernstein basis at `dist` over four scalar control values.
///
/// `dist` is not clamped: values outside [0, 1] extrapolate the curve.
#[inline]
pub fn bezier_interpolate(dist: f32, c0: f32, c1: f32, c2: f32, c3: f32) -> f32 {
    let distp = 1.0 - dist;
    (distp * distp * distp) * c0
        + 3.0 * (distp * distp) * dist * c1
        + 3.0 * (dist * dist) * distp * c2
        + (dist * dist * dist) * c3
}

/// Evaluate a cubic Bezier curve over four 2D control points.
///
/// Each axis goes through [`bezier_interpolate`] on its own, so the result
/// matches two scalar evaluations exactly.
#[inline]
pub fn bezier_point(dist: f32, c0: Vec2, c1: Vec2, c2: Vec2, c3: Vec2) -> Vec2 {
    Vec2::new(
        bezier_interpolate(dist, c0.x, c1.x, c2.x, c3.x),
        bezier_interpolate(dist, c0.y, c1.y, c2.y, c3.y),
    )
}

/// Round `val` to the nearest multiple of `step_size`.
///
/// Ties round away from zero (`f32::round`). A zero step means "no grid" and
/// returns `val` untouched.
#[inline]
pub fn round_to_nearest(step_size: f32, val: f32) -> f32 {
    if step_size == 0.0 {
        val
    } else {
        (val / step_size).round() * step_size
    }
}

/// Snap both coordinates of a point to the grid
#[inline]
pub fn snap_point(step_size: f32, p: Vec2) -> Vec2 {
    Vec2::new(round_to_nearest(step_size, p.x), round_to_nearest(step_size, p.y))
}

#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    (radians * 180.0) / PI
}

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    (degrees * PI) / 180.0
}

/// Normalize an integer angle to (-180, 180]
///
/// 180 stays 180 and -180 becomes 180. Uses the Euclidean remainder, so the
/// result is the one repeated ±360 steps would reach, for any `i32`.
#[inline]
pub fn normalize_angle_deg(degrees: i32) -> i32 {
    let r = degrees.rem_euclid(360);
    if r > 180 { r - 360 } else { r }
}

/// Normalize an angle in radians to (-π, π]
///
/// Bounds are compared exactly against `PI` with no epsilon: `PI` maps to
/// itself and `-PI` maps to `PI`. Takes the Euclidean remainder first, so
/// the cost doesn't depend on the magnitude.
#[inline]
pub fn normalize_angle_rad(rads: f32) -> f32 {
    let r = rads.rem_euclid(2.0 * PI);
    if r > PI { r - 2.0 * PI } else { r }
}

/// Text form of a float for style files
///
/// Anything within ±1e-6 of zero is written as `0` so files don't pick up
/// noise like `-0.0000003`. Other values use the shortest text that parses
/// back to the same `f32`.
pub fn float_to_string(f: f32) -> String {
    if f.abs() <= DISPLAY_ZERO_TOLERANCE {
        "0".to_string()
    } else {
        f.to_string()
    }
}

/// Cubic curve of an edge: source, two control points, target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCurve {
    pub source: Vec2,
    pub cp1: Vec2,
    pub cp2: Vec2,
    pub target: Vec2,
}

impl EdgeCurve {
    pub fn new(source: Vec2, cp1: Vec2, cp2: Vec2, target: Vec2) -> Self {
        Self {
            source,
            cp1,
            cp2,
            target,
        }
    }

    /// Straight edge (control points on the chord at 1/3 and 2/3)
    pub fn straight(source: Vec2, target: Vec2) -> Self {
        Self::new(
            source,
            source.lerp(target, 1.0 / 3.0),
            source.lerp(target, 2.0 / 3.0),
            target,
        )
    }

    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        bezier_point(t, self.source, self.cp1, self.cp2, self.target)
    }

    pub fn midpoint(&self) -> Vec2 {
        self.point_at(0.5)
    }

    /// Tangent direction at `t` in whole degrees, normalized to (-180, 180]
    pub fn tangent_angle_at(&self, t: f32) -> i32 {
        let u = 1.0 - t;
        let d = 3.0 * u * u * (self.cp1 - self.source)
            + 6.0 * u * t * (self.cp2 - self.cp1)
            + 3.0 * t * t * (self.target - self.cp2);
        let degrees = radians_to_degrees(d.y.atan2(d.x)).round() as i32;
        normalize_angle_deg(degrees)
    }
}
