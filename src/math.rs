//! Scalar clamping and the trigonometry used to rotate offsets about the
//! origin.

use cgmath::{Rad, Vector2};
use std::f64::consts::PI;

/// Inclusive range that a transform axis is bounded to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClampRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}
impl ClampRange {
    /// Returns a range between two bounds, in either order.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }
}

/// Bounds `value` to `range`, or returns it unchanged if there is no range.
pub fn clamp(value: f64, range: Option<ClampRange>) -> f64 {
    match range {
        // `max()` then `min()` rather than `f64::clamp()`, which panics on
        // inverted bounds.
        Some(r) => value.max(r.min).min(r.max),
        None => value,
    }
}

/// Returns the Euclidean norm of a vector with any number of components.
pub fn distance(v: &[f64]) -> f64 {
    v.iter().map(|c| c * c).sum::<f64>().sqrt()
}

/// Angle of a point from the origin, derived separately from its X and Y
/// components.
///
/// `acos` and `asin` each only cover half of the circle, so each angle carries
/// its own quadrant correction. Both describe the same direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DualAngle {
    /// Angle derived from the X component with `acos`.
    pub x: Rad<f64>,
    /// Angle derived from the Y component with `asin`.
    pub y: Rad<f64>,
}

/// Returns the angle of `(x, y)` from the origin. The origin itself has an
/// angle of zero.
pub fn angle_from_origin(x: f64, y: f64) -> DualAngle {
    let hyp = distance(&[x, y]);
    if hyp == 0.0 {
        return DualAngle {
            x: Rad(0.0),
            y: Rad(0.0),
        };
    }

    let mut angle_x = (x / hyp).acos();
    if y < 0.0 {
        angle_x = -angle_x;
    }
    let mut angle_y = (y / hyp).asin();
    if x < 0.0 {
        angle_y = PI - angle_y;
    }
    DualAngle {
        x: Rad(angle_x),
        y: Rad(angle_y),
    }
}

/// Rotates `offset` about the origin by `delta`, preserving its length.
///
/// With screen coordinates (Y pointing down) a positive `delta` turns the
/// offset clockwise, the same direction as a CSS `rotate()`.
pub fn rotate_about_origin(offset: Vector2<f64>, delta: Rad<f64>) -> Vector2<f64> {
    let hyp = distance(&[offset.x, offset.y]);
    let angle = angle_from_origin(offset.x, offset.y);
    Vector2::new(
        hyp * (angle.x.0 + delta.0).cos(),
        hyp * (angle.y.0 + delta.0).sin(),
    )
}
