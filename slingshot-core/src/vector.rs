//! 2D vector and angle helpers
//!
//! Pure functions shared by the integrator, the launch deriver and the
//! draw feed. NaN inputs propagate to NaN outputs; nothing here guards them.

use glam::DVec2;

/// Squared Euclidean distance between two points
pub fn distance_squared(a: DVec2, b: DVec2) -> f64 {
    (a.x - b.x).powi(2) + (a.y - b.y).powi(2)
}

/// Angle in radians of the direction from `a` towards `b`
pub fn angle_to(a: DVec2, b: DVec2) -> f64 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Vector of the given magnitude pointing along `angle` (radians)
pub fn polar(magnitude: f64, angle: f64) -> DVec2 {
    DVec2::new(magnitude * angle.cos(), magnitude * angle.sin())
}

/// Rotate `point` around `pivot` by `angle_degrees`.
///
/// Positive angles turn from +x towards +y. On a y-down screen that reads
/// as clockwise. Only used to orient drawn shapes.
pub fn rotate_point_around_pivot(point: DVec2, pivot: DVec2, angle_degrees: f64) -> DVec2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let rel = point - pivot;
    DVec2::new(rel.x * cos - rel.y * sin, rel.x * sin + rel.y * cos) + pivot
}
