//! Turns a pull-and-release gesture into a launched body

use crate::engine::Body;
use crate::vector::{angle_to, distance_squared, polar};
use glam::DVec2;

/// Constants feeding the launch formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParams {
    pub sling_force: f64,
    pub body_mass: f64,
}

/// Initial velocity for a drag from `start` (press) to `end` (release).
///
/// The sling force is treated as a constant acceleration `sling_force / mass`
/// applied over the drag length, so `v = sqrt(2 * a * d)`. The body flies
/// along `start - end`, away from the release point like a slingshot.
pub fn launch_velocity(start: DVec2, end: DVec2, params: &LaunchParams) -> DVec2 {
    let dist_sq = distance_squared(start, end);
    let speed = (2.0 * params.sling_force * dist_sq / params.body_mass).sqrt();
    polar(speed, angle_to(end, start))
}

/// Create a body at the release point with the derived launch velocity
pub fn launch_body(start: DVec2, end: DVec2, params: &LaunchParams) -> Body {
    Body::new(end, launch_velocity(start, end, params), params.body_mass)
}
