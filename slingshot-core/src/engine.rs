use crate::vector::{angle_to, distance_squared, polar};
use glam::DVec2;

/// Below this squared distance a body counts as sitting on the attractor's
/// centre. Such a body is an immediate collision: the registry removes it
/// before integrating, and on its own it receives no pull.
pub const MIN_DISTANCE_SQUARED: f64 = 1e-12;

/// The fixed massive body generating the gravitational field
#[derive(Debug, Clone, PartialEq)]
pub struct Attractor {
    position: DVec2,
    mass: f64,
    radius: f64,
}

impl Attractor {
    pub fn new(position: DVec2, mass: f64, radius: f64) -> Self {
        Self {
            position,
            mass,
            radius,
        }
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Collision radius
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// A launched body moving under the attractor's pull
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    pub mass: f64,
}

impl Body {
    pub fn new(pos: DVec2, vel: DVec2, mass: f64) -> Self {
        Self { pos, vel, mass }
    }

    /// Acceleration the attractor imparts on this body for one tick
    pub fn gravitational_acceleration(&self, attractor: &Attractor, g: f64) -> DVec2 {
        if self.is_at_singularity(attractor) {
            return DVec2::ZERO;
        }
        let dist_sq = distance_squared(self.pos, attractor.position());

        // force / mass, not the cancelled g * M / d2
        let force = g * self.mass * attractor.mass() / dist_sq;
        let accel = force / self.mass;
        polar(accel, angle_to(self.pos, attractor.position()))
    }

    /// True when the body is too close to the attractor's centre for the
    /// inverse-square pull to be evaluated
    pub fn is_at_singularity(&self, attractor: &Attractor) -> bool {
        distance_squared(self.pos, attractor.position()) < MIN_DISTANCE_SQUARED
    }

    pub fn distance_to(&self, attractor: &Attractor) -> f64 {
        distance_squared(self.pos, attractor.position()).sqrt()
    }
}
