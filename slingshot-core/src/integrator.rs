use crate::engine::{Attractor, Body};

/// How a body moves during one step, chosen per call
#[derive(Debug, Clone, Copy)]
pub enum Flight<'a> {
    /// Straight line at constant velocity
    Free,
    /// Pulled by a single attractor with gravitational constant `g`
    Attracted { attractor: &'a Attractor, g: f64 },
}

/// Advance a body by one tick using explicit Euler integration
/// (v += a, then x += v, with an implicit time step of one tick)
pub fn step(body: &mut Body, flight: Flight<'_>) {
    if let Flight::Attracted { attractor, g } = flight {
        body.vel += body.gravitational_acceleration(attractor, g);
    }
    body.pos += body.vel;
}
