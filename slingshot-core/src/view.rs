//! Read-only snapshot of a session for whatever draws it
//!
//! Nothing in here feeds back into physics. Orientation of the body
//! outline is derived from velocity purely for presentation.

use crate::engine::{Attractor, Body};
use crate::runtime::{Playfield, SimulationState};
use crate::vector::rotate_point_around_pivot;
use glam::DVec2;

/// Half-width of the body outline at its tail
pub const OUTLINE_HALF_WIDTH: f64 = 3.0;
/// Distance from the body position to the outline's nose and tail
pub const OUTLINE_HALF_LENGTH: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneView {
    pub playfield: Playfield,
    pub attractor: AttractorView,
    pub bodies: Vec<BodyView>,
    pub drag_guide: Option<DragGuide>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttractorView {
    pub position: DVec2,
    pub mass: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    pub position: DVec2,
    pub velocity: DVec2,
    pub facing_degrees: f64,
    /// Triangle pointing along the direction of travel
    pub outline: [DVec2; 3],
}

/// Line from where the pending drag started to the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGuide {
    pub start: DVec2,
    pub current: DVec2,
}

impl SceneView {
    pub fn capture(state: &SimulationState, pointer: DVec2) -> Self {
        Self {
            playfield: *state.playfield(),
            attractor: AttractorView::from(state.attractor()),
            bodies: state.bodies().iter().map(BodyView::from).collect(),
            drag_guide: state.pending_gesture().map(|start| DragGuide {
                start,
                current: pointer,
            }),
        }
    }
}

impl From<&Attractor> for AttractorView {
    fn from(attractor: &Attractor) -> Self {
        Self {
            position: attractor.position(),
            mass: attractor.mass(),
            radius: attractor.radius(),
        }
    }
}

impl From<&Body> for BodyView {
    fn from(body: &Body) -> Self {
        let facing_degrees = facing_degrees(body.vel);
        Self {
            position: body.pos,
            velocity: body.vel,
            facing_degrees,
            outline: outline(body.pos, facing_degrees),
        }
    }
}

/// Rotation that turns the nose of an unrotated outline (pointing +y)
/// onto the velocity direction
pub fn facing_degrees(velocity: DVec2) -> f64 {
    (-velocity.y).atan2(-velocity.x).to_degrees() + 90.0
}

pub fn outline(position: DVec2, facing_degrees: f64) -> [DVec2; 3] {
    let DVec2 { x, y } = position;
    [
        DVec2::new(x - OUTLINE_HALF_WIDTH, y - OUTLINE_HALF_LENGTH),
        DVec2::new(x + OUTLINE_HALF_WIDTH, y - OUTLINE_HALF_LENGTH),
        DVec2::new(x, y + OUTLINE_HALF_LENGTH),
    ]
    .map(|point| rotate_point_around_pivot(point, position, facing_degrees))
}
