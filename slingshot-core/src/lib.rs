pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod integrator;
pub mod launch;
pub mod runtime;
pub mod vector;
pub mod view;

pub use config::SimulationConfig;
pub use engine::{Attractor, Body, MIN_DISTANCE_SQUARED};
pub use error::ConfigError;
pub use glam::DVec2;
pub use input::{InputEvent, InputFrame};
pub use integrator::{step, Flight};
pub use launch::{launch_body, launch_velocity, LaunchParams};
pub use runtime::{
    has_collided, is_off_bounds, run_launch, BodyFate, LaunchReport, Playfield, RemovalCause,
    SimulationState, SimulationStats, TickOutcome, TickReport,
};
pub use view::{AttractorView, BodyView, DragGuide, SceneView};
