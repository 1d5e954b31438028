//! Simulation parameters
//!
//! Every field has a default, so a configuration file only needs the values
//! it overrides:
//!
//! ```json
//! {
//!   "width": 1024.0,
//!   "height": 768.0,
//!   "attractor_mass": 250.0,
//!   "attractor_position": [300.0, 384.0]
//! }
//! ```

use crate::engine::Attractor;
use crate::error::ConfigError;
use crate::launch::LaunchParams;
use crate::runtime::Playfield;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub width: f64,
    pub height: f64,
    pub gravitational_constant: f64,
    pub attractor_mass: f64,
    pub attractor_radius: f64,
    /// Defaults to the middle of the playfield, rounded down
    pub attractor_position: Option<DVec2>,
    pub body_mass: f64,
    pub sling_force: f64,
    /// Ticks per second requested from the driving clock
    pub tick_rate: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            gravitational_constant: 5.0,
            attractor_mass: 100.0,
            attractor_radius: 50.0,
            attractor_position: None,
            body_mass: 5.0,
            sling_force: 0.05,
            tick_rate: 60.0,
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make the session meaningless or non-finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("attractor_mass", self.attractor_mass),
            ("body_mass", self.body_mass),
            ("tick_rate", self.tick_rate),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, value, "must be finite"));
            }
            if value <= 0.0 {
                return Err(ConfigError::invalid(field, value, "must be positive"));
            }
        }

        let non_negative = [
            ("gravitational_constant", self.gravitational_constant),
            ("attractor_radius", self.attractor_radius),
            ("sling_force", self.sling_force),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, value, "must be finite"));
            }
            if value < 0.0 {
                return Err(ConfigError::invalid(field, value, "must not be negative"));
            }
        }

        if let Some(pos) = self.attractor_position {
            if !pos.is_finite() {
                let bad = if pos.x.is_finite() { pos.y } else { pos.x };
                return Err(ConfigError::invalid(
                    "attractor_position",
                    bad,
                    "must be finite",
                ));
            }
        }

        Ok(())
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.width, self.height)
    }

    pub fn attractor(&self) -> Attractor {
        let position = self.attractor_position.unwrap_or_else(|| {
            DVec2::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
        });
        Attractor::new(position, self.attractor_mass, self.attractor_radius)
    }

    pub fn launch_params(&self) -> LaunchParams {
        LaunchParams {
            sling_force: self.sling_force,
            body_mass: self.body_mass,
        }
    }

    /// Wall-clock length of one tick in seconds
    pub fn tick_period(&self) -> f64 {
        1.0 / self.tick_rate
    }
}
