use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::FlightConfig;

/// Discrete flight state governing which equations apply on a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightPhase {
    /// On the ground, rolling. Also covers the takeoff roll.
    #[default]
    Grounded,
    /// Lift and gravity are in effect.
    Airborne,
}

/// Kinematic state of a single aircraft, mutated once per tick by the integrator.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Forward speed, `0 <= speed <= max_speed`.
    pub speed: f64,
    /// Height above the ground datum, never below `ground_altitude`.
    pub altitude: f64,
    /// Orientation angles (radians), not normalised.
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
    pub phase: FlightPhase,
    /// Throttle intent seen on the last tick.
    pub throttle_on: bool,
    /// Distance moved along the body forward axis on the last tick.
    pub forward_travel: f64,
}

impl Default for FlightState {
    fn default() -> Self {
        Self::on_ground(0.0)
    }
}

impl FlightState {
    /// A stationary aircraft at the given altitude with level attitude.
    pub fn on_ground(altitude: f64) -> Self {
        Self {
            speed: 0.0,
            altitude,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            phase: FlightPhase::Grounded,
            throttle_on: false,
            forward_travel: 0.0,
        }
    }

    /// Creates the start-of-simulation state for a configuration.
    pub fn from_config(config: &FlightConfig) -> Self {
        Self::on_ground(config.initial_altitude)
    }

    pub fn is_airborne(&self) -> bool {
        self.phase == FlightPhase::Airborne
    }
}
