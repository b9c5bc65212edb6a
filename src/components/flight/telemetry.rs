use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::FlightState;

/// Speed and altitude readout for a HUD.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightTelemetry {
    pub speed: f64,
    pub altitude: f64,
}

impl FlightTelemetry {
    pub fn from_state(state: &FlightState) -> Self {
        Self {
            speed: state.speed,
            altitude: state.altitude,
        }
    }
}

impl fmt::Display for FlightTelemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Speed: {:.2} | Altitude: {:.2}", self.speed, self.altitude)
    }
}
