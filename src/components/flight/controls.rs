use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-tick control intents produced by whatever input source drives the aircraft.
///
/// Opposing intents may both be set; the integrator lets `pitch_up` win over
/// `pitch_down` and `yaw_left` over `yaw_right`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlIntents {
    pub throttle_on: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
}

impl ControlIntents {
    /// Nothing held.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Throttle held, attitude untouched.
    pub fn throttle() -> Self {
        Self {
            throttle_on: true,
            ..Self::default()
        }
    }
}
