use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::{FlightState, ForwardAxis};

/// Renderer-facing pose of an aircraft.
///
/// World frame is y-up. Position accumulates the per-tick forward travel along the
/// configured forward axis; the vertical component always mirrors the altitude.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightTransform {
    /// Position in world space
    pub position: Vector3<f64>,
    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,
}

impl Default for FlightTransform {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
        }
    }
}

impl FlightTransform {
    pub fn from_state(state: &FlightState) -> Self {
        Self {
            position: Vector3::new(0.0, state.altitude, 0.0),
            attitude: attitude_from_angles(state.pitch, state.yaw, state.roll),
        }
    }

    /// Moves the pose forward by the state's last tick of travel.
    pub fn apply(&mut self, state: &FlightState, forward_axis: ForwardAxis) {
        self.attitude = attitude_from_angles(state.pitch, state.yaw, state.roll);
        self.position += self.attitude * (forward_axis.unit() * state.forward_travel);
        self.position.y = state.altitude;
    }

    /// Unit vector the aircraft's nose points along.
    pub fn heading(&self, forward_axis: ForwardAxis) -> Vector3<f64> {
        self.attitude * forward_axis.unit()
    }
}

/// Intrinsic X-Y-Z rotation: pitch about x, yaw about y, roll about z.
pub fn attitude_from_angles(pitch: f64, yaw: f64, roll: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::x_axis(), pitch)
        * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw)
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), roll)
}
