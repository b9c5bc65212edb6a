use bevy::prelude::*;

use crate::components::{FlightConfig, FlightState, FlightTelemetry, FlightTransform};

/// System moving each aircraft's renderer-facing pose by its last tick of travel.
pub fn flight_transform_system(
    mut query: Query<(&mut FlightTransform, &FlightState, &FlightConfig)>,
) {
    for (mut transform, state, config) in query.iter_mut() {
        transform.apply(state, config.forward_axis);
    }
}

/// System refreshing the HUD readout of each aircraft.
pub fn flight_telemetry_system(mut query: Query<(&mut FlightTelemetry, &FlightState)>) {
    for (mut telemetry, state) in query.iter_mut() {
        *telemetry = FlightTelemetry::from_state(state);
    }
}
