use approx::assert_relative_eq;
use nalgebra::Vector3;
use takeoff::components::{FlightConfig, FlightState};

/// Assert that a flight state respects every bound the integrator promises
#[track_caller]
pub fn assert_flight_state_valid(state: &FlightState, config: &FlightConfig) {
    assert!(state.speed.is_finite(), "Speed is not finite");
    assert!(state.altitude.is_finite(), "Altitude is not finite");
    assert!(state.pitch.is_finite(), "Pitch is not finite");
    assert!(state.yaw.is_finite(), "Yaw is not finite");

    assert!(state.speed >= 0.0, "Negative speed {}", state.speed);
    assert!(
        state.speed <= config.max_speed,
        "Speed {} exceeds max_speed {}",
        state.speed,
        config.max_speed
    );
    assert!(
        state.altitude >= config.ground_altitude,
        "Altitude {} below ground_altitude {}",
        state.altitude,
        config.ground_altitude
    );
}

/// Assert that two positions are approximately equal
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
