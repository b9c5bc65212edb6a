pub mod flight;

pub use flight::{
    advance, flight_integrator_system, flight_telemetry_system, flight_transform_system,
    lift_force, throttle_down, throttle_down_system,
};
