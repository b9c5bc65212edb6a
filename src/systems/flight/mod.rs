mod integrator;
mod publish;

pub use integrator::{
    advance, flight_integrator_system, lift_force, throttle_down, throttle_down_system,
};
pub use publish::{flight_telemetry_system, flight_transform_system};
