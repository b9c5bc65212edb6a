pub mod flight;

pub use flight::{
    attitude_from_angles, ControlIntents, FlightConfig, FlightConfigSource, FlightPhase,
    FlightProfile, FlightState, FlightTelemetry, FlightTransform, ForwardAxis, GroundContact,
};
