pub mod config;
pub mod controls;
pub mod state;
pub mod telemetry;
pub mod transform;

pub use config::{FlightConfig, FlightConfigSource, FlightProfile, ForwardAxis, GroundContact};
pub use controls::ControlIntents;
pub use state::{FlightPhase, FlightState};
pub use telemetry::FlightTelemetry;
pub use transform::{attitude_from_angles, FlightTransform};
