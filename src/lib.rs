pub mod components;
pub mod plugins;
pub mod systems;
pub mod utils;

pub use components::{ControlIntents, FlightConfig, FlightPhase, FlightState};
pub use plugins::FlightPlugin;
pub use systems::advance;
pub use utils::ConfigError;
