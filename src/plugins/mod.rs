mod flight;

pub use flight::{FlightPlugin, FlightSet, ThrottleDown, FLIGHT_TICK_HZ};
