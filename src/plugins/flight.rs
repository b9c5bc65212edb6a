use bevy::prelude::*;

use crate::components::{
    ControlIntents, FlightConfig, FlightState, FlightTelemetry, FlightTransform,
};
use crate::systems::{
    flight_integrator_system, flight_telemetry_system, flight_transform_system,
    throttle_down_system,
};
use crate::utils::ConfigError;

/// Tick rate of the flight model, one tick per animation frame.
pub const FLIGHT_TICK_HZ: f64 = 60.0;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Integrate,
    Publish,
}

/// One-shot request to drop an aircraft's speed by its `throttle_step`.
#[derive(Event, Debug, Clone, Copy)]
pub struct ThrottleDown {
    pub entity: Entity,
}

/// Spawns one aircraft per configuration and advances them on `FixedUpdate`.
pub struct FlightPlugin {
    configs: Vec<FlightConfig>,
}

impl FlightPlugin {
    pub fn new(config: FlightConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(FlightPlugin {
            configs: vec![config],
        })
    }

    /// Adds another, fully independent aircraft.
    pub fn with_aircraft(mut self, config: FlightConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.configs.push(config);
        Ok(self)
    }

    fn setup_aircraft(mut commands: Commands, configs: Vec<FlightConfig>) {
        for config in configs {
            info!(
                "Spawning aircraft {} at altitude {}",
                config.name, config.initial_altitude
            );
            let state = FlightState::from_config(&config);
            commands.spawn((
                Name::new(config.name.clone()),
                FlightTransform::from_state(&state),
                FlightTelemetry::from_state(&state),
                ControlIntents::default(),
                state,
                config,
            ));
        }
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let configs = self.configs.clone();

        app.add_event::<ThrottleDown>()
            .configure_sets(
                FixedUpdate,
                (FlightSet::Input, FlightSet::Integrate, FlightSet::Publish).chain(),
            )
            .add_systems(Startup, move |commands: Commands| {
                Self::setup_aircraft(commands, configs.clone())
            })
            .add_systems(
                FixedUpdate,
                (
                    throttle_down_system.in_set(FlightSet::Input),
                    flight_integrator_system.in_set(FlightSet::Integrate),
                    (flight_transform_system, flight_telemetry_system).in_set(FlightSet::Publish),
                ),
            );

        app.insert_resource(Time::<Fixed>::from_hz(FLIGHT_TICK_HZ));
    }
}
