use bevy::prelude::*;
use takeoff::{
    components::FlightConfig,
    plugins::{FlightPlugin, ThrottleDown},
};

// Builder for creating a test application with customizable configuration
#[derive(Default)]
pub struct TestAppBuilder {
    aircraft_configs: Vec<FlightConfig>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aircraft(mut self, config: FlightConfig) -> Self {
        self.aircraft_configs.push(config);
        self
    }

    pub fn build(self) -> TestApp {
        let mut configs = self.aircraft_configs.into_iter();
        let mut plugin = FlightPlugin::new(configs.next().unwrap_or_default())
            .expect("test configs must validate");
        for config in configs {
            plugin = plugin
                .with_aircraft(config)
                .expect("test configs must validate");
        }

        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(plugin);

        // Run an initial update so Startup spawns the aircraft
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Runs the fixed-timestep schedule directly, independent of wall-clock time
    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn aircraft(&mut self, name: &str) -> Entity {
        let world = self.app.world_mut();
        let mut query = world.query::<(Entity, &Name)>();
        query
            .iter(world)
            .find(|(_, entity_name)| entity_name.as_str() == name)
            .map(|(entity, _)| entity)
            .unwrap_or_else(|| panic!("aircraft {} not found", name))
    }

    pub fn get<T: Component>(&self, entity: Entity) -> &T {
        self.app
            .world()
            .get::<T>(entity)
            .expect("component not found")
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Mut<T> {
        self.app
            .world_mut()
            .get_mut::<T>(entity)
            .expect("component not found")
    }

    pub fn throttle_down(&mut self, entity: Entity) {
        self.app.world_mut().send_event(ThrottleDown { entity });
    }
}
