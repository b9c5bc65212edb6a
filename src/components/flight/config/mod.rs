mod loader;

use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::ConfigError;

/// Tuning constants for the flight model of a single aircraft.
///
/// All quantities are in unit-less game scale and are applied once per tick.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Label used for the spawned entity.
    pub name: String,
    /// Upper bound on forward speed.
    pub max_speed: f64,
    /// Speed at which a grounded aircraft becomes airborne.
    pub takeoff_speed: f64,
    /// Speed gained per tick while the throttle is held.
    pub throttle_accel: f64,
    /// Speed lost per tick while the throttle is released.
    pub throttle_decel: f64,
    /// Altitude lost per tick while airborne.
    pub gravity: f64,
    /// Converts pitch and speed into climb.
    pub lift_factor: f64,
    /// Lowest altitude the aircraft can reach.
    pub ground_altitude: f64,
    /// Pitch change per tick (radians).
    pub pitch_rate: f64,
    /// Yaw change per tick (radians).
    pub yaw_rate: f64,
    /// Altitude at simulation start.
    pub initial_altitude: f64,
    /// Speed removed by a single throttle-down command.
    pub throttle_step: f64,
    /// Body axis the renderer treats as "forward".
    pub forward_axis: ForwardAxis,
    /// What happens to speed when an airborne aircraft touches the ground.
    pub ground_contact: GroundContact,
}

impl Default for FlightConfig {
    /// The `Classic` profile is chosen as the default.
    fn default() -> Self {
        Self::classic()
    }
}

impl FlightConfig {
    /// Creates a flight configuration from a given source.
    ///
    /// Both sources are validated before the configuration is returned.
    pub fn new(source: FlightConfigSource) -> Result<Self, ConfigError> {
        match source {
            FlightConfigSource::Programmed(profile) => {
                let config = Self::from_profile(profile);
                config.validate()?;
                Ok(config)
            }
            FlightConfigSource::File(path) => Self::from_file(path),
        }
    }

    fn from_profile(profile: FlightProfile) -> Self {
        match profile {
            FlightProfile::Classic => Self::classic(),
            FlightProfile::Legacy => Self::legacy(),
            FlightProfile::Custom(name) => Self {
                name,
                ..Self::classic()
            },
        }
    }

    /// Runway start, gentle coast-down and a rolling touchdown.
    pub fn classic() -> Self {
        Self {
            name: "Classic".to_string(),
            max_speed: 1.0,
            takeoff_speed: 0.2,
            throttle_accel: 0.002,
            throttle_decel: 0.0005,
            gravity: 0.005,
            lift_factor: 0.05,
            ground_altitude: 0.1,
            pitch_rate: 0.01,
            yaw_rate: 0.01,
            initial_altitude: 1.0,
            throttle_step: 0.02,
            forward_axis: ForwardAxis::PositiveZ,
            ground_contact: GroundContact::Roll,
        }
    }

    /// Faster coast-down, -Z forward, and touchdown stops the aircraft dead.
    pub fn legacy() -> Self {
        Self {
            name: "Legacy".to_string(),
            throttle_decel: 0.001,
            forward_axis: ForwardAxis::NegativeZ,
            ground_contact: GroundContact::Stop,
            ..Self::classic()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Checks every constant once, up front, so the integrator never has to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("max_speed", self.max_speed),
            ("takeoff_speed", self.takeoff_speed),
            ("throttle_accel", self.throttle_accel),
            ("throttle_decel", self.throttle_decel),
            ("gravity", self.gravity),
            ("lift_factor", self.lift_factor),
            ("ground_altitude", self.ground_altitude),
            ("pitch_rate", self.pitch_rate),
            ("yaw_rate", self.yaw_rate),
            ("initial_altitude", self.initial_altitude),
            ("throttle_step", self.throttle_step),
        ];
        for (name, value) in fields {
            ensure(name, value, value.is_finite(), "must be finite")?;
        }

        ensure("max_speed", self.max_speed, self.max_speed > 0.0, "must be positive")?;
        ensure(
            "takeoff_speed",
            self.takeoff_speed,
            self.takeoff_speed > 0.0,
            "must be positive",
        )?;
        ensure(
            "takeoff_speed",
            self.takeoff_speed,
            self.takeoff_speed <= self.max_speed,
            "must not exceed max_speed",
        )?;
        ensure(
            "throttle_accel",
            self.throttle_accel,
            self.throttle_accel > 0.0,
            "must be positive",
        )?;

        let non_negative = [
            ("throttle_decel", self.throttle_decel),
            ("gravity", self.gravity),
            ("lift_factor", self.lift_factor),
            ("pitch_rate", self.pitch_rate),
            ("yaw_rate", self.yaw_rate),
            ("throttle_step", self.throttle_step),
        ];
        for (name, value) in non_negative {
            ensure(name, value, value >= 0.0, "must not be negative")?;
        }

        ensure(
            "initial_altitude",
            self.initial_altitude,
            self.initial_altitude >= self.ground_altitude,
            "must not be below ground_altitude",
        )
    }
}

fn ensure(
    name: &'static str,
    value: f64,
    ok: bool,
    reason: &'static str,
) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason,
        })
    }
}

/// Source for a flight configuration.
/// Can either be a hardcoded profile (`Programmed`) or loaded from a file.
#[derive(Debug, Clone)]
pub enum FlightConfigSource {
    Programmed(FlightProfile),
    File(PathBuf),
}

/// Enumeration of the built-in tuning profiles.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum FlightProfile {
    Classic,
    Legacy,
    /// `Classic` tuning under a custom name.
    Custom(String),
}

/// Sign convention for the body forward axis. Only the renderer-facing pose uses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForwardAxis {
    #[default]
    PositiveZ,
    NegativeZ,
}

impl ForwardAxis {
    pub fn unit(&self) -> Vector3<f64> {
        match self {
            ForwardAxis::PositiveZ => Vector3::z(),
            ForwardAxis::NegativeZ => -Vector3::z(),
        }
    }
}

/// Touchdown behaviour when an airborne aircraft is clamped to the ground.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroundContact {
    /// Keep rolling; the aircraft grounds once it has coasted to a stop.
    #[default]
    Roll,
    /// Touchdown zeroes speed, grounding the aircraft immediately.
    Stop,
}
