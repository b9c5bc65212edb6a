use bevy::prelude::*;

use crate::components::{ControlIntents, FlightConfig, FlightPhase, FlightState, GroundContact};
use crate::plugins::ThrottleDown;

/// System advancing every aircraft by one tick.
pub fn flight_integrator_system(
    mut query: Query<(&mut FlightState, &ControlIntents, &FlightConfig)>,
) {
    for (mut state, intents, config) in query.iter_mut() {
        advance(&mut state, intents, config);
    }
}

/// System applying one-shot throttle-down commands.
pub fn throttle_down_system(
    mut events: EventReader<ThrottleDown>,
    mut query: Query<(&mut FlightState, &FlightConfig)>,
) {
    for event in events.read() {
        match query.get_mut(event.entity) {
            Ok((mut state, config)) => throttle_down(&mut state, config),
            Err(_) => warn!("Throttle down for {:?} ignored: no flight state", event.entity),
        }
    }
}

/// Vertical force generated by the wings. Never negative: a nose-down attitude
/// produces no lift rather than pushing the aircraft down.
pub fn lift_force(pitch: f64, speed: f64, lift_factor: f64) -> f64 {
    (pitch.sin() * speed * lift_factor).max(0.0)
}

/// Advances a single aircraft by one tick.
///
/// # Arguments
/// * `state` - The mutable state of the aircraft to update.
/// * `intents` - Control intents held during this tick.
/// * `config` - Tuning constants, assumed to have passed `FlightConfig::validate`.
pub fn advance(state: &mut FlightState, intents: &ControlIntents, config: &FlightConfig) {
    state.throttle_on = intents.throttle_on;
    update_throttle(state, config);
    state.speed = state.speed.clamp(0.0, config.max_speed);

    match state.phase {
        FlightPhase::Grounded => {
            state.altitude = state.altitude.max(config.ground_altitude);
            state.forward_travel = state.speed;
            if state.speed >= config.takeoff_speed {
                state.phase = FlightPhase::Airborne;
                info!(
                    "{} airborne at speed {:.3}, altitude {:.3}",
                    config.name, state.speed, state.altitude
                );
            }
        }
        FlightPhase::Airborne => {
            state.forward_travel = state.speed;
            update_airborne(state, config);
        }
    }

    update_attitude(state, intents, config);

    trace!(
        "{}: phase {:?}, speed {:.4}, altitude {:.4}, pitch {:.3}, yaw {:.3}",
        config.name,
        state.phase,
        state.speed,
        state.altitude,
        state.pitch,
        state.yaw
    );
}

/// Removes a fixed chunk of speed, clamped at zero.
pub fn throttle_down(state: &mut FlightState, config: &FlightConfig) {
    state.speed = (state.speed - config.throttle_step).max(0.0);
    debug!("{} throttle down, speed {:.3}", config.name, state.speed);
}

fn update_throttle(state: &mut FlightState, config: &FlightConfig) {
    if state.throttle_on {
        if state.speed < config.max_speed {
            state.speed = (state.speed + config.throttle_accel).min(config.max_speed);
        }
    } else if state.speed > 0.0 {
        state.speed = (state.speed - config.throttle_decel).max(0.0);
    }
}

fn update_airborne(state: &mut FlightState, config: &FlightConfig) {
    let lift = lift_force(state.pitch, state.speed, config.lift_factor);
    state.altitude += lift - config.gravity;

    if state.altitude < config.ground_altitude {
        state.altitude = config.ground_altitude;
        if config.ground_contact == GroundContact::Stop {
            state.speed = 0.0;
        }
        if state.speed == 0.0 {
            state.phase = FlightPhase::Grounded;
            info!("{} grounded at altitude {:.3}", config.name, state.altitude);
        }
    } else {
        state.phase = FlightPhase::Airborne;
    }
}

fn update_attitude(state: &mut FlightState, intents: &ControlIntents, config: &FlightConfig) {
    if intents.pitch_up {
        state.pitch -= config.pitch_rate;
    } else if intents.pitch_down {
        state.pitch += config.pitch_rate;
    }

    if intents.yaw_left {
        state.yaw += config.yaw_rate;
    } else if intents.yaw_right {
        state.yaw -= config.yaw_rate;
    }
}
