use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use takeoff::components::{ControlIntents, FlightConfig, FlightState};
use takeoff::systems::advance;

/// Generates a reproducible stream of random control intents
pub fn random_intents(seed: u64, ticks: usize) -> Vec<ControlIntents> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..ticks)
        .map(|_| ControlIntents {
            throttle_on: rng.gen_bool(0.6),
            pitch_up: rng.gen_bool(0.2),
            pitch_down: rng.gen_bool(0.3),
            yaw_left: rng.gen_bool(0.1),
            yaw_right: rng.gen_bool(0.1),
        })
        .collect()
}

/// Advances a state through a sequence of intents, calling `inspect` after each tick
pub fn run_ticks<F>(
    state: &mut FlightState,
    intents: &[ControlIntents],
    config: &FlightConfig,
    mut inspect: F,
) where
    F: FnMut(&FlightState, &FlightState),
{
    for intent in intents {
        let before = *state;
        advance(state, intent, config);
        inspect(&before, state);
    }
}

/// Advances a state for a fixed number of ticks holding the same intents
pub fn hold(state: &mut FlightState, intents: ControlIntents, config: &FlightConfig, ticks: usize) {
    for _ in 0..ticks {
        advance(state, &intents, config);
    }
}
