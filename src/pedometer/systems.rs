//! Pedometer domain: walk input sampling and step accumulation.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::Rng;

use crate::content::SessionDefaults;
use crate::core::SessionSeed;
use crate::model::StepSampleEvent;
use crate::pedometer::resources::{CadenceJitter, Pedometer, PedometerTuning, WalkInput};

/// Sample the walk keys.
pub(crate) fn read_walk_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<WalkInput>,
) {
    input.walking = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyW);
    input.burst_just_pressed = keyboard.just_pressed(KeyCode::KeyE);
}

/// Integrate walking cadence into the cumulative step total.
pub(crate) fn tick_pedometer(
    time: Res<Time>,
    input: Res<WalkInput>,
    tuning: Res<PedometerTuning>,
    mut jitter: ResMut<CadenceJitter>,
    mut pedometer: ResMut<Pedometer>,
) {
    if input.burst_just_pressed {
        pedometer.advance(tuning.burst_steps as f32);
    }
    if !input.walking {
        return;
    }
    let wobble = 1.0 + jitter.rng.random_range(-tuning.jitter..=tuning.jitter);
    pedometer.advance(tuning.cadence_steps_per_sec * wobble * time.delta_secs());
}

/// Publish a cumulative sample whenever the total changed. The sample stream
/// is the only channel into the model: cumulative totals, never decreasing.
pub(crate) fn publish_step_samples(
    mut pedometer: ResMut<Pedometer>,
    mut samples: MessageWriter<StepSampleEvent>,
) {
    if let Some(total_steps) = pedometer.take_unpublished() {
        samples.write(StepSampleEvent { total_steps });
    }
}

/// Reset the counter and reseed jitter for a new session.
pub(crate) fn initialize_pedometer(
    defaults: Res<SessionDefaults>,
    seed: Res<SessionSeed>,
    mut tuning: ResMut<PedometerTuning>,
    mut jitter: ResMut<CadenceJitter>,
    mut pedometer: ResMut<Pedometer>,
) {
    tuning.cadence_steps_per_sec = defaults.cadence_steps_per_sec;
    jitter.reseed(seed.0);
    pedometer.reset();
}
