//! Pursuit domain: chase systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::SessionDefaults;
use crate::model::{StepModel, StepSampleEvent};
use crate::pursuit::events::UserCaughtEvent;
use crate::pursuit::resources::{Nessie, PursuitTuning};

/// Nessie closes in at a steady pace.
pub(crate) fn advance_nessie(
    time: Res<Time>,
    tuning: Res<PursuitTuning>,
    mut nessie: ResMut<Nessie>,
) {
    nessie.advance(tuning.speed * time.delta_secs());
}

/// Every step puts a little more distance between the user and Nessie.
pub(crate) fn push_back_on_steps(
    mut samples: MessageReader<StepSampleEvent>,
    tuning: Res<PursuitTuning>,
    mut nessie: ResMut<Nessie>,
) {
    for sample in samples.read() {
        nessie.push_back(sample.total_steps, tuning.push_back_per_step);
    }
}

/// Report a capture once the gap is closed. Checking the model's caught flag
/// keeps this from re-firing while the state transition is still pending.
pub(crate) fn detect_caught(
    nessie: Res<Nessie>,
    model: Res<StepModel>,
    mut events: MessageWriter<UserCaughtEvent>,
) {
    if model.caught || !nessie.has_caught_user() {
        return;
    }
    events.write(UserCaughtEvent {
        steps_taken: model.steps,
    });
}

/// Reset the chase for a new session.
pub(crate) fn initialize_pursuit(
    defaults: Res<SessionDefaults>,
    mut tuning: ResMut<PursuitTuning>,
    mut nessie: ResMut<Nessie>,
) {
    tuning.start_distance = defaults.nessie_start_distance;
    tuning.speed = defaults.nessie_speed;
    tuning.push_back_per_step = defaults.push_back_per_step;
    nessie.reset(tuning.start_distance);
}
