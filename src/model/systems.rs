//! Model domain: systems applying step samples and detecting goal completion.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::model::events::{GoalReachedEvent, StepSampleEvent};
use crate::model::resources::{GoalAnnouncement, StepModel};
use crate::pursuit::UserCaughtEvent;

/// Write incoming cumulative step samples into the model. Plain assignment,
/// no clamping, no side effects.
pub(crate) fn apply_step_samples(
    mut samples: MessageReader<StepSampleEvent>,
    mut model: ResMut<StepModel>,
) {
    for sample in samples.read() {
        model.steps = sample.total_steps;
    }
}

/// Announce the first time the goal is met this session.
pub(crate) fn detect_goal_completion(
    model: Res<StepModel>,
    mut announcement: ResMut<GoalAnnouncement>,
    mut events: MessageWriter<GoalReachedEvent>,
) {
    if announcement.announced || !model.goal_reached() {
        return;
    }
    announcement.announced = true;
    events.write(GoalReachedEvent { steps: model.steps });
    info!("Goal reached at {} steps (goal {})", model.steps, model.goal);
}

/// Latch the caught flag when the pursuit module reports a capture.
/// Touches nothing else on the model.
pub(crate) fn handle_user_caught(
    mut events: MessageReader<UserCaughtEvent>,
    mut model: ResMut<StepModel>,
) {
    for _ in events.read() {
        model.caught = true;
    }
}
