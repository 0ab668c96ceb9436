//! Model domain: step sample and goal completion events.

use bevy::ecs::message::Message;

/// Cumulative step count sample from the step source. Totals never decrease
/// within a session; that contract belongs to the source, not the model.
#[derive(Debug)]
pub struct StepSampleEvent {
    pub total_steps: u32,
}

impl Message for StepSampleEvent {}

/// Fired once per session, the first time the step count meets the goal.
#[derive(Debug)]
pub struct GoalReachedEvent {
    pub steps: u32,
}

impl Message for GoalReachedEvent {}
