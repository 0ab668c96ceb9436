//! Model domain: session step-tracking state and goal completion.

mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{GoalReachedEvent, StepSampleEvent};
pub use resources::{GoalAnnouncement, StepModel};

use bevy::prelude::*;

use crate::core::AppState;
use crate::model::systems::{apply_step_samples, detect_goal_completion, handle_user_caught};

pub struct ModelPlugin;

impl Plugin for ModelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StepModel>()
            .init_resource::<GoalAnnouncement>()
            .add_message::<StepSampleEvent>()
            .add_message::<GoalReachedEvent>()
            .add_systems(
                Update,
                (apply_step_samples, detect_goal_completion)
                    .chain()
                    .run_if(in_state(AppState::InProgress)),
            )
            // Not gated on state: the capture event may land on the same frame
            // the session controller switches out of InProgress.
            .add_systems(Update, handle_user_caught);
    }
}
