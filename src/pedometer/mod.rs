//! Pedometer domain: simulated step source.
//!
//! Stands in for a real pedometer. Its only contract with the model is the
//! step sample stream: cumulative, non-decreasing totals within a session.

mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use resources::{CadenceJitter, Pedometer, PedometerTuning, WalkInput};

use bevy::prelude::*;

use crate::core::AppState;
use crate::pedometer::systems::{
    initialize_pedometer, publish_step_samples, read_walk_input, tick_pedometer,
};

pub struct PedometerPlugin;

impl Plugin for PedometerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Pedometer>()
            .init_resource::<PedometerTuning>()
            .init_resource::<CadenceJitter>()
            .init_resource::<WalkInput>()
            .add_systems(
                OnExit(AppState::NotStarted),
                // After the session controller has rolled the new seed
                initialize_pedometer.after(crate::core::initialize_session),
            )
            .add_systems(
                Update,
                (read_walk_input, tick_pedometer, publish_step_samples)
                    .chain()
                    .run_if(in_state(AppState::InProgress)),
            );
    }
}
