//! Pursuit domain: the Nessie chase.
//!
//! Owns the decision of when the user is caught. The model's caught flag is
//! written by the model module in response to [`UserCaughtEvent`]; nothing
//! here touches the model directly.

mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use events::UserCaughtEvent;
pub use resources::{Nessie, PursuitTuning};

use bevy::prelude::*;

use crate::core::AppState;
use crate::pursuit::systems::{
    advance_nessie, detect_caught, initialize_pursuit, push_back_on_steps,
};

pub struct PursuitPlugin;

impl Plugin for PursuitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Nessie>()
            .init_resource::<PursuitTuning>()
            .add_message::<UserCaughtEvent>()
            .add_systems(OnExit(AppState::NotStarted), initialize_pursuit)
            .add_systems(
                Update,
                (advance_nessie, push_back_on_steps, detect_caught)
                    .chain()
                    .run_if(in_state(AppState::InProgress)),
            );
    }
}
