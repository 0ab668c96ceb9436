//! Core domain: session lifecycle and flow wiring.

mod resources;
mod state;
mod systems;

pub use resources::SessionSeed;
pub use state::AppState;

pub(crate) use systems::initialize_session;

use bevy::prelude::*;

use crate::core::systems::{
    handle_capture, handle_goal_reached, setup_camera, start_session, toggle_pause,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<SessionSeed>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnExit(AppState::NotStarted), initialize_session)
            .add_systems(
                Update,
                start_session.run_if(in_state(AppState::NotStarted)),
            )
            .add_systems(Update, toggle_pause)
            // Chained so a capture on the same frame as goal completion wins
            .add_systems(Update, (handle_goal_reached, handle_capture).chain());
    }
}
