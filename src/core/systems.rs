//! Core domain: session flow systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::content::SessionDefaults;
use crate::core::resources::SessionSeed;
use crate::core::state::AppState;
use crate::model::{GoalAnnouncement, GoalReachedEvent, StepModel};
use crate::pursuit::UserCaughtEvent;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Space or Enter starts a session from the title screen.
pub(crate) fn start_session(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::Enter) {
        next_state.set(AppState::InProgress);
    }
}

/// Reset session state for a fresh run. Hangs off leaving the title state
/// rather than entering InProgress, since resuming from pause re-enters
/// InProgress and must not wipe progress.
pub(crate) fn initialize_session(
    defaults: Res<SessionDefaults>,
    mut seed: ResMut<SessionSeed>,
    mut model: ResMut<StepModel>,
    mut announcement: ResMut<GoalAnnouncement>,
) {
    seed.0 = rand::rng().random();
    model.restart(defaults.step_goal);
    announcement.announced = false;
    info!("Session started: goal {} steps, seed {}", model.goal, seed.0);
}

/// Escape toggles pause while a session is running.
pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    match state.get() {
        AppState::InProgress => next_state.set(AppState::Paused),
        AppState::Paused => next_state.set(AppState::InProgress),
        _ => {}
    }
}

/// Goal completion ends the session in success.
pub(crate) fn handle_goal_reached(
    mut events: MessageReader<GoalReachedEvent>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for event in events.read() {
        info!("Session complete at {} steps", event.steps);
        next_state.set(AppState::Completed);
    }
}

/// A capture ends the session in failure.
pub(crate) fn handle_capture(
    mut events: MessageReader<UserCaughtEvent>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for event in events.read() {
        info!("Nessie caught the user at {} steps", event.steps_taken);
        next_state.set(AppState::Caught);
    }
}
