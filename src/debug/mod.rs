//! Debug tools for fast iteration: grant steps, force a capture, dump state.
//! Compiled only with the `dev-tools` feature.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::AppState;
use crate::model::StepModel;
use crate::pedometer::Pedometer;
use crate::pursuit::{Nessie, UserCaughtEvent};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (grant_steps, force_capture, dump_state).run_if(in_state(AppState::InProgress)),
        );
    }
}

/// F2: grant a chunk of steps without walking.
fn grant_steps(keyboard: Res<ButtonInput<KeyCode>>, mut pedometer: ResMut<Pedometer>) {
    if keyboard.just_pressed(KeyCode::F2) {
        pedometer.advance(1000.0);
        info!("debug: granted 1000 steps");
    }
}

/// F3: let Nessie win immediately.
fn force_capture(
    keyboard: Res<ButtonInput<KeyCode>>,
    model: Res<StepModel>,
    mut events: MessageWriter<UserCaughtEvent>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        info!("debug: forcing capture");
        events.write(UserCaughtEvent {
            steps_taken: model.steps,
        });
    }
}

/// F4: log model and chase internals.
fn dump_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    model: Res<StepModel>,
    nessie: Res<Nessie>,
) {
    if keyboard.just_pressed(KeyCode::F4) {
        info!(
            "debug: steps={} goal={} goal_reached={} caught={} nessie_distance={:.1}",
            model.steps,
            model.goal,
            model.goal_reached(),
            model.caught,
            nessie.distance
        );
    }
}
