//! UI domain: HUD elements and session overlays.

mod caught;
mod complete;
mod hud_nessie;
mod hud_steps;
mod pause;
mod start;

use bevy::prelude::*;

use crate::core::AppState;
use crate::ui::caught::{cleanup_caught_screen, handle_caught_retry, spawn_caught_screen};
use crate::ui::complete::{
    cleanup_complete_screen, handle_complete_restart, spawn_complete_screen,
};
use crate::ui::hud_nessie::{spawn_nessie_hud, update_nessie_hud};
use crate::ui::hud_steps::{spawn_step_hud, update_step_hud};
use crate::ui::pause::{cleanup_pause_overlay, spawn_pause_overlay};
use crate::ui::start::{cleanup_start_screen, spawn_start_screen};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_step_hud, spawn_nessie_hud))
            .add_systems(Update, (update_step_hud, update_nessie_hud))
            .add_systems(OnEnter(AppState::NotStarted), spawn_start_screen)
            .add_systems(OnExit(AppState::NotStarted), cleanup_start_screen)
            .add_systems(OnEnter(AppState::Paused), spawn_pause_overlay)
            .add_systems(OnExit(AppState::Paused), cleanup_pause_overlay)
            .add_systems(OnEnter(AppState::Caught), spawn_caught_screen)
            .add_systems(OnExit(AppState::Caught), cleanup_caught_screen)
            .add_systems(OnEnter(AppState::Completed), spawn_complete_screen)
            .add_systems(OnExit(AppState::Completed), cleanup_complete_screen)
            .add_systems(
                Update,
                handle_caught_retry.run_if(in_state(AppState::Caught)),
            )
            .add_systems(
                Update,
                handle_complete_restart.run_if(in_state(AppState::Completed)),
            );
    }
}
