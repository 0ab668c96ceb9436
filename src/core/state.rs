//! Core domain: session lifecycle states.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum AppState {
    #[default]
    NotStarted,
    InProgress,
    Paused,
    Completed,
    Caught,
}
