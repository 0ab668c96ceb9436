//! Pursuit domain: capture event.

use bevy::ecs::message::Message;

/// Fired when Nessie closes the gap entirely. The pursuit module makes the
/// call; the model only records it.
#[derive(Debug)]
pub struct UserCaughtEvent {
    pub steps_taken: u32,
}

impl Message for UserCaughtEvent {}
