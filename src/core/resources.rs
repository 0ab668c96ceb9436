//! Core domain: session configuration resources.

use bevy::prelude::*;
use rand::Rng;

/// Seed for the session's reproducible randomness (cadence jitter).
/// Regenerated every time a session starts.
#[derive(Resource, Debug)]
pub struct SessionSeed(pub u64);

impl Default for SessionSeed {
    fn default() -> Self {
        Self(rand::rng().random())
    }
}
