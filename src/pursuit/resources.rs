//! Pursuit domain: Nessie's chase state.

use bevy::prelude::*;

/// The pursuer. Distance is how far behind the user she is, in meters;
/// the session ends in capture when it reaches zero.
#[derive(Resource, Debug)]
pub struct Nessie {
    pub distance: f32,
    /// Last cumulative step total seen, for computing per-sample deltas
    pub last_step_total: u32,
}

impl Default for Nessie {
    fn default() -> Self {
        Self {
            distance: 40.0,
            last_step_total: 0,
        }
    }
}

impl Nessie {
    /// Close in by the given amount.
    pub fn advance(&mut self, meters: f32) {
        self.distance -= meters;
    }

    /// Fall back in response to a new cumulative step total.
    /// Returns the step delta since the previous sample.
    pub fn push_back(&mut self, total_steps: u32, per_step: f32) -> u32 {
        let delta = total_steps.saturating_sub(self.last_step_total);
        self.last_step_total = total_steps;
        self.distance += delta as f32 * per_step;
        delta
    }

    pub fn has_caught_user(&self) -> bool {
        self.distance <= 0.0
    }

    pub fn reset(&mut self, start_distance: f32) {
        self.distance = start_distance;
        self.last_step_total = 0;
    }
}

/// Chase tuning, copied from session defaults at session start.
#[derive(Resource, Debug, Clone)]
pub struct PursuitTuning {
    pub start_distance: f32,
    pub speed: f32,
    pub push_back_per_step: f32,
}

impl Default for PursuitTuning {
    fn default() -> Self {
        Self {
            start_distance: 40.0,
            speed: 1.5,
            push_back_per_step: 0.02,
        }
    }
}
