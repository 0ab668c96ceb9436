//! Pedometer domain: simulated step source state.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Cumulative step counter for the session. Totals never decrease; the
/// fractional accumulator keeps sub-step frames from being lost.
#[derive(Resource, Debug, Default)]
pub struct Pedometer {
    pub total_steps: u32,
    pub fractional: f32,
    pub last_published: u32,
}

impl Pedometer {
    /// Advance the counter by a (possibly fractional) number of steps.
    /// Non-positive amounts are ignored, preserving monotonicity.
    pub fn advance(&mut self, steps: f32) {
        if steps <= 0.0 {
            return;
        }
        self.fractional += steps;
        let whole = self.fractional.floor();
        self.fractional -= whole;
        self.total_steps = self.total_steps.saturating_add(whole as u32);
    }

    /// The cumulative total, if it changed since the last publish.
    pub fn take_unpublished(&mut self) -> Option<u32> {
        if self.total_steps == self.last_published {
            return None;
        }
        self.last_published = self.total_steps;
        Some(self.total_steps)
    }

    pub fn reset(&mut self) {
        self.total_steps = 0;
        self.fractional = 0.0;
        self.last_published = 0;
    }
}

/// Walk simulation tuning. Cadence is copied from session defaults at
/// session start.
#[derive(Resource, Debug, Clone)]
pub struct PedometerTuning {
    pub cadence_steps_per_sec: f32,
    /// Steps added by a single tap of the burst key
    pub burst_steps: u32,
    /// Relative cadence wobble, e.g. 0.15 = +/-15%
    pub jitter: f32,
}

impl Default for PedometerTuning {
    fn default() -> Self {
        Self {
            cadence_steps_per_sec: 180.0,
            burst_steps: 25,
            jitter: 0.15,
        }
    }
}

/// Sampled input for the walk simulation.
#[derive(Resource, Debug, Default)]
pub struct WalkInput {
    pub walking: bool,
    pub burst_just_pressed: bool,
}

/// Seeded rng for cadence jitter, reproducible per session.
#[derive(Resource, Debug)]
pub struct CadenceJitter {
    pub rng: ChaCha8Rng,
}

impl Default for CadenceJitter {
    fn default() -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }
}

impl CadenceJitter {
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }
}
