//! Content domain: session default definitions.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tunable defaults for a session, loaded from
/// `assets/data/session_defaults.ron` at startup.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct SessionDefaults {
    /// Target step count for the session
    pub step_goal: u32,
    /// How far behind the user Nessie starts, in meters
    pub nessie_start_distance: f32,
    /// How fast Nessie closes in, meters per second
    pub nessie_speed: f32,
    /// How far each step pushes Nessie back, in meters
    pub push_back_per_step: f32,
    /// Simulated walking cadence while the walk key is held
    pub cadence_steps_per_sec: f32,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            step_goal: 10_000,
            nessie_start_distance: 40.0,
            nessie_speed: 1.5,
            push_back_per_step: 0.02,
            cadence_steps_per_sec: 180.0,
        }
    }
}

impl SessionDefaults {
    /// Reject configurations that would make a session unwinnable or
    /// degenerate. Validation lives here at the config boundary; the model
    /// itself performs none.
    pub fn validate(&self) -> Result<(), String> {
        if self.step_goal == 0 {
            return Err("step_goal must be at least 1".to_string());
        }
        if self.nessie_start_distance <= 0.0 {
            return Err("nessie_start_distance must be positive".to_string());
        }
        if self.nessie_speed <= 0.0 {
            return Err("nessie_speed must be positive".to_string());
        }
        if self.push_back_per_step < 0.0 {
            return Err("push_back_per_step must not be negative".to_string());
        }
        if self.cadence_steps_per_sec <= 0.0 {
            return Err("cadence_steps_per_sec must be positive".to_string());
        }
        Ok(())
    }
}
