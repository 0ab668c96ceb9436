//! Model domain: step-tracking state for the current session.

use bevy::prelude::*;

/// The session's step-tracking state. Collaborating systems write the fields
/// directly; goal completion is always computed from them, never stored.
#[derive(Resource, Debug, Default)]
pub struct StepModel {
    /// Cumulative steps taken this session
    pub steps: u32,
    /// Target step count for the session (0 = no goal configured yet)
    pub goal: u32,
    /// Whether Nessie has caught the user. The pursuit module decides;
    /// only the capture handler writes it.
    pub caught: bool,
}

impl StepModel {
    /// True when the step count meets or exceeds a configured goal.
    /// Recomputed on every call, so raising the goal mid-session can turn
    /// this back to false. A zero goal never counts as reached.
    pub fn goal_reached(&self) -> bool {
        self.goal > 0 && self.steps >= self.goal
    }

    /// Reset for a new session with the given starting goal.
    pub fn restart(&mut self, goal: u32) {
        self.steps = 0;
        self.goal = goal;
        self.caught = false;
    }
}

/// One-shot latch for the goal announcement. Only the announcement is
/// latched; the `goal_reached` predicate itself never is.
#[derive(Resource, Debug, Default)]
pub struct GoalAnnouncement {
    pub announced: bool,
}
