//! Model domain: unit tests for step-tracking state transitions.

use super::{GoalAnnouncement, StepModel};

// -----------------------------------------------------------------------------
// Construction defaults
// -----------------------------------------------------------------------------

#[test]
fn test_new_model_goal_not_reached() {
    let model = StepModel::default();
    assert!(!model.goal_reached());
}

#[test]
fn test_new_model_not_caught() {
    let model = StepModel::default();
    assert!(!model.caught);
}

#[test]
fn test_new_model_zeroed() {
    let model = StepModel::default();
    assert_eq!(model.steps, 0);
    assert_eq!(model.goal, 0);
}

// -----------------------------------------------------------------------------
// Goal predicate
// -----------------------------------------------------------------------------

#[test]
fn test_goal_reached_when_steps_meet_goal() {
    let mut model = StepModel::default();
    model.goal = 1000;
    model.steps = 1000;
    assert!(model.goal_reached());
}

#[test]
fn test_goal_reached_matches_comparison_for_positive_goals() {
    for goal in [1u32, 10, 1000, u32::MAX] {
        for steps in [0u32, 1, 9, 10, 999, 1000, 1001, u32::MAX] {
            let mut model = StepModel::default();
            model.goal = goal;
            model.steps = steps;
            assert_eq!(
                model.goal_reached(),
                steps >= goal,
                "goal={goal} steps={steps}"
            );
        }
    }
}

#[test]
fn test_goal_reached_monotonic_across_threshold() {
    let mut model = StepModel::default();
    model.goal = 1000;

    model.steps = 999;
    assert!(!model.goal_reached());

    model.steps = 1000;
    assert!(model.goal_reached());

    model.steps = 1001;
    assert!(model.goal_reached());
}

#[test]
fn test_goal_reached_regresses_when_goal_is_raised() {
    let mut model = StepModel::default();
    model.goal = 1000;
    model.steps = 1000;
    assert!(model.goal_reached());

    // Completion is recomputed, not latched
    model.goal = 2000;
    assert!(!model.goal_reached());
}

#[test]
fn test_goal_reached_idempotent_under_repeated_assignment() {
    let mut model = StepModel::default();
    model.goal = 500;

    model.steps = 500;
    let first = model.goal_reached();
    model.steps = 500;
    assert_eq!(model.goal_reached(), first);
}

#[test]
fn test_zero_goal_is_never_reached() {
    let mut model = StepModel::default();
    assert!(!model.goal_reached());

    model.steps = 10_000;
    assert!(!model.goal_reached());
}

// -----------------------------------------------------------------------------
// Caught flag independence
// -----------------------------------------------------------------------------

#[test]
fn test_caught_does_not_affect_steps_or_goal() {
    let mut model = StepModel::default();
    model.goal = 1000;
    model.steps = 400;

    model.caught = true;

    assert_eq!(model.steps, 400);
    assert_eq!(model.goal, 1000);
    assert!(!model.goal_reached());
}

#[test]
fn test_caught_and_goal_reached_can_coexist() {
    let mut model = StepModel::default();
    model.goal = 100;
    model.steps = 100;
    model.caught = true;

    assert!(model.goal_reached());
    assert!(model.caught);
}

// -----------------------------------------------------------------------------
// Session restart
// -----------------------------------------------------------------------------

#[test]
fn test_restart_resets_state_and_applies_goal() {
    let mut model = StepModel::default();
    model.goal = 1000;
    model.steps = 1000;
    model.caught = true;

    model.restart(10_000);

    assert_eq!(model.steps, 0);
    assert_eq!(model.goal, 10_000);
    assert!(!model.caught);
    assert!(!model.goal_reached());
}

// -----------------------------------------------------------------------------
// Goal announcement latch
// -----------------------------------------------------------------------------

#[test]
fn test_goal_announcement_default_not_announced() {
    let announcement = GoalAnnouncement::default();
    assert!(!announcement.announced);
}
