//! Pursuit domain: tests for chase distance and capture logic.

use super::{Nessie, PursuitTuning};

// -----------------------------------------------------------------------------
// Advance and push back
// -----------------------------------------------------------------------------

#[test]
fn test_advance_closes_distance() {
    let mut nessie = Nessie::default();
    let start = nessie.distance;

    nessie.advance(5.0);

    assert_eq!(nessie.distance, start - 5.0);
}

#[test]
fn test_push_back_uses_step_delta() {
    let mut nessie = Nessie {
        distance: 10.0,
        last_step_total: 100,
    };

    let delta = nessie.push_back(150, 0.1);

    assert_eq!(delta, 50);
    assert_eq!(nessie.distance, 15.0);
    assert_eq!(nessie.last_step_total, 150);
}

#[test]
fn test_push_back_repeated_total_is_no_op() {
    let mut nessie = Nessie {
        distance: 10.0,
        last_step_total: 100,
    };

    let delta = nessie.push_back(100, 0.1);

    assert_eq!(delta, 0);
    assert_eq!(nessie.distance, 10.0);
}

#[test]
fn test_push_back_tolerates_decreasing_total() {
    // The sensor contract says totals never decrease; if one does anyway,
    // treat it as no progress rather than teleporting Nessie.
    let mut nessie = Nessie {
        distance: 10.0,
        last_step_total: 100,
    };

    let delta = nessie.push_back(40, 0.1);

    assert_eq!(delta, 0);
    assert_eq!(nessie.distance, 10.0);
}

// -----------------------------------------------------------------------------
// Capture
// -----------------------------------------------------------------------------

#[test]
fn test_not_caught_while_distance_remains() {
    let nessie = Nessie {
        distance: 0.1,
        last_step_total: 0,
    };
    assert!(!nessie.has_caught_user());
}

#[test]
fn test_caught_at_zero_distance() {
    let nessie = Nessie {
        distance: 0.0,
        last_step_total: 0,
    };
    assert!(nessie.has_caught_user());
}

#[test]
fn test_caught_past_zero_distance() {
    let nessie = Nessie {
        distance: -3.0,
        last_step_total: 0,
    };
    assert!(nessie.has_caught_user());
}

#[test]
fn test_steps_can_outrun_capture() {
    let mut nessie = Nessie {
        distance: 1.0,
        last_step_total: 0,
    };

    nessie.advance(0.9);
    assert!(!nessie.has_caught_user());

    // A burst of steps buys room again
    nessie.push_back(100, 0.05);
    nessie.advance(2.0);
    assert!(!nessie.has_caught_user());
}

// -----------------------------------------------------------------------------
// Reset
// -----------------------------------------------------------------------------

#[test]
fn test_reset_restores_start_distance() {
    let mut nessie = Nessie::default();
    nessie.advance(100.0);
    nessie.push_back(5000, 0.02);

    nessie.reset(40.0);

    assert_eq!(nessie.distance, 40.0);
    assert_eq!(nessie.last_step_total, 0);
    assert!(!nessie.has_caught_user());
}

#[test]
fn test_default_tuning_is_sane() {
    let tuning = PursuitTuning::default();
    assert!(tuning.start_distance > 0.0);
    assert!(tuning.speed > 0.0);
    assert!(tuning.push_back_per_step >= 0.0);
}
