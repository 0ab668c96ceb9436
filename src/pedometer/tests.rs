//! Pedometer domain: tests for step accumulation and publishing.

use super::{CadenceJitter, Pedometer, PedometerTuning};

// -----------------------------------------------------------------------------
// Accumulation
// -----------------------------------------------------------------------------

#[test]
fn test_advance_whole_steps() {
    let mut pedometer = Pedometer::default();
    pedometer.advance(3.0);
    assert_eq!(pedometer.total_steps, 3);
}

#[test]
fn test_advance_accumulates_fractions() {
    let mut pedometer = Pedometer::default();
    // Four frames of 0.3 steps each: one whole step, 0.2 carried
    for _ in 0..4 {
        pedometer.advance(0.3);
    }
    assert_eq!(pedometer.total_steps, 1);
    assert!(pedometer.fractional > 0.0 && pedometer.fractional < 1.0);
}

#[test]
fn test_advance_ignores_non_positive_amounts() {
    let mut pedometer = Pedometer::default();
    pedometer.advance(5.0);
    pedometer.advance(0.0);
    pedometer.advance(-10.0);
    assert_eq!(pedometer.total_steps, 5);
}

#[test]
fn test_total_is_monotonic() {
    let mut pedometer = Pedometer::default();
    let mut previous = 0;
    for amount in [0.4, 2.5, 0.0, 100.0, 0.9, 0.2] {
        pedometer.advance(amount);
        assert!(pedometer.total_steps >= previous);
        previous = pedometer.total_steps;
    }
}

// -----------------------------------------------------------------------------
// Publishing
// -----------------------------------------------------------------------------

#[test]
fn test_take_unpublished_only_on_change() {
    let mut pedometer = Pedometer::default();
    assert_eq!(pedometer.take_unpublished(), None);

    pedometer.advance(10.0);
    assert_eq!(pedometer.take_unpublished(), Some(10));
    assert_eq!(pedometer.take_unpublished(), None);

    pedometer.advance(0.5); // below one whole step, total unchanged
    assert_eq!(pedometer.take_unpublished(), None);

    pedometer.advance(0.5);
    assert_eq!(pedometer.take_unpublished(), Some(11));
}

#[test]
fn test_reset_clears_everything() {
    let mut pedometer = Pedometer::default();
    pedometer.advance(42.7);
    pedometer.take_unpublished();

    pedometer.reset();

    assert_eq!(pedometer.total_steps, 0);
    assert_eq!(pedometer.fractional, 0.0);
    assert_eq!(pedometer.take_unpublished(), None);
}

// -----------------------------------------------------------------------------
// Tuning and jitter
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_sane() {
    let tuning = PedometerTuning::default();
    assert!(tuning.cadence_steps_per_sec > 0.0);
    assert!(tuning.burst_steps > 0);
    assert!(tuning.jitter >= 0.0 && tuning.jitter < 1.0);
}

#[test]
fn test_reseed_is_reproducible() {
    use rand::Rng;

    let mut a = CadenceJitter::default();
    let mut b = CadenceJitter::default();
    a.reseed(1234);
    b.reseed(1234);

    let from_a: f32 = a.rng.random_range(-0.15..=0.15);
    let from_b: f32 = b.rng.random_range(-0.15..=0.15);
    assert_eq!(from_a, from_b);
}
