//! Content domain: tests for defaults parsing and validation.

use std::path::Path;

use super::{SessionDefaults, load_session_defaults};

#[test]
fn test_built_in_defaults_are_valid() {
    assert!(SessionDefaults::default().validate().is_ok());
}

#[test]
fn test_parse_ron_defaults() {
    let source = r#"
SessionDefaults(
    step_goal: 5000,
    nessie_start_distance: 30.0,
    nessie_speed: 2.0,
    push_back_per_step: 0.05,
    cadence_steps_per_sec: 120.0,
)
"#;
    let defaults: SessionDefaults = ron::from_str(source).unwrap();
    assert_eq!(defaults.step_goal, 5000);
    assert_eq!(defaults.nessie_speed, 2.0);
    assert!(defaults.validate().is_ok());
}

#[test]
fn test_shipped_defaults_file_loads() {
    let defaults = load_session_defaults(Path::new("assets/data/session_defaults.ron"))
        .expect("shipped session_defaults.ron should parse and validate");
    assert!(defaults.step_goal > 0);
}

#[test]
fn test_load_missing_file_is_an_error() {
    let result = load_session_defaults(Path::new("assets/data/no_such_file.ron"));
    let error = result.unwrap_err();
    assert!(error.message.contains("IO error"));
}

#[test]
fn test_validate_rejects_zero_goal() {
    let defaults = SessionDefaults {
        step_goal: 0,
        ..SessionDefaults::default()
    };
    assert!(defaults.validate().is_err());
}

#[test]
fn test_validate_rejects_stationary_nessie() {
    let defaults = SessionDefaults {
        nessie_speed: 0.0,
        ..SessionDefaults::default()
    };
    assert!(defaults.validate().is_err());
}

#[test]
fn test_validate_rejects_negative_push_back() {
    let defaults = SessionDefaults {
        push_back_per_step: -0.1,
        ..SessionDefaults::default()
    };
    assert!(defaults.validate().is_err());
}
