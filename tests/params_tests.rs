#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use flocksim::simulation::error::SimError;
use flocksim::simulation::params::{DeathPolicy, Params};

#[test]
fn test_default_params() {
    let params = Params::default();

    assert_eq!(params.separation_distance, 25.0);
    assert_eq!(params.neighbor_distance, 50.0);
    assert_eq!(params.crowd_distance, 80.0);
    assert_eq!(params.separation_weight, 1.5);
    assert_eq!(params.max_force, 0.05);
    assert_eq!((params.min_speed, params.max_speed), (1, 4));
    assert_eq!(params.original_life_span, 10_000);
    assert_eq!(params.color_lock_age, 50);
    assert_eq!(params.max_boids, 250);
    assert_eq!(params.on_death, DeathPolicy::None);
    assert_eq!(params.seed, None);
    assert_eq!(params.interaction_radius(), 80.0);
    assert!(params.validate().is_ok());
}

#[test]
fn test_partial_json_overrides_defaults() {
    let params = Params::from_json_str(r#"{"max_boids": 100, "on_death": "replace", "seed": 5}"#)
        .expect("valid params");

    assert_eq!(params.max_boids, 100);
    assert_eq!(params.on_death, DeathPolicy::Replace);
    assert_eq!(params.seed, Some(5));
    assert_eq!(params.neighbor_distance, 50.0);
}

#[test]
fn test_malformed_json_is_config_error() {
    let err = Params::from_json_str("{ max_boids: ").unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn test_inverted_speed_range_rejected() {
    let err = Params::from_json_str(r#"{"min_speed": 5, "max_speed": 2}"#).unwrap_err();
    assert!(matches!(err, SimError::InvalidParams(_)));
}

#[test]
fn test_invalid_values_rejected() {
    let cases = [
        Params {
            separation_distance: -1.0,
            ..Params::default()
        },
        Params {
            max_force: f64::NAN,
            ..Params::default()
        },
        Params {
            min_radius: 4.0,
            max_radius: 4.0,
            ..Params::default()
        },
        Params {
            original_life_span: 0,
            ..Params::default()
        },
        Params {
            isolated_decay: -3,
            ..Params::default()
        },
        Params {
            max_boids: 0,
            ..Params::default()
        },
    ];

    for params in cases {
        assert!(matches!(params.validate(), Err(SimError::InvalidParams(_))));
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Params::from_json_file("/nonexistent/flocksim/params.json").unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}
