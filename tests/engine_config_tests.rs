use surface_rs::api::{InteractionInputBehavior, SurfaceEngine, SurfaceEngineConfig};
use surface_rs::core::{DEFAULT_EDGE_TOLERANCE, DEFAULT_MIN_DIMENSION};

#[test]
fn default_config_matches_documented_constants() {
    let config = SurfaceEngineConfig::default();
    assert_eq!(config.min_dimension, DEFAULT_MIN_DIMENSION);
    assert_eq!(config.edge_tolerance, DEFAULT_EDGE_TOLERANCE);
    assert_eq!(config.input_behavior, InteractionInputBehavior::default());
}

#[test]
fn config_round_trips_through_json() {
    let config = SurfaceEngineConfig {
        min_dimension: 12.0,
        edge_tolerance: 4.0,
        input_behavior: InteractionInputBehavior {
            drag_touch: false,
            ..InteractionInputBehavior::default()
        },
    };
    let json = serde_json::to_string(&config).expect("serialize");
    let back: SurfaceEngineConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, config);
}

#[test]
fn missing_fields_are_backfilled_with_defaults() {
    let config: SurfaceEngineConfig = serde_json::from_str("{}").expect("deserialize empty");
    assert_eq!(config, SurfaceEngineConfig::default());

    let config: SurfaceEngineConfig =
        serde_json::from_str(r#"{"min_dimension": 9.0}"#).expect("deserialize partial");
    assert_eq!(config.min_dimension, 9.0);
    assert_eq!(config.edge_tolerance, DEFAULT_EDGE_TOLERANCE);
}

#[test]
fn engine_rejects_non_positive_minimum_dimension() {
    let config = SurfaceEngineConfig {
        min_dimension: 0.0,
        ..SurfaceEngineConfig::default()
    };
    SurfaceEngine::new(config).expect_err("zero minimum must fail");

    let config = SurfaceEngineConfig {
        min_dimension: f64::NAN,
        ..SurfaceEngineConfig::default()
    };
    SurfaceEngine::new(config).expect_err("nan minimum must fail");
}

#[test]
fn engine_rejects_negative_or_non_finite_tolerance() {
    let config = SurfaceEngineConfig {
        edge_tolerance: -1.0,
        ..SurfaceEngineConfig::default()
    };
    SurfaceEngine::new(config).expect_err("negative tolerance must fail");

    let config = SurfaceEngineConfig {
        edge_tolerance: f64::INFINITY,
        ..SurfaceEngineConfig::default()
    };
    SurfaceEngine::new(config).expect_err("infinite tolerance must fail");
}

#[test]
fn zero_tolerance_is_a_valid_configuration() {
    let config = SurfaceEngineConfig {
        edge_tolerance: 0.0,
        ..SurfaceEngineConfig::default()
    };
    SurfaceEngine::new(config).expect("zero tolerance disables handles but is legal");
}
