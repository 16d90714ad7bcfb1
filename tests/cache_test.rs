//! Tests for the opt-in prediction cache.

use cropcast::{CacheConfig, MinMaxScaler, Pipeline, SoftmaxClassifier, StandardScaler};
use serde_json::{Map, Value, json};
use std::time::Duration;

fn cached_pipeline() -> Pipeline {
    Pipeline::builder()
        .minmax(MinMaxScaler::new(vec![0.0; 7], vec![100.0; 7]).unwrap())
        .standard(StandardScaler::new(vec![0.5; 7], vec![0.25; 7]).unwrap())
        .softmax(
            SoftmaxClassifier::new(
                vec!["rice".into(), "maize".into(), "chickpea".into()],
                vec![vec![1.0; 7], vec![0.5; 7], vec![0.0; 7]],
                vec![0.0, 0.0, 0.0],
            )
            .unwrap(),
        )
        .cache(CacheConfig::new().max_entries(64).ttl(Duration::from_secs(300)))
        .build()
        .unwrap()
}

fn payload(n: f64) -> Map<String, Value> {
    json!({
        "N": n, "P": 42, "K": 43,
        "temperature": 20.8, "humidity": 82.0,
        "ph": 6.5, "rainfall": 202.9
    })
    .as_object()
    .unwrap()
    .clone()
}

#[test]
fn cached_and_fresh_results_are_identical() {
    let pipeline = cached_pipeline();

    let fresh = pipeline.predict(&payload(90.0)).unwrap();
    let cached = pipeline.predict(&payload(90.0)).unwrap();
    assert_eq!(fresh, cached);
}

#[test]
fn different_inputs_do_not_share_entries() {
    let pipeline = cached_pipeline();

    let a = pipeline.predict(&payload(0.0)).unwrap();
    let b = pipeline.predict(&payload(100.0)).unwrap();
    // With these coefficients the winning probability moves with N
    assert_ne!(a, b);
}

#[test]
fn invalid_payloads_bypass_the_cache() {
    let pipeline = cached_pipeline();

    // Invalid first; must not poison anything for the valid retry
    let mut broken = payload(90.0);
    broken.remove("ph");
    assert!(pipeline.predict(&broken).is_err());

    assert!(pipeline.predict(&payload(90.0)).is_ok());
}

#[test]
fn cache_config_defaults_are_sensible() {
    let config = CacheConfig::default();
    assert_eq!(config.max_entries, 10_000);
    assert_eq!(config.ttl, Duration::from_secs(3600));
}
