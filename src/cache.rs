//! Opt-in cache for finished predictions.
//!
//! The pipeline is a pure function of its input and the loaded artifacts,
//! so a finished [`RiskReport`] can be replayed for a repeated measurement
//! vector. The cache sits inside [`Pipeline`](crate::Pipeline), after
//! feature validation and before the normalization chain, so invalid
//! input never reaches it. Keyed on a content hash of the seven feature
//! bit patterns; hit/miss counters are emitted via `metrics`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use moka::sync::Cache;

use crate::telemetry;
use crate::types::{FeatureVector, RiskReport};

/// Configuration for the prediction cache.
///
/// Pass to [`PipelineBuilder::cache()`](crate::PipelineBuilder::cache) to
/// activate. Without this, no cache is allocated (zero overhead).
///
/// ```rust
/// # use cropcast::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new()
///     .max_entries(10_000)
///     .ttl(Duration::from_secs(3600));
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached entries. Default: 10,000.
    pub max_entries: u64,
    /// Time-to-live for cached entries. Default: 1 hour.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
            ttl: Duration::from_secs(3600),
        }
    }
}

impl CacheConfig {
    /// Create a new config with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of cached entries.
    pub fn max_entries(mut self, n: u64) -> Self {
        self.max_entries = n;
        self
    }

    /// Set the time-to-live for cached entries.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// In-memory LRU + TTL cache of finished reports.
pub(crate) struct PredictionCache {
    cache: Cache<u64, RiskReport>,
}

impl PredictionCache {
    pub(crate) fn new(config: &CacheConfig) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(config.max_entries)
                .time_to_live(config.ttl)
                .build(),
        }
    }

    /// Content hash of a validated feature vector.
    ///
    /// Hashes raw bit patterns, so `-0.0` and `0.0` are distinct keys.
    /// Harmless, they produce identical reports anyway.
    pub(crate) fn key(features: &FeatureVector) -> u64 {
        let mut hasher = DefaultHasher::new();
        for value in features.as_slice() {
            value.to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }

    pub(crate) fn get(&self, key: u64) -> Option<RiskReport> {
        match self.cache.get(&key) {
            Some(report) => {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
                Some(report)
            }
            None => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
                None
            }
        }
    }

    pub(crate) fn insert(&self, key: u64, report: RiskReport) {
        self.cache.insert(key, report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RiskReport {
        RiskReport {
            low_risk: "rice (0.60)".to_string(),
            medium_risk: "maize (0.30)".to_string(),
            high_risk: "chickpea (0.10)".to_string(),
        }
    }

    #[test]
    fn round_trips_a_report() {
        let cache = PredictionCache::new(&CacheConfig::new());
        let key = PredictionCache::key(&FeatureVector::new(
            90.0, 42.0, 43.0, 20.8, 82.0, 6.5, 202.9,
        ));

        assert!(cache.get(key).is_none());
        cache.insert(key, report());
        assert_eq!(cache.get(key), Some(report()));
    }

    #[test]
    fn distinct_vectors_hash_to_distinct_keys() {
        let a = PredictionCache::key(&FeatureVector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0));
        let b = PredictionCache::key(&FeatureVector::new(7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0));
        assert_ne!(a, b);
    }

    #[test]
    fn identical_vectors_hash_identically() {
        let a = PredictionCache::key(&FeatureVector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0));
        let b = PredictionCache::key(&FeatureVector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0));
        assert_eq!(a, b);
    }
}
