//! Telemetry metric name constants.
//!
//! Centralised metric names for cropcast operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `cropcast_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `status` — outcome: "ok" or "error"

/// Total predictions served through the pipeline.
///
/// Labels: `status` ("ok" | "error").
pub const PREDICTIONS_TOTAL: &str = "cropcast_predictions_total";

/// Prediction duration in seconds, end to end through all stages.
pub const PREDICTION_DURATION_SECONDS: &str = "cropcast_prediction_duration_seconds";

/// Total prediction cache hits.
pub const CACHE_HITS_TOTAL: &str = "cropcast_cache_hits_total";

/// Total prediction cache misses.
pub const CACHE_MISSES_TOTAL: &str = "cropcast_cache_misses_total";
