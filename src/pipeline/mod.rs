//! The inference pipeline orchestrator.
//!
//! Composes feature building, the normalization chain, classification,
//! risk ranking, and formatting into a single `predict` call, and owns the
//! translation of stage errors into the uniform wire-level error.

mod builder;

pub use builder::PipelineBuilder;

use std::sync::Arc;
use std::time::Instant;

use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::Result;
use crate::cache::PredictionCache;
use crate::classifier::CropClassifier;
use crate::ranker;
use crate::telemetry;
use crate::transform::NormalizationChain;
use crate::types::{FeatureVector, PredictionError, RiskReport};

/// The assembled inference pipeline.
///
/// Holds the fitted artifacts loaded at startup; strictly read-only
/// afterwards, so one instance serves unlimited concurrent `predict`
/// calls without coordination. Build with [`Pipeline::builder`].
pub struct Pipeline {
    chain: NormalizationChain,
    classifier: Arc<dyn CropClassifier>,
    cache: Option<PredictionCache>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("cache", &self.cache.is_some())
            .finish_non_exhaustive()
    }
}

impl Pipeline {
    /// Create a new builder for assembling a pipeline.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Run the full pipeline over one raw request payload.
    ///
    /// Returns either the three-tier report or a uniform
    /// [`PredictionError`] carrying the failing stage's message, never
    /// both and never a panic. No stage is retried: every failure is
    /// either bad input or a broken deployment, and retrying with
    /// identical input cannot succeed.
    #[instrument(skip(self, payload))]
    pub fn predict(
        &self,
        payload: &Map<String, Value>,
    ) -> std::result::Result<RiskReport, PredictionError> {
        let start = Instant::now();
        let result = self.run(payload);
        Self::record_prediction(start, result.is_ok());

        match &result {
            Ok(report) => info!(recommended = %report.low_risk, "prediction served"),
            Err(err) => debug!(%err, "prediction failed"),
        }

        result.map_err(PredictionError::from)
    }

    /// The classifier backend serving this pipeline.
    pub fn classifier(&self) -> &dyn CropClassifier {
        self.classifier.as_ref()
    }

    fn run(&self, payload: &Map<String, Value>) -> Result<RiskReport> {
        let features = FeatureVector::from_json(payload)?;

        // Cache only after validation: invalid payloads never get keys
        let key = self
            .cache
            .as_ref()
            .map(|_| PredictionCache::key(&features));
        if let (Some(cache), Some(key)) = (&self.cache, key)
            && let Some(report) = cache.get(key)
        {
            return Ok(report);
        }

        let transformed = self.chain.apply(&features)?;
        let distribution = self.classifier.classify(&transformed)?;
        let ranking = ranker::rank(&distribution)?;
        let report = RiskReport::from(&ranking);

        if let (Some(cache), Some(key)) = (&self.cache, key) {
            cache.insert(key, report.clone());
        }

        Ok(report)
    }

    fn record_prediction(start: Instant, ok: bool) {
        let status = if ok { "ok" } else { "error" };
        metrics::counter!(telemetry::PREDICTIONS_TOTAL, "status" => status).increment(1);
        metrics::histogram!(telemetry::PREDICTION_DURATION_SECONDS)
            .record(start.elapsed().as_secs_f64());
    }
}
