//! Builder for assembling pipeline instances.

use std::sync::Arc;

use super::Pipeline;
use crate::cache::{CacheConfig, PredictionCache};
use crate::classifier::{CropClassifier, SoftmaxClassifier};
use crate::transform::{MinMaxScaler, NormalizationChain, StandardScaler};
use crate::{CropcastError, Result};

/// Builder for assembling pipeline instances.
///
/// All three fitted artifacts are required; the cache is opt-in. Artifacts
/// are injected explicitly so tests can run the pipeline against fixture
/// parameters instead of production dumps.
pub struct PipelineBuilder {
    minmax: Option<MinMaxScaler>,
    standard: Option<StandardScaler>,
    classifier: Option<Arc<dyn CropClassifier>>,
    cache: Option<CacheConfig>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            minmax: None,
            standard: None,
            classifier: None,
            cache: None,
        }
    }

    /// Set the fitted min-max scaler (first chain stage).
    pub fn minmax(mut self, scaler: MinMaxScaler) -> Self {
        self.minmax = Some(scaler);
        self
    }

    /// Set the fitted standardization scaler (second chain stage).
    pub fn standard(mut self, scaler: StandardScaler) -> Self {
        self.standard = Some(scaler);
        self
    }

    /// Set the classifier backend.
    pub fn classifier(mut self, classifier: Arc<dyn CropClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Set a softmax-linear classifier artifact as the backend.
    pub fn softmax(self, classifier: SoftmaxClassifier) -> Self {
        self.classifier(Arc::new(classifier))
    }

    /// Set an ONNX classifier as the backend.
    #[cfg(feature = "onnx")]
    pub fn onnx(self, classifier: crate::classifier::OnnxClassifier) -> Self {
        self.classifier(Arc::new(classifier))
    }

    /// Enable the prediction cache.
    pub fn cache(mut self, config: CacheConfig) -> Self {
        self.cache = Some(config);
        self
    }

    /// Build the pipeline.
    ///
    /// Fails with a configuration error if any fitted artifact is
    /// missing; an unusable pipeline must not start serving.
    pub fn build(self) -> Result<Pipeline> {
        let minmax = self.minmax.ok_or_else(|| {
            CropcastError::Configuration("no min-max scaler artifact configured".to_string())
        })?;
        let standard = self.standard.ok_or_else(|| {
            CropcastError::Configuration("no standard scaler artifact configured".to_string())
        })?;
        let classifier = self.classifier.ok_or_else(|| {
            CropcastError::Configuration("no classifier artifact configured".to_string())
        })?;

        Ok(Pipeline {
            chain: NormalizationChain::new(minmax, standard),
            classifier,
            cache: self.cache.map(|config| PredictionCache::new(&config)),
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
