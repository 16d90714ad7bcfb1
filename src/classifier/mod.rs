//! Classifier adapters over opaque fitted models.
//!
//! Any backend exposing an ordered label set and a probability
//! distribution satisfies [`CropClassifier`]; concrete numeric
//! implementations are interchangeable behind it.

mod softmax;

#[cfg(feature = "onnx")]
mod onnx;

pub use softmax::SoftmaxClassifier;

#[cfg(feature = "onnx")]
pub use onnx::OnnxClassifier;

use crate::types::{Distribution, FeatureVector};
use crate::Result;

/// A fitted classifier over the canonical feature space.
///
/// Implementations hold read-only state loaded once at startup and must be
/// safe for unlimited concurrent invocation.
pub trait CropClassifier: Send + Sync {
    /// Backend name for logging/debugging.
    fn name(&self) -> &str;

    /// The fixed, ordered class label set (size ≥ 3 for ranking).
    fn labels(&self) -> &[String];

    /// Probability per class, in label order, non-negative, summing to 1.
    ///
    /// Fails with an inference error if the input dimensionality is
    /// rejected by the fitted model.
    fn predict_proba(&self, values: &[f64]) -> Result<Vec<f64>>;

    /// Run the decision function and pair the output with the label set.
    fn classify(&self, features: &FeatureVector) -> Result<Distribution> {
        let probabilities = self.predict_proba(features.as_slice())?;
        Distribution::from_parts(self.labels(), probabilities)
    }
}
