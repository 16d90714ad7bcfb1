//! Fitted normalization transforms and the fixed two-stage chain.
//!
//! Transforms are opaque fitted artifacts: per-feature parameters captured
//! at training time, applied identically at inference time. The chain
//! order (min-max first, standardization second) is part of the fitted
//! contract and must match training exactly; see
//! [`NormalizationChain::new`].

mod minmax;
mod standard;

pub use minmax::MinMaxScaler;
pub use standard::StandardScaler;

use crate::types::FeatureVector;
use crate::{CropcastError, Result};

/// A fitted, dimension-preserving numeric mapping.
///
/// Implementations own per-feature parameters and must reject input whose
/// dimensionality does not match the fitted parameter count; that signals
/// a version mismatch between the input schema and the loaded artifact.
pub trait FeatureTransform: Send + Sync {
    /// Stage name for error messages and logging.
    fn name(&self) -> &'static str;

    /// Number of features this transform was fitted for.
    fn dimensions(&self) -> usize;

    /// Map an input vector to an output vector of the same width.
    fn transform(&self, values: &[f64]) -> Result<Vec<f64>>;
}

/// Guard shared by implementations: input width must equal fitted width.
pub(crate) fn check_dimensions(transform: &dyn FeatureTransform, values: &[f64]) -> Result<()> {
    if values.len() != transform.dimensions() {
        return Err(CropcastError::Transform {
            stage: transform.name(),
            expected: transform.dimensions(),
            got: values.len(),
        });
    }
    Ok(())
}

/// The ordered two-stage normalization chain.
///
/// A pure function of its input: same vector plus same loaded artifacts
/// always yields the same output.
pub struct NormalizationChain {
    stages: [Box<dyn FeatureTransform>; 2],
}

impl NormalizationChain {
    /// Chain the two fitted scalers. The min-max scaler runs first and
    /// feeds the standardization scaler, exactly as during training.
    pub fn new(minmax: MinMaxScaler, standard: StandardScaler) -> Self {
        Self {
            stages: [Box::new(minmax), Box::new(standard)],
        }
    }

    /// Run the full chain over one feature vector.
    pub fn apply(&self, input: &FeatureVector) -> Result<FeatureVector> {
        let mut values = input.as_slice().to_vec();
        for stage in &self.stages {
            values = stage.transform(&values)?;
        }
        FeatureVector::from_slice(&values)
    }
}
