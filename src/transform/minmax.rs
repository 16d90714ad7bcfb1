//! Min-max scaling to the fitted value range.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FeatureTransform, check_dimensions};
use crate::{CropcastError, Result};

/// Fitted min-max scaler: maps each feature to `(x - min) / (max - min)`.
///
/// Values outside the fitted range are NOT clamped. Inference-time inputs
/// may legitimately fall outside what training saw, and the downstream
/// standardization stage was fitted on unclamped output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    min: Vec<f64>,
    max: Vec<f64>,
}

impl MinMaxScaler {
    /// Create a scaler from fitted per-feature minima and maxima.
    pub fn new(min: Vec<f64>, max: Vec<f64>) -> Result<Self> {
        Self { min, max }.validated()
    }

    /// Load a fitted scaler from a JSON artifact file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CropcastError::Configuration(format!("Failed to read scaler artifact {path:?}: {e}"))
        })?;
        let scaler: Self = serde_json::from_str(&content).map_err(|e| {
            CropcastError::Configuration(format!("Failed to parse scaler artifact {path:?}: {e}"))
        })?;
        scaler.validated()
    }

    fn validated(self) -> Result<Self> {
        if self.min.is_empty() || self.min.len() != self.max.len() {
            return Err(CropcastError::Configuration(format!(
                "min-max scaler has {} minima but {} maxima",
                self.min.len(),
                self.max.len()
            )));
        }
        Ok(self)
    }
}

impl FeatureTransform for MinMaxScaler {
    fn name(&self) -> &'static str {
        "min-max"
    }

    fn dimensions(&self) -> usize {
        self.min.len()
    }

    fn transform(&self, values: &[f64]) -> Result<Vec<f64>> {
        check_dimensions(self, values)?;
        Ok(values
            .iter()
            .zip(self.min.iter().zip(&self.max))
            .map(|(&x, (&min, &max))| {
                let range = max - min;
                // Constant features scale by 1, matching the fitted behavior
                if range == 0.0 { x - min } else { (x - min) / range }
            })
            .collect())
    }
}
