//! Standardization to zero mean and unit variance.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FeatureTransform, check_dimensions};
use crate::{CropcastError, Result};

/// Fitted standardization scaler: maps each feature to `(x - mean) / std`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl StandardScaler {
    /// Create a scaler from fitted per-feature means and standard deviations.
    pub fn new(mean: Vec<f64>, std: Vec<f64>) -> Result<Self> {
        Self { mean, std }.validated()
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
        if self.mean.is_empty() || self.mean.len() != self.std.len() {
            return Err(CropcastError::Configuration(format!(
                "standard scaler has {} means but {} deviations",
                self.mean.len(),
                self.std.len()
            )));
        }
        Ok(self)
    }
}

impl FeatureTransform for StandardScaler {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn dimensions(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, values: &[f64]) -> Result<Vec<f64>> {
        check_dimensions(self, values)?;
        Ok(values
            .iter()
            .zip(self.mean.iter().zip(&self.std))
            .map(|(&x, (&mean, &std))| {
                // Zero-variance features scale by 1, matching the fitted behavior
                if std == 0.0 { x - mean } else { (x - mean) / std }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_and_scales() {
        let scaler = StandardScaler::new(vec![10.0, 0.0], vec![2.0, 4.0]).unwrap();
        let out = scaler.transform(&[14.0, -2.0]).unwrap();
        assert_eq!(out, vec![2.0, -0.5]);
    }

    #[test]
    fn zero_variance_feature_passes_through_centered() {
        let scaler = StandardScaler::new(vec![5.0], vec![0.0]).unwrap();
        assert_eq!(scaler.transform(&[8.0]).unwrap(), vec![3.0]);
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let scaler = StandardScaler::new(vec![0.0; 7], vec![1.0; 7]).unwrap();
        let err = scaler.transform(&[1.0; 4]).unwrap_err();
        assert!(matches!(
            err,
            CropcastError::Transform {
                stage: "standard",
                expected: 7,
                got: 4,
            }
        ));
    }

    #[test]
    fn rejects_mismatched_parameter_lengths() {
        let err = StandardScaler::new(vec![0.0], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, CropcastError::Configuration(_)));
    }
}
