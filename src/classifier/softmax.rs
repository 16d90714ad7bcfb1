//! Linear classifier with a softmax decision function.
//!
//! The default artifact backend: a coefficient matrix and intercepts
//! exported from the fitted model, evaluated as `softmax(Wx + b)`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CropClassifier;
use crate::{CropcastError, Result};

/// Fitted linear classifier producing a softmax probability distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftmaxClassifier {
    labels: Vec<String>,
    /// One coefficient row per label, one column per feature.
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl SoftmaxClassifier {
    /// Create a classifier from fitted parameters.
    pub fn new(
        labels: Vec<String>,
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    ) -> Result<Self> {
        Self {
            labels,
            coefficients,
            intercepts,
        }
        .validated()
    }

    /// Load a fitted classifier from a JSON artifact file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CropcastError::Configuration(format!(
                "Failed to read classifier artifact {path:?}: {e}"
            ))
        })?;
        let classifier: Self = serde_json::from_str(&content).map_err(|e| {
            CropcastError::Configuration(format!(
                "Failed to parse classifier artifact {path:?}: {e}"
            ))
        })?;
        classifier.validated()
    }

    /// Number of features the model was fitted for.
    pub fn feature_count(&self) -> usize {
        self.coefficients.first().map_or(0, Vec::len)
    }

    fn validated(self) -> Result<Self> {
        if self.labels.is_empty() {
            return Err(CropcastError::Configuration(
                "classifier artifact has no labels".to_string(),
            ));
        }
        if self.coefficients.len() != self.labels.len()
            || self.intercepts.len() != self.labels.len()
        {
            return Err(CropcastError::Configuration(format!(
                "classifier artifact has {} labels, {} coefficient rows, {} intercepts",
                self.labels.len(),
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }
        let width = self.feature_count();
        if width == 0 || self.coefficients.iter().any(|row| row.len() != width) {
            return Err(CropcastError::Configuration(
                "classifier artifact has ragged or empty coefficient rows".to_string(),
            ));
        }
        Ok(self)
    }
}

impl CropClassifier for SoftmaxClassifier {
    fn name(&self) -> &str {
        "softmax-linear"
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn predict_proba(&self, values: &[f64]) -> Result<Vec<f64>> {
        if values.len() != self.feature_count() {
            return Err(CropcastError::Inference(format!(
                "classifier fitted for {} features, input has {}",
                self.feature_count(),
                values.len()
            )));
        }

        let logits: Vec<f64> = self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, &intercept)| {
                row.iter().zip(values).map(|(&w, &x)| w * x).sum::<f64>() + intercept
            })
            .collect();

        Ok(softmax(&logits))
    }
}

/// Numerically stable softmax.
fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|x| x / sum).collect()
}
