//! Probability distribution over the classifier's label set.

use serde::{Deserialize, Serialize};

use crate::{CropcastError, Result};

/// One class label with its predicted probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub label: String,
    pub probability: f64,
}

/// A probability distribution in the classifier's native label order.
///
/// Invariant: one entry per class, probabilities non-negative and summing
/// to 1 within floating tolerance (guaranteed by classifier
/// implementations, not re-checked here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    entries: Vec<ClassProbability>,
}

impl Distribution {
    /// Pair labels with probabilities, preserving label order.
    ///
    /// Fails if the two sides disagree on class count, meaning the
    /// classifier produced a distribution that does not match its own
    /// label set.
    pub fn from_parts(labels: &[String], probabilities: Vec<f64>) -> Result<Self> {
        if labels.len() != probabilities.len() {
            return Err(CropcastError::Inference(format!(
                "classifier returned {} probabilities for {} labels",
                probabilities.len(),
                labels.len()
            )));
        }
        let entries = labels
            .iter()
            .cloned()
            .zip(probabilities)
            .map(|(label, probability)| ClassProbability { label, probability })
            .collect();
        Ok(Self { entries })
    }

    /// Entries in the classifier's native label order.
    pub fn entries(&self) -> &[ClassProbability] {
        &self.entries
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
