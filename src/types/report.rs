//! Wire-level success and failure shapes.

use serde::{Deserialize, Serialize};

use super::ranking::RiskRanking;

/// The outbound success mapping: exactly three tier keys, each holding a
/// `"<label> (<probability>)"` string with the probability at two decimal
/// places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReport {
    #[serde(rename = "Low Risk")]
    pub low_risk: String,
    #[serde(rename = "Medium Risk")]
    pub medium_risk: String,
    #[serde(rename = "High Risk")]
    pub high_risk: String,
}

impl From<&RiskRanking> for RiskReport {
    fn from(ranking: &RiskRanking) -> Self {
        let [low, medium, high] = ranking.entries();
        Self {
            low_risk: format_entry(&low.label, low.probability),
            medium_risk: format_entry(&medium.label, medium.probability),
            high_risk: format_entry(&high.label, high.probability),
        }
    }
}

/// Format one ranked entry as `"<label> (<probability>)"`.
pub(crate) fn format_entry(label: &str, probability: f64) -> String {
    format!("{label} ({:.2})", round_half_away(probability))
}

/// Round to two decimal digits, ties away from zero.
///
/// `f64::round` rounds half away from zero, which is the contract here;
/// the default `{:.2}` formatting alone rounds ties to even.
fn round_half_away(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The outbound failure mapping: a single `error` key with a descriptive
/// message. The transport collaborator attaches the status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct PredictionError {
    pub error: String,
}

impl PredictionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<crate::CropcastError> for PredictionError {
    fn from(err: crate::CropcastError) -> Self {
        Self::new(err.to_string())
    }
}
