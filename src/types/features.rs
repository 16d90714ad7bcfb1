//! The canonical feature vector and its construction from raw input.

use serde_json::{Map, Value};

use crate::{CropcastError, Result};

/// Number of features the fitted artifacts were trained on.
pub const FEATURE_COUNT: usize = 7;

/// Canonical feature order. This is the single source of truth: it must
/// match the column order used when the scalers and classifier were fitted.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "N",
    "P",
    "K",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
];

/// An ordered, validated measurement vector for one request.
///
/// Immutable once built; created per request and discarded afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Build a vector from the seven named measurements.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        n: f64,
        p: f64,
        k: f64,
        temperature: f64,
        humidity: f64,
        ph: f64,
        rainfall: f64,
    ) -> Self {
        Self {
            values: [n, p, k, temperature, humidity, ph, rainfall],
        }
    }

    /// Build a vector from a raw JSON object, validating that every
    /// canonical field is present and numeric.
    ///
    /// Fields are read in canonical order regardless of the order they
    /// appear in the payload. Integers and floats are both accepted.
    pub fn from_json(payload: &Map<String, Value>) -> Result<Self> {
        let mut values = [0.0; FEATURE_COUNT];
        for (slot, name) in values.iter_mut().zip(FEATURE_NAMES) {
            let value = payload
                .get(name)
                .ok_or_else(|| CropcastError::MissingField(name.to_string()))?;
            *slot = value
                .as_f64()
                .ok_or_else(|| CropcastError::InvalidType(name.to_string()))?;
        }
        Ok(Self { values })
    }

    /// Re-wrap a scaled slice produced by the normalization chain.
    ///
    /// Fails if the slice is not exactly [`FEATURE_COUNT`] wide, which
    /// would mean a transform was not dimension-preserving.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let values: [f64; FEATURE_COUNT] =
            values
                .try_into()
                .map_err(|_| CropcastError::Transform {
                    stage: "chain",
                    expected: FEATURE_COUNT,
                    got: values.len(),
                })?;
        Ok(Self { values })
    }

    /// The values in canonical order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Map<String, Value> {
        json!({
            "N": 90, "P": 42, "K": 43,
            "temperature": 20.8, "humidity": 82.0,
            "ph": 6.5, "rainfall": 202.9
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn from_json_orders_fields_canonically() {
        let vector = FeatureVector::from_json(&valid_payload()).unwrap();
        assert_eq!(
            vector.as_slice(),
            &[90.0, 42.0, 43.0, 20.8, 82.0, 6.5, 202.9]
        );
    }

    #[test]
    fn from_json_accepts_integers_and_floats() {
        // N is an integer, temperature a float; both must convert
        let vector = FeatureVector::from_json(&valid_payload()).unwrap();
        assert_eq!(vector.as_slice()[0], 90.0);
        assert_eq!(vector.as_slice()[3], 20.8);
    }

    #[test]
    fn from_json_missing_field_names_the_key() {
        let mut payload = valid_payload();
        payload.remove("humidity");

        let err = FeatureVector::from_json(&payload).unwrap_err();
        assert!(
            matches!(&err, CropcastError::MissingField(name) if name == "humidity"),
            "expected MissingField(humidity), got: {err:?}"
        );
    }

    #[test]
    fn from_json_non_numeric_field_names_the_key() {
        let mut payload = valid_payload();
        payload.insert("ph".to_string(), json!("6.5"));

        let err = FeatureVector::from_json(&payload).unwrap_err();
        assert!(
            matches!(&err, CropcastError::InvalidType(name) if name == "ph"),
            "expected InvalidType(ph), got: {err:?}"
        );
    }

    #[test]
    fn from_slice_rejects_wrong_width() {
        let err = FeatureVector::from_slice(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            CropcastError::Transform {
                expected: FEATURE_COUNT,
                got: 2,
                ..
            }
        ));
    }
}
