//! ONNX Runtime classifier backend.
//!
//! Loads an exported ONNX graph whose single input is the transformed
//! feature vector and whose output is one probability per class. Labels
//! come from a sidecar JSON array in the graph's output order.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::session::builder::GraphOptimizationLevel;
use ort::value::TensorRef;

use super::CropClassifier;
use crate::{CropcastError, Result};

/// Classifier backed by an ONNX Runtime session.
pub struct OnnxClassifier {
    // ort sessions take &mut for run; serialize access behind a lock
    session: Mutex<Session>,
    output_name: String,
    labels: Vec<String>,
}

impl OnnxClassifier {
    /// Load the ONNX graph and its label sidecar.
    pub fn from_files(
        model_path: impl AsRef<Path>,
        labels_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let labels = load_labels(labels_path.as_ref())?;
        let session = build_session(model_path.as_ref())?;
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| {
                CropcastError::Configuration("ONNX model defines no outputs".to_string())
            })?;
        Ok(Self {
            session: Mutex::new(session),
            output_name,
            labels,
        })
    }
}

impl CropClassifier for OnnxClassifier {
    fn name(&self) -> &str {
        "onnx"
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn predict_proba(&self, values: &[f64]) -> Result<Vec<f64>> {
        let input: Vec<f32> = values.iter().map(|&v| v as f32).collect();
        let shape = [1_usize, input.len()];
        let tensor = TensorRef::from_array_view((shape, input.as_slice()))
            .map_err(|e| CropcastError::Inference(format!("Failed to create input tensor: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| CropcastError::Inference("classifier session lock poisoned".to_string()))?;

        let outputs = session
            .run(ort::inputs![tensor])
            .map_err(|e| CropcastError::Inference(format!("ONNX inference failed: {e}")))?;

        let output = outputs.get(&self.output_name).ok_or_else(|| {
            CropcastError::Inference(format!("no '{}' output in ONNX result", self.output_name))
        })?;

        let (_shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| CropcastError::Inference(format!("Failed to extract output: {e}")))?;

        if data.len() != self.labels.len() {
            return Err(CropcastError::Inference(format!(
                "ONNX model produced {} probabilities for {} labels",
                data.len(),
                self.labels.len()
            )));
        }

        Ok(data.iter().map(|&p| p as f64).collect())
    }
}

/// Build an ONNX session for CPU execution.
fn build_session(model_path: &Path) -> Result<Session> {
    Session::builder()
        .map_err(|e| {
            CropcastError::Configuration(format!("Failed to create session builder: {e}"))
        })?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .map_err(|e| {
            CropcastError::Configuration(format!("Failed to set optimization level: {e}"))
        })?
        .commit_from_file(model_path)
        .map_err(|e| CropcastError::Configuration(format!("Failed to load ONNX model: {e}")))
}

/// Read the label sidecar: a JSON array of class names in output order.
fn load_labels(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CropcastError::Configuration(format!("Failed to read label sidecar {path:?}: {e}"))
    })?;
    let labels: Vec<String> = serde_json::from_str(&content).map_err(|e| {
        CropcastError::Configuration(format!("Failed to parse label sidecar {path:?}: {e}"))
    })?;
    if labels.is_empty() {
        return Err(CropcastError::Configuration(format!(
            "label sidecar {path:?} is empty"
        )));
    }
    Ok(labels)
}
