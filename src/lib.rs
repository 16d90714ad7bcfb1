//! Cropcast - crop recommendation inference with risk-tiered rankings
//!
//! This crate turns seven raw soil/climate measurements into a ranked,
//! labeled recommendation by running a fixed inference pipeline: feature
//! validation, a strictly ordered two-stage normalization chain, a fitted
//! classifier, and top-3 risk ranking. The fitted artifacts are opaque:
//! any backend satisfying [`FeatureTransform`] and [`CropClassifier`] is
//! interchangeable.
//!
//! # Example
//!
//! ```rust
//! use cropcast::{MinMaxScaler, Pipeline, SoftmaxClassifier, StandardScaler};
//!
//! fn main() -> cropcast::Result<()> {
//!     let pipeline = Pipeline::builder()
//!         .minmax(MinMaxScaler::new(vec![0.0; 7], vec![1.0; 7])?)
//!         .standard(StandardScaler::new(vec![0.5; 7], vec![0.5; 7])?)
//!         .softmax(SoftmaxClassifier::new(
//!             vec!["rice".into(), "maize".into(), "chickpea".into()],
//!             vec![vec![0.5; 7], vec![0.0; 7], vec![-0.5; 7]],
//!             vec![0.0, 0.0, 0.0],
//!         )?)
//!         .build()?;
//!
//!     let payload = serde_json::json!({
//!         "N": 90, "P": 42, "K": 43,
//!         "temperature": 20.8, "humidity": 82.0,
//!         "ph": 6.5, "rainfall": 202.9
//!     });
//!     let report = pipeline
//!         .predict(payload.as_object().unwrap())
//!         .expect("valid payload");
//!
//!     println!("{}", report.low_risk);
//!     Ok(())
//! }
//! ```

mod cache;
pub mod classifier;
pub mod error;
pub mod pipeline;
pub mod ranker;
#[cfg(feature = "server")]
pub mod server;
pub mod telemetry;
pub mod transform;
pub mod types;
mod version;

// Re-export main types at crate root
pub use cache::CacheConfig;
pub use classifier::{CropClassifier, SoftmaxClassifier};
pub use error::{CropcastError, Result};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use transform::{FeatureTransform, MinMaxScaler, NormalizationChain, StandardScaler};
pub use version::PKG_VERSION;

// Re-export classifier backends behind their features
#[cfg(feature = "onnx")]
pub use classifier::OnnxClassifier;

// Re-export all types
pub use types::{
    ClassProbability, Distribution, FEATURE_COUNT, FEATURE_NAMES, FeatureVector, PredictionError,
    RankedCrop, RiskRanking, RiskReport, RiskTier,
};
