//! Cropcast error types

/// Cropcast error types
#[derive(Debug, thiserror::Error)]
pub enum CropcastError {
    // Caller input errors
    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("field '{0}' is not numeric")]
    InvalidType(String),

    // Artifact/schema drift errors
    /// Input dimensionality does not match a scaler's fitted parameter
    /// count. Signals a version mismatch between the input schema and the
    /// loaded artifact; fatal, never retried.
    #[error("{stage} scaler fitted for {expected} features, input has {got}")]
    Transform {
        stage: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("inference error: {0}")]
    Inference(String),

    /// The classifier exposes fewer classes than the ranking needs.
    #[error("classifier exposes {available} classes, ranking requires at least 3")]
    InsufficientClasses { available: usize },

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CropcastError {
    /// Whether the caller can correct this error by fixing the request.
    ///
    /// Everything else indicates artifact or deployment drift that no
    /// amount of retrying with the same input will fix.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            CropcastError::MissingField(_) | CropcastError::InvalidType(_)
        )
    }
}

/// Result type alias for cropcast operations
pub type Result<T> = std::result::Result<T, CropcastError>;
