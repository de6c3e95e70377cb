//! Prediction error taxonomy

use super::model::{ArtifactError, InferenceError};

/// Why a prediction request produced no result
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictionError {
    /// Scaler or model never loaded; nothing was invoked
    #[error("prediction unavailable: {0}")]
    ResourceUnavailable(String),

    /// Scaler or model failed (or returned garbage) during this request
    #[error("prediction failed: {0}")]
    InvocationFailure(String),
}

impl PredictionError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, PredictionError::ResourceUnavailable(_))
    }
}

impl From<InferenceError> for PredictionError {
    fn from(err: InferenceError) -> Self {
        PredictionError::InvocationFailure(err.0)
    }
}

impl From<ArtifactError> for PredictionError {
    fn from(err: ArtifactError) -> Self {
        PredictionError::ResourceUnavailable(err.to_string())
    }
}
