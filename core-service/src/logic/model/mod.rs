//! Model Module - Inference Capabilities
//!
//! Scaler and regressor traits, their production implementations,
//! and artifact loading. Swapping the model means swapping the
//! artifacts, not this code.

pub mod inference;
pub mod scaler;
pub mod artifacts;

// Re-export common types
pub use inference::{FeatureScaler, InferenceError, OnnxRegressor, Regressor};
pub use scaler::{FittedScaler, ScalerArtifact, ScalerError, ScalerParams};
pub use artifacts::{ArtifactConfig, ArtifactError, ModelArtifacts, ModelMetadata};
