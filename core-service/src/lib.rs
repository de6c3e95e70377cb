//! Wildfire AI Core
//!
//! Fire-incident inputs → fixed-order feature vector → scaler → regressor
//! → severity tier with canned guidance.
//!
//! ```text
//! IncidentInput ──▶ FeatureVector ──▶ FeatureScaler ──▶ Regressor ──▶ acres
//!                                                                     │
//!                              SeverityTier + ActionBundle ◀── classify
//! ```
//!
//! The scaler and regressor are traits. Production loads them from
//! `best_fire_model.onnx` + `scaler.json` through [`PredictionPipeline::load`];
//! tests inject stubs through [`PredictionPipeline::new`].

pub mod constants;
pub mod logic;

pub use logic::error::PredictionError;
pub use logic::features::{
    presets, FeatureVector, FeatureVectorBuilder, IncidentInput, MajorIncident, Preset,
    COUNTY_MAX, COUNTY_MIN, FEATURE_COUNT, FEATURE_LAYOUT, PERCENT_MAX, PERCENT_MIN, PRESETS,
};
pub use logic::model::{
    ArtifactConfig, ArtifactError, FeatureScaler, FittedScaler, InferenceError, ModelMetadata,
    Regressor,
};
pub use logic::pipeline::{EngineStatus, PredictionPipeline, PredictionResult};
pub use logic::severity::{
    action_bundle, classify, format_acres, severity_guide, ActionBundle, GuideEntry,
    SeverityThresholds, SeverityTier,
};
