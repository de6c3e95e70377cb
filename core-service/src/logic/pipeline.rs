//! Prediction Pipeline - scale → predict → classify
//!
//! Constructed once at startup from the loaded artifacts (or from the
//! reason they failed to load) and shared read-only for the rest of the
//! process. A pipeline without artifacts refuses every request; there is
//! no heuristic fallback.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use super::error::PredictionError;
use super::features::{FeatureVector, IncidentInput};
use super::model::{artifacts, ArtifactConfig, FeatureScaler, ModelArtifacts, ModelMetadata, Regressor};
use super::severity::{action_bundle, format_acres, ActionBundle, SeverityThresholds, SeverityTier};
use crate::constants;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Prediction output
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    /// Raw regressor output (acres burned)
    pub predicted_acres: f64,
    /// Whole acres with thousands separators ("12,345")
    pub display_acres: String,
    pub tier: SeverityTier,
    pub bundle: ActionBundle,
    /// Scale + predict wall time
    pub inference_time_us: u64,
}

/// Engine Status for UI
#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    pub model_loaded: bool,
    /// "ready" or "unavailable"
    pub status: &'static str,
    pub unavailable_reason: Option<String>,
    pub scaler: Option<String>,
    pub regressor: Option<String>,
    pub metadata: Option<ModelMetadata>,
    pub inference_device: String,
    pub thresholds: SeverityThresholds,
    pub avg_latency_ms: f32,
    pub inference_count: u64,
}

enum Backend {
    Ready {
        scaler: Arc<dyn FeatureScaler>,
        regressor: Arc<dyn Regressor>,
        metadata: Option<ModelMetadata>,
    },
    Unavailable {
        reason: String,
    },
}

// ============================================================================
// PIPELINE
// ============================================================================

pub struct PredictionPipeline {
    backend: Backend,
    thresholds: SeverityThresholds,
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
}

impl PredictionPipeline {
    /// Pipeline over explicit capabilities
    pub fn new(scaler: Arc<dyn FeatureScaler>, regressor: Arc<dyn Regressor>) -> Self {
        Self::with_backend(Backend::Ready { scaler, regressor, metadata: None })
    }

    /// Pipeline that rejects every request with the given reason
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::with_backend(Backend::Unavailable { reason: reason.into() })
    }

    /// Pipeline over capabilities that may have failed to load.
    /// Both must be present for the pipeline to run.
    pub fn from_components(
        scaler: Option<Arc<dyn FeatureScaler>>,
        regressor: Option<Arc<dyn Regressor>>,
    ) -> Self {
        match (scaler, regressor) {
            (Some(scaler), Some(regressor)) => Self::new(scaler, regressor),
            (None, Some(_)) => Self::unavailable("scaler not loaded"),
            (Some(_), None) => Self::unavailable("model not loaded"),
            (None, None) => Self::unavailable("model and scaler not loaded"),
        }
    }

    pub fn from_artifacts(artifacts: ModelArtifacts) -> Self {
        Self::with_backend(Backend::Ready {
            scaler: artifacts.scaler,
            regressor: artifacts.regressor,
            metadata: Some(artifacts.metadata),
        })
    }

    /// Load artifacts per `config`. Failure is logged and yields an
    /// unavailable pipeline; it never aborts the caller.
    pub fn load(config: &ArtifactConfig) -> Self {
        match artifacts::load(config) {
            Ok(artifacts) => {
                log::info!(
                    "Model ready: {} (sha256 {})",
                    artifacts.metadata.model_path,
                    artifacts.metadata.model_sha256
                );
                Self::from_artifacts(artifacts)
            }
            Err(e) => {
                log::error!("Model unavailable: {}", e);
                log::error!("Prediction is disabled until valid model artifacts are installed");
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn with_thresholds(mut self, thresholds: SeverityThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    fn with_backend(backend: Backend) -> Self {
        Self {
            backend,
            thresholds: SeverityThresholds::default(),
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.backend, Backend::Ready { .. })
    }

    pub fn thresholds(&self) -> &SeverityThresholds {
        &self.thresholds
    }

    /// Run scale → predict → classify on one vector
    pub fn predict(&self, vector: &FeatureVector) -> Result<PredictionResult, PredictionError> {
        let (scaler, regressor) = match &self.backend {
            Backend::Ready { scaler, regressor, .. } => (scaler, regressor),
            Backend::Unavailable { reason } => {
                return Err(PredictionError::ResourceUnavailable(reason.clone()));
            }
        };

        vector.validate()
            .map_err(|e| PredictionError::InvocationFailure(e.to_string()))?;

        let start_time = Instant::now();

        let scaled = scaler.transform(vector.as_array())?;
        let acres = regressor.predict(&scaled)?;

        let inference_time = start_time.elapsed().as_micros() as u64;

        if !acres.is_finite() {
            return Err(PredictionError::InvocationFailure(format!(
                "model returned a non-finite prediction ({})",
                acres
            )));
        }
        if acres < 0.0 {
            log::warn!("Model predicted negative acreage ({:.1}); classifying as-is", acres);
        }

        let tier = self.thresholds.classify(acres);

        self.latency_sum_us.fetch_add(inference_time, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);

        log::debug!(
            "Prediction: {:.1} acres -> {} ({}us) features={}",
            acres,
            tier,
            inference_time,
            vector.to_log_entry()
        );

        Ok(PredictionResult {
            predicted_acres: acres,
            display_acres: format_acres(acres),
            tier,
            bundle: action_bundle(tier),
            inference_time_us: inference_time,
        })
    }

    /// Build the vector from raw inputs, then predict
    pub fn predict_input(&self, input: &IncidentInput) -> Result<PredictionResult, PredictionError> {
        self.predict(&input.to_feature_vector())
    }

    pub fn status(&self) -> EngineStatus {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        let avg = if count > 0 { (sum as f32 / count as f32) / 1000.0 } else { 0.0 };

        let (scaler, regressor, metadata, reason) = match &self.backend {
            Backend::Ready { scaler, regressor, metadata } => (
                Some(scaler.describe()),
                Some(regressor.describe()),
                metadata.clone(),
                None,
            ),
            Backend::Unavailable { reason } => (None, None, None, Some(reason.clone())),
        };

        EngineStatus {
            model_loaded: self.is_ready(),
            status: if self.is_ready() { "ready" } else { "unavailable" },
            unavailable_reason: reason,
            scaler,
            regressor,
            metadata,
            inference_device: constants::INFERENCE_DEVICE.to_string(),
            thresholds: self.thresholds,
            avg_latency_ms: avg,
            inference_count: count,
        }
    }
}

impl std::fmt::Debug for PredictionPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionPipeline")
            .field("ready", &self.is_ready())
            .field("thresholds", &self.thresholds)
            .finish()
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
