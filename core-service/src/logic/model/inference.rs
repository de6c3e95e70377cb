//! Inference Engine - ONNX Runtime Integration
//!
//! The scaler and regressor are capabilities behind traits so the
//! pipeline can run against stubs in tests and against ONNX Runtime in
//! production.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use crate::logic::features::FEATURE_COUNT;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Failure inside a scaler or regressor call
#[derive(Debug, Clone, thiserror::Error)]
#[error("InferenceError: {0}")]
pub struct InferenceError(pub String);

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// Pre-fit feature normalization (`transform(vector) -> vector`)
pub trait FeatureScaler: Send + Sync {
    fn transform(&self, features: &[f32; FEATURE_COUNT]) -> Result<[f32; FEATURE_COUNT], InferenceError>;

    /// Short description for status output
    fn describe(&self) -> String {
        "scaler".to_string()
    }
}

/// Trained regressor (`predict(vector) -> acres`)
pub trait Regressor: Send + Sync {
    fn predict(&self, features: &[f32; FEATURE_COUNT]) -> Result<f64, InferenceError>;

    /// Short description for status output
    fn describe(&self) -> String {
        "regressor".to_string()
    }
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// Regressor backed by an ONNX Runtime session.
///
/// `Session::run` needs exclusive access, so concurrent predictions
/// serialize on the mutex.
pub struct OnnxRegressor {
    session: Mutex<Session>,
    output_name: String,
    source: String,
}

impl OnnxRegressor {
    /// Load ONNX model from file
    pub fn load(model_path: &Path) -> Result<Self, InferenceError> {
        log::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(InferenceError(format!("Model not found: {}", model_path.display())));
        }

        let session = Session::builder()
            .map_err(|e| InferenceError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError(format!("Failed to load model: {}", e)))?;

        Self::from_session(session, model_path.display().to_string())
    }

    fn from_session(session: Session, source: String) -> Result<Self, InferenceError> {
        let output_name = session.outputs.first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError("No output defined".to_string()))?;

        log::info!("ONNX model loaded successfully (output: {})", output_name);

        Ok(Self {
            session: Mutex::new(session),
            output_name,
            source,
        })
    }
}

impl Regressor for OnnxRegressor {
    fn predict(&self, features: &[f32; FEATURE_COUNT]) -> Result<f64, InferenceError> {
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.to_vec())
            .map_err(|e| InferenceError(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();

        let outputs = session.run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

        let output = outputs.get(&self.output_name)
            .ok_or_else(|| InferenceError("No output".to_string()))?;

        let (_, data) = output.try_extract_tensor::<f32>()
            .map_err(|e| InferenceError(format!("Extract error: {}", e)))?;

        data.first()
            .map(|v| f64::from(*v))
            .ok_or_else(|| InferenceError("Empty output tensor".to_string()))
    }

    fn describe(&self) -> String {
        format!("onnx:{}", self.source)
    }
}

impl std::fmt::Debug for OnnxRegressor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxRegressor")
            .field("output_name", &self.output_name)
            .field("source", &self.source)
            .finish()
    }
}
