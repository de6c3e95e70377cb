//! Central Configuration Constants
//!
//! Single source of truth for artifact names and defaults.
//! Every value can be overridden from the environment.

use std::path::PathBuf;

/// Serialized regressor file name
pub const DEFAULT_MODEL_FILE: &str = "best_fire_model.onnx";

/// Serialized scaler file name
pub const DEFAULT_SCALER_FILE: &str = "scaler.json";

/// Per-user data directory name (`<data_dir>/WildfireAI/models`)
pub const APP_DATA_DIR: &str = "WildfireAI";

/// Algorithm the shipped regressor was trained with
pub const MODEL_ALGORITHM: &str = "XGBoost Regressor";

/// Inference device reported in engine status
pub const INFERENCE_DEVICE: &str = "ONNX Runtime (CPU)";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Wildfire AI";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Explicit model directory, if configured
pub fn get_model_dir() -> Option<PathBuf> {
    std::env::var("WILDFIRE_MODEL_DIR")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}

/// Regressor file name from environment or default
pub fn get_model_file() -> String {
    std::env::var("WILDFIRE_MODEL_FILE")
        .unwrap_or_else(|_| DEFAULT_MODEL_FILE.to_string())
}

/// Scaler file name from environment or default
pub fn get_scaler_file() -> String {
    std::env::var("WILDFIRE_SCALER_FILE")
        .unwrap_or_else(|_| DEFAULT_SCALER_FILE.to_string())
}

/// Expected SHA-256 of the regressor file (hex), if pinned
pub fn get_expected_model_sha256() -> Option<String> {
    std::env::var("WILDFIRE_MODEL_SHA256")
        .ok()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}
