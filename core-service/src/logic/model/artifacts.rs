//! Model Artifacts - locating and loading the scaler/regressor pair
//!
//! Both artifacts are loaded once at startup. Any failure here is an
//! operator-facing condition: the caller logs it and runs without
//! prediction rather than exiting.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::inference::{FeatureScaler, InferenceError, OnnxRegressor, Regressor};
use super::scaler::{FittedScaler, ScalerError};
use crate::constants;
use crate::logic::features::layout;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Where to find the artifacts and how to verify them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Explicit directory; `None` means search the default locations
    pub model_dir: Option<PathBuf>,
    pub model_file: String,
    pub scaler_file: String,
    /// Pinned SHA-256 (lowercase hex) of the model file
    pub expected_model_sha256: Option<String>,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            model_file: constants::DEFAULT_MODEL_FILE.to_string(),
            scaler_file: constants::DEFAULT_SCALER_FILE.to_string(),
            expected_model_sha256: None,
        }
    }
}

impl ArtifactConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            model_dir: constants::get_model_dir(),
            model_file: constants::get_model_file(),
            scaler_file: constants::get_scaler_file(),
            expected_model_sha256: constants::get_expected_model_sha256(),
        }
    }

    pub fn with_model_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.model_dir = Some(dir.into());
        self
    }

    /// Default search order: executable dir, working dir, per-user data dir
    pub fn candidate_dirs() -> Vec<PathBuf> {
        let mut dirs = Vec::new();

        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            dirs.push(exe_dir);
        }
        if let Ok(cwd) = std::env::current_dir() {
            dirs.push(cwd);
        }
        if let Some(data_dir) = dirs::data_dir() {
            dirs.push(data_dir.join(constants::APP_DATA_DIR).join("models"));
        }

        dirs
    }

    /// Directory the artifacts are read from.
    ///
    /// An explicit directory always wins. Otherwise the first candidate
    /// holding the model file is used, falling back to the first candidate
    /// so error messages point at a real location.
    pub fn resolve_dir(&self) -> PathBuf {
        if let Some(dir) = &self.model_dir {
            return dir.clone();
        }
        self.resolve_among(&Self::candidate_dirs())
    }

    fn resolve_among(&self, candidates: &[PathBuf]) -> PathBuf {
        candidates
            .iter()
            .find(|dir| dir.join(&self.model_file).is_file())
            .or_else(|| candidates.first())
            .cloned()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn model_path(&self) -> PathBuf {
        self.resolve_dir().join(&self.model_file)
    }

    pub fn scaler_path(&self) -> PathBuf {
        self.resolve_dir().join(&self.scaler_file)
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Artifact could not be loaded; prediction must stay disabled
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("model file not found at: {}", .0.display())]
    ModelNotFound(PathBuf),

    #[error("scaler file not found at: {}", .0.display())]
    ScalerNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("invalid scaler at {}: {source}", path.display())]
    Scaler {
        path: PathBuf,
        #[source]
        source: ScalerError,
    },

    #[error("invalid model: {0}")]
    Model(#[from] InferenceError),
}

// ============================================================================
// METADATA
// ============================================================================

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub scaler_path: String,
    pub scaler_kind: String,
    pub algorithm: String,
    pub model_sha256: String,
    pub features: usize,
    pub layout_version: u8,
    pub layout_hash: u32,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// LOADED ARTIFACTS
// ============================================================================

/// The loaded, read-only scaler/regressor pair
#[derive(Clone)]
pub struct ModelArtifacts {
    pub scaler: Arc<dyn FeatureScaler>,
    pub regressor: Arc<dyn Regressor>,
    pub metadata: ModelMetadata,
}

impl std::fmt::Debug for ModelArtifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelArtifacts")
            .field("scaler", &self.scaler.describe())
            .field("regressor", &self.regressor.describe())
            .field("metadata", &self.metadata)
            .finish()
    }
}

/// Locate, verify and load both artifacts
pub fn load(config: &ArtifactConfig) -> Result<ModelArtifacts, ArtifactError> {
    let dir = config.resolve_dir();
    let model_path = dir.join(&config.model_file);
    let scaler_path = dir.join(&config.scaler_file);

    log::info!("Loading model artifacts from: {}", dir.display());

    if !model_path.is_file() {
        return Err(ArtifactError::ModelNotFound(model_path));
    }
    if !scaler_path.is_file() {
        return Err(ArtifactError::ScalerNotFound(scaler_path));
    }

    let model_sha256 = sha256_file(&model_path)?;
    verify_checksum(config.expected_model_sha256.as_deref(), &model_sha256)?;

    let scaler = FittedScaler::load(&scaler_path).map_err(|source| ArtifactError::Scaler {
        path: scaler_path.clone(),
        source,
    })?;
    let scaler_kind = scaler.kind().to_string();

    let regressor = OnnxRegressor::load(&model_path)?;

    let metadata = ModelMetadata {
        model_path: model_path.display().to_string(),
        scaler_path: scaler_path.display().to_string(),
        scaler_kind,
        algorithm: constants::MODEL_ALGORITHM.to_string(),
        model_sha256,
        features: layout::FEATURE_COUNT,
        layout_version: layout::FEATURE_VERSION,
        layout_hash: layout::layout_hash(),
        loaded_at: chrono::Utc::now(),
    };

    Ok(ModelArtifacts {
        scaler: Arc::new(scaler),
        regressor: Arc::new(regressor),
        metadata,
    })
}

/// SHA-256 of a file, lowercase hex
pub fn sha256_file(path: &Path) -> Result<String, ArtifactError> {
    let io_err = |source| ArtifactError::Io { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(io_err)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let n = reader.read(&mut buffer).map_err(io_err)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

fn verify_checksum(expected: Option<&str>, actual: &str) -> Result<(), ArtifactError> {
    match expected {
        Some(expected) if !expected.eq_ignore_ascii_case(actual) => Err(ArtifactError::ChecksumMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }),
        _ => Ok(()),
    }
}
