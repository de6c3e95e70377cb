//! Feature Scaler - fitted normalization parameters
//!
//! Scaler artifacts are JSON exported from the training run:
//!
//! ```json
//! {
//!   "kind": "standard",
//!   "feature_names": ["Counties", "Latitude", "..."],
//!   "mean": [ ...10 values... ],
//!   "scale": [ ...10 values... ]
//! }
//! ```
//!
//! `kind` is `standard` (`(x - mean) / scale`) or `min_max`
//! (`(x - min) / (max - min)`). A zero scale or zero range is treated as 1,
//! matching how the fitting library handles constant columns.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::inference::{FeatureScaler, InferenceError};
use crate::logic::features::{layout, FEATURE_COUNT};

// ============================================================================
// ARTIFACT FORMAT
// ============================================================================

/// Fitted parameters, tagged by scaler kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerParams {
    Standard { mean: Vec<f32>, scale: Vec<f32> },
    MinMax { min_vals: Vec<f32>, max_vals: Vec<f32> },
}

impl ScalerParams {
    pub fn kind(&self) -> &'static str {
        match self {
            ScalerParams::Standard { .. } => "standard",
            ScalerParams::MinMax { .. } => "min_max",
        }
    }
}

/// On-disk scaler artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerArtifact {
    /// Column names the scaler was fit on, if exported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    #[serde(flatten)]
    pub params: ScalerParams,
}

/// Why a scaler artifact was rejected
#[derive(Debug, thiserror::Error)]
pub enum ScalerError {
    #[error("failed to read scaler: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scaler: {0}")]
    Format(#[from] serde_json::Error),

    #[error("scaler parameter '{name}' has {actual} values, expected {expected}")]
    Arity { name: &'static str, expected: usize, actual: usize },

    #[error("scaler parameter '{name}' has a non-finite value at index {index}")]
    NonFinite { name: &'static str, index: usize },

    #[error("scaler was fit on columns {actual:?}, expected {expected:?}")]
    FeatureNames { expected: Vec<String>, actual: Vec<String> },
}

// ============================================================================
// FITTED SCALER
// ============================================================================

/// Affine per-column transform: `(x - offset) / divisor`
#[derive(Debug, Clone, PartialEq)]
pub struct FittedScaler {
    kind: &'static str,
    offsets: [f32; FEATURE_COUNT],
    divisors: [f32; FEATURE_COUNT],
}

impl FittedScaler {
    /// Read and validate a scaler artifact from disk
    pub fn load(path: &Path) -> Result<Self, ScalerError> {
        let content = std::fs::read_to_string(path)?;
        let scaler = Self::from_json(&content)?;
        log::info!("Scaler ({}) loaded from: {}", scaler.kind, path.display());
        Ok(scaler)
    }

    pub fn from_json(json: &str) -> Result<Self, ScalerError> {
        let artifact: ScalerArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ScalerArtifact) -> Result<Self, ScalerError> {
        if let Some(names) = &artifact.feature_names {
            if !layout::matches_layout(names) {
                return Err(ScalerError::FeatureNames {
                    expected: layout::LayoutInfo::current().feature_names,
                    actual: names.clone(),
                });
            }
        }
        Self::from_params(artifact.params)
    }

    pub fn from_params(params: ScalerParams) -> Result<Self, ScalerError> {
        let kind = params.kind();
        let (offsets, divisors) = match params {
            ScalerParams::Standard { mean, scale } => {
                let offsets = fixed("mean", &mean)?;
                let divisors = fixed("scale", &scale)?;
                (offsets, divisors)
            }
            ScalerParams::MinMax { min_vals, max_vals } => {
                let offsets = fixed("min_vals", &min_vals)?;
                let max = fixed("max_vals", &max_vals)?;
                let mut ranges = [0.0f32; FEATURE_COUNT];
                for i in 0..FEATURE_COUNT {
                    ranges[i] = max[i] - offsets[i];
                }
                (offsets, ranges)
            }
        };

        Ok(Self {
            kind,
            offsets,
            divisors: divisors.map(|d| if d == 0.0 { 1.0 } else { d }),
        })
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl FeatureScaler for FittedScaler {
    fn transform(&self, features: &[f32; FEATURE_COUNT]) -> Result<[f32; FEATURE_COUNT], InferenceError> {
        let mut scaled = [0.0f32; FEATURE_COUNT];

        for i in 0..FEATURE_COUNT {
            scaled[i] = (features[i] - self.offsets[i]) / self.divisors[i];
        }

        if let Some(index) = scaled.iter().position(|v| !v.is_finite()) {
            return Err(InferenceError(format!(
                "Scaled value for '{}' is not finite",
                layout::feature_name(index).unwrap_or("?")
            )));
        }

        Ok(scaled)
    }

    fn describe(&self) -> String {
        format!("{} scaler", self.kind)
    }
}

/// Convert a parameter list into a fixed array, rejecting wrong arity or NaN/inf
fn fixed(name: &'static str, values: &[f32]) -> Result<[f32; FEATURE_COUNT], ScalerError> {
    let array: [f32; FEATURE_COUNT] = values.try_into().map_err(|_| ScalerError::Arity {
        name,
        expected: FEATURE_COUNT,
        actual: values.len(),
    })?;

    if let Some(index) = array.iter().position(|v| !v.is_finite()) {
        return Err(ScalerError::NonFinite { name, index });
    }

    Ok(array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::FEATURE_LAYOUT;

    fn standard_json(mean: &[f32], scale: &[f32]) -> String {
        serde_json::json!({
            "kind": "standard",
            "mean": mean,
            "scale": scale,
        })
        .to_string()
    }

    #[test]
    fn test_standard_transform() {
        let mut mean = vec![0.0; FEATURE_COUNT];
        let mut scale = vec![1.0; FEATURE_COUNT];
        mean[0] = 30.0;
        scale[0] = 10.0;
        mean[4] = 100.0;
        scale[4] = 50.0;

        let scaler = FittedScaler::from_json(&standard_json(&mean, &scale)).unwrap();
        let mut input = [0.0f32; FEATURE_COUNT];
        input[0] = 15.0;
        input[4] = 200.0;
        input[9] = 1.0;

        let scaled = scaler.transform(&input).unwrap();
        assert!((scaled[0] - (-1.5)).abs() < 1e-6);
        assert!((scaled[4] - 2.0).abs() < 1e-6);
        assert_eq!(scaled[9], 1.0);
        assert_eq!(scaler.kind(), "standard");
    }

    #[test]
    fn test_zero_scale_treated_as_one() {
        let mean = vec![5.0; FEATURE_COUNT];
        let scale = vec![0.0; FEATURE_COUNT];
        let scaler = FittedScaler::from_json(&standard_json(&mean, &scale)).unwrap();

        let scaled = scaler.transform(&[7.0; FEATURE_COUNT]).unwrap();
        assert_eq!(scaled, [2.0; FEATURE_COUNT]);
    }

    #[test]
    fn test_min_max_transform() {
        let params = ScalerParams::MinMax {
            min_vals: vec![0.0; FEATURE_COUNT],
            max_vals: vec![100.0; FEATURE_COUNT],
        };
        let scaler = FittedScaler::from_params(params).unwrap();

        let scaled = scaler.transform(&[50.0; FEATURE_COUNT]).unwrap();
        assert!((scaled[0] - 0.5).abs() < 0.01);

        // Not clamped: out-of-range inputs extrapolate like the fitted transform
        let scaled = scaler.transform(&[150.0; FEATURE_COUNT]).unwrap();
        assert!((scaled[3] - 1.5).abs() < 0.01);
    }

    #[test]
    fn test_min_max_constant_column() {
        let params = ScalerParams::MinMax {
            min_vals: vec![3.0; FEATURE_COUNT],
            max_vals: vec![3.0; FEATURE_COUNT],
        };
        let scaler = FittedScaler::from_params(params).unwrap();
        assert_eq!(scaler.transform(&[4.0; FEATURE_COUNT]).unwrap(), [1.0; FEATURE_COUNT]);
    }

    #[test]
    fn test_wrong_arity_rejected() {
        let err = FittedScaler::from_json(&standard_json(&[0.0; 9], &[1.0; FEATURE_COUNT])).unwrap_err();
        assert!(matches!(err, ScalerError::Arity { name: "mean", actual: 9, .. }));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{"kind": "robust", "center": [], "scale": []}"#;
        assert!(matches!(FittedScaler::from_json(json), Err(ScalerError::Format(_))));
    }

    #[test]
    fn test_feature_names_must_match_layout() {
        let mut names: Vec<String> = FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect();
        let artifact = ScalerArtifact {
            feature_names: Some(names.clone()),
            params: ScalerParams::Standard {
                mean: vec![0.0; FEATURE_COUNT],
                scale: vec![1.0; FEATURE_COUNT],
            },
        };
        assert!(FittedScaler::from_artifact(artifact.clone()).is_ok());

        names.swap(1, 2);
        let reordered = ScalerArtifact { feature_names: Some(names), ..artifact };
        assert!(matches!(
            FittedScaler::from_artifact(reordered),
            Err(ScalerError::FeatureNames { .. })
        ));
    }

    #[test]
    fn test_artifact_json_shape() {
        let json = serde_json::json!({
            "kind": "min_max",
            "feature_names": FEATURE_LAYOUT,
            "min_vals": vec![0.0; FEATURE_COUNT],
            "max_vals": vec![1.0; FEATURE_COUNT],
        })
        .to_string();

        let artifact: ScalerArtifact = serde_json::from_str(&json).unwrap();
        assert_eq!(artifact.params.kind(), "min_max");
        assert_eq!(artifact.feature_names.map(|n| n.len()), Some(FEATURE_COUNT));
    }
}
