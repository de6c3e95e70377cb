//! Preset handlers

use axum::{extract::{Path, State}, Json};
use wildfire_core::{presets, PRESETS};

use crate::{AppState, AppResult, AppError};
use crate::models::{PredictResponse, PresetSummary};
use super::predict::run_prediction;

/// List presets in selector order
pub async fn list() -> Json<Vec<PresetSummary>> {
    Json(PRESETS.iter().map(PresetSummary::from).collect())
}

/// Get single preset by slug or name
pub async fn get(Path(key): Path<String>) -> AppResult<Json<PresetSummary>> {
    let preset = presets::find(&key)
        .ok_or_else(|| AppError::NotFound(format!("Preset '{}' not found", key)))?;

    Ok(Json(PresetSummary::from(preset)))
}

/// Predict with a preset's values
pub async fn predict(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<PredictResponse>> {
    let preset = presets::find(&key)
        .ok_or_else(|| AppError::NotFound(format!("Preset '{}' not found", key)))?;

    run_prediction(&state, preset.input, Some(preset.slug)).await
}
