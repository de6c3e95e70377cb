//! Prediction handler

use axum::{extract::{rejection::JsonRejection, State}, Json};
use validator::Validate;
use wildfire_core::IncidentInput;

use crate::{AppState, AppResult};
use crate::models::{PredictRequest, PredictResponse};

/// Predict severity for submitted form values
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(req) = payload?;
    req.validate()?;
    run_prediction(&state, req.input, None).await
}

/// Run the pipeline off the async executor; inference is CPU-bound
pub(crate) async fn run_prediction(
    state: &AppState,
    input: IncidentInput,
    preset: Option<&'static str>,
) -> AppResult<Json<PredictResponse>> {
    let pipeline = state.pipeline.clone();
    let result = tokio::task::spawn_blocking(move || pipeline.predict_input(&input)).await??;

    tracing::info!(
        preset = preset.unwrap_or("custom-values"),
        acres = result.predicted_acres,
        severity = %result.tier,
        "Prediction served"
    );

    Ok(Json(PredictResponse::new(input, preset, result)))
}
