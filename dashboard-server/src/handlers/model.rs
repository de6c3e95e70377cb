//! Model status handler

use axum::{extract::State, Json};
use wildfire_core::EngineStatus;

use crate::AppState;

/// "Model Ready" / "Model Error" indicator plus metadata
pub async fn status(State(state): State<AppState>) -> Json<EngineStatus> {
    Json(state.pipeline.status())
}
