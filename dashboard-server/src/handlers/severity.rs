//! Severity guide handler

use axum::{extract::State, Json};
use wildfire_core::{severity_guide, GuideEntry};

use crate::AppState;

/// Tier ranges, colors and guidance under the active thresholds
pub async fn guide(State(state): State<AppState>) -> Json<Vec<GuideEntry>> {
    Json(severity_guide(state.pipeline.thresholds()))
}
