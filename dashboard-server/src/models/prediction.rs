//! Prediction request/response models

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};
use wildfire_core::{
    ActionBundle, IncidentInput, PredictionResult, SeverityTier, COUNTY_MAX, PERCENT_MAX,
    PERCENT_MIN,
};

/// Form submission from the dashboard
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    #[serde(flatten)]
    pub input: IncidentInput,
}

fn out_of_range(message: String) -> ValidationError {
    let mut error = ValidationError::new("range");
    error.message = Some(Cow::Owned(message));
    error
}

// Bounds the form widgets enforce; resource counts are already non-negative by type.
impl Validate for PredictRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let input = &self.input;
        let mut errors = ValidationErrors::new();

        if input.county > COUNTY_MAX {
            errors.add("county", out_of_range(format!("county must be at most {}", COUNTY_MAX)));
        }
        if !(-90.0..=90.0).contains(&input.latitude) {
            errors.add("latitude", out_of_range("latitude must be within -90..=90".to_string()));
        }
        if !(-180.0..=180.0).contains(&input.longitude) {
            errors.add("longitude", out_of_range("longitude must be within -180..=180".to_string()));
        }
        if !(PERCENT_MIN..=PERCENT_MAX).contains(&input.percent_contained) {
            errors.add(
                "percent_contained",
                out_of_range(format!("percent_contained must be within {}..={}", PERCENT_MIN, PERCENT_MAX)),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction_id: Uuid,
    /// Preset slug, when the prediction ran on a preset
    pub preset: Option<&'static str>,
    pub input: IncidentInput,
    pub predicted_acres: f64,
    /// Banner text ("12,345 Acres Predicted")
    pub headline: String,
    pub severity: SeverityTier,
    pub title: &'static str,
    pub bundle: ActionBundle,
    pub inference_time_us: u64,
    pub created_at: DateTime<Utc>,
}

impl PredictResponse {
    pub fn new(input: IncidentInput, preset: Option<&'static str>, result: PredictionResult) -> Self {
        Self {
            prediction_id: Uuid::new_v4(),
            preset,
            input,
            predicted_acres: result.predicted_acres,
            headline: format!("{} Acres Predicted", result.display_acres),
            severity: result.tier,
            title: result.tier.title(),
            bundle: result.bundle,
            inference_time_us: result.inference_time_us,
            created_at: Utc::now(),
        }
    }
}
