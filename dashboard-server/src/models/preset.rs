//! Preset models

use serde::Serialize;
use wildfire_core::{IncidentInput, Preset, SeverityTier};

#[derive(Debug, Serialize)]
pub struct PresetSummary {
    pub slug: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub values: IncidentInput,
    /// Illustrative; the loaded model may disagree
    pub expected: Option<SeverityTier>,
}

impl From<&Preset> for PresetSummary {
    fn from(preset: &Preset) -> Self {
        Self {
            slug: preset.slug,
            name: preset.name,
            short_name: preset.short_name(),
            values: preset.input,
            expected: preset.expected,
        }
    }
}
