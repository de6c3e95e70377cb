//! Demo Presets
//!
//! Literal input bundles used to pre-populate the form. The expected tier
//! is what the shipped model produced for each scenario when it was
//! trained; another model may disagree.

use serde::Serialize;

use super::input::{IncidentInput, MajorIncident};
use crate::logic::severity::SeverityTier;

/// A named bundle of default values for all ten inputs
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Preset {
    /// Short lookup key (`minor`, `severe`, ...)
    pub slug: &'static str,
    /// Display name shown in the selector
    pub name: &'static str,
    pub input: IncidentInput,
    /// Illustrative only
    pub expected: Option<SeverityTier>,
}

pub const CUSTOM: Preset = Preset {
    slug: "custom",
    name: "Custom Input",
    input: IncidentInput {
        county: 10,
        latitude: 37.0,
        longitude: -120.0,
        percent_contained: 50.0,
        personnel: 50,
        engines: 10,
        helicopters: 2,
        dozers: 1,
        water_tenders: 2,
        major_incident: MajorIncident::No,
    },
    expected: None,
};

pub const MINOR_FIRE: Preset = Preset {
    slug: "minor",
    name: "Minor Fire (Small Scale)",
    input: IncidentInput {
        county: 15,
        latitude: 38.5,
        longitude: -121.5,
        percent_contained: 75.0,
        personnel: 25,
        engines: 5,
        helicopters: 1,
        dozers: 0,
        water_tenders: 1,
        major_incident: MajorIncident::No,
    },
    expected: Some(SeverityTier::Minor),
};

pub const MODERATE_FIRE: Preset = Preset {
    slug: "moderate",
    name: "Moderate Fire (Growing)",
    input: IncidentInput {
        county: 25,
        latitude: 36.5,
        longitude: -119.5,
        percent_contained: 30.0,
        personnel: 150,
        engines: 25,
        helicopters: 5,
        dozers: 3,
        water_tenders: 8,
        major_incident: MajorIncident::Yes,
    },
    expected: Some(SeverityTier::Moderate),
};

pub const SEVERE_FIRE: Preset = Preset {
    slug: "severe",
    name: "Severe Fire (Critical)",
    input: IncidentInput {
        county: 35,
        latitude: 39.0,
        longitude: -122.0,
        percent_contained: 10.0,
        personnel: 500,
        engines: 75,
        helicopters: 15,
        dozers: 10,
        water_tenders: 20,
        major_incident: MajorIncident::Yes,
    },
    expected: Some(SeverityTier::Severe),
};

pub const CONTAINED_FIRE: Preset = Preset {
    slug: "contained",
    name: "Contained Fire (Nearly Out)",
    input: IncidentInput {
        county: 20,
        latitude: 37.8,
        longitude: -120.8,
        percent_contained: 95.0,
        personnel: 100,
        engines: 15,
        helicopters: 3,
        dozers: 2,
        water_tenders: 5,
        major_incident: MajorIncident::No,
    },
    expected: Some(SeverityTier::Minor),
};

/// All presets in selector order
pub const PRESETS: &[Preset] = &[CUSTOM, MINOR_FIRE, MODERATE_FIRE, SEVERE_FIRE, CONTAINED_FIRE];

impl Preset {
    /// Name without the parenthesised qualifier ("Minor Fire")
    pub fn short_name(&self) -> &'static str {
        self.name
            .split_once(" (")
            .map(|(short, _)| short)
            .unwrap_or(self.name)
    }
}

/// Look up a preset by slug, display name or short name (case-insensitive)
pub fn find(key: &str) -> Option<&'static Preset> {
    let key = key.trim();
    PRESETS.iter().find(|p| {
        p.slug.eq_ignore_ascii_case(key)
            || p.name.eq_ignore_ascii_case(key)
            || p.short_name().eq_ignore_ascii_case(key)
    })
}

/// Preset used when nothing is selected
pub fn default_preset() -> &'static Preset {
    &PRESETS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_order() {
        let slugs: Vec<_> = PRESETS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs, ["custom", "minor", "moderate", "severe", "contained"]);
        assert_eq!(default_preset().slug, "custom");
    }

    #[test]
    fn test_find_by_any_name() {
        assert_eq!(find("severe").map(|p| p.slug), Some("severe"));
        assert_eq!(find("Severe Fire").map(|p| p.slug), Some("severe"));
        assert_eq!(find("severe fire (critical)").map(|p| p.slug), Some("severe"));
        assert_eq!(find("Custom Input").map(|p| p.slug), Some("custom"));
        assert!(find("apocalyptic").is_none());
    }

    #[test]
    fn test_short_name() {
        assert_eq!(CONTAINED_FIRE.short_name(), "Contained Fire");
        assert_eq!(CUSTOM.short_name(), "Custom Input");
    }

    #[test]
    fn test_expected_tiers() {
        assert_eq!(CUSTOM.expected, None);
        assert_eq!(MINOR_FIRE.expected, Some(SeverityTier::Minor));
        assert_eq!(MODERATE_FIRE.expected, Some(SeverityTier::Moderate));
        assert_eq!(SEVERE_FIRE.expected, Some(SeverityTier::Severe));
        assert_eq!(CONTAINED_FIRE.expected, Some(SeverityTier::Minor));
    }

    #[test]
    fn test_preset_inputs_within_bounds() {
        for preset in PRESETS {
            assert_eq!(preset.input, preset.input.clamped(), "{}", preset.name);
        }
    }
}
