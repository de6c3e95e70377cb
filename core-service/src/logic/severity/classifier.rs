//! Severity Classifier
//!
//! Pure policy: predicted acres → tier → action bundle.
//! Deterministic, no I/O, no model access.

use serde::Serialize;

use super::threshold::SeverityThresholds;
use super::types::{ActionBundle, SeverityTier};

// ============================================================================
// CLASSIFICATION
// ============================================================================

impl SeverityThresholds {
    /// Map a finite prediction to its tier.
    ///
    /// Negative predictions fall through to Minor; callers are expected to
    /// reject non-finite values before classifying.
    pub fn classify(&self, acres: f64) -> SeverityTier {
        if acres > self.moderate_max {
            SeverityTier::Severe
        } else if acres > self.minor_max {
            SeverityTier::Moderate
        } else {
            SeverityTier::Minor
        }
    }
}

/// Classify with the default thresholds
pub fn classify(acres: f64) -> SeverityTier {
    SeverityThresholds::default().classify(acres)
}

// ============================================================================
// ACTION BUNDLES
// ============================================================================

const SEVERE_ACTIONS: &[&str] = &[
    "Deploy maximum available resources",
    "Initiate evacuation procedures",
    "Request external support",
    "Establish incident command",
];

const MODERATE_ACTIONS: &[&str] = &[
    "Monitor fire progression closely",
    "Scale up resource allocation",
    "Prepare evacuation routes",
    "Coordinate with agencies",
];

const MINOR_ACTIONS: &[&str] = &[
    "Continue monitoring",
    "Maintain resource levels",
    "Regular status updates",
    "Plan containment strategy",
];

/// Fixed guidance for a tier
pub fn action_bundle(tier: SeverityTier) -> ActionBundle {
    let (message, heading, actions) = match tier {
        SeverityTier::Severe => (
            "Critical situation requiring immediate response",
            "Immediate Actions",
            SEVERE_ACTIONS,
        ),
        SeverityTier::Moderate => (
            "Significant fire requiring close monitoring",
            "Recommended Actions",
            MODERATE_ACTIONS,
        ),
        SeverityTier::Minor => (
            "Situation manageable with current resources",
            "Standard Actions",
            MINOR_ACTIONS,
        ),
    };

    ActionBundle {
        tier,
        color: tier.color(),
        icon: tier.icon(),
        message,
        heading,
        actions,
    }
}

// ============================================================================
// SEVERITY GUIDE
// ============================================================================

/// One row of the severity guide
#[derive(Debug, Clone, Serialize)]
pub struct GuideEntry {
    pub tier: SeverityTier,
    pub title: &'static str,
    pub range: &'static str,
    /// Exclusive lower bound in acres (`None` for the lowest tier)
    pub min_acres_exclusive: Option<f64>,
    /// Inclusive upper bound in acres (`None` for the highest tier)
    pub max_acres_inclusive: Option<f64>,
    pub bundle: ActionBundle,
}

/// All tiers with their bounds under the given thresholds
pub fn severity_guide(thresholds: &SeverityThresholds) -> Vec<GuideEntry> {
    SeverityTier::ALL
        .into_iter()
        .map(|tier| {
            let (min, max) = match tier {
                SeverityTier::Minor => (None, Some(thresholds.minor_max)),
                SeverityTier::Moderate => (Some(thresholds.minor_max), Some(thresholds.moderate_max)),
                SeverityTier::Severe => (Some(thresholds.moderate_max), None),
            };
            GuideEntry {
                tier,
                title: tier.title(),
                range: tier.range_label(),
                min_acres_exclusive: min,
                max_acres_inclusive: max,
                bundle: action_bundle(tier),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_inclusive_toward_lower_tier() {
        assert_eq!(classify(10_000.0), SeverityTier::Minor);
        assert_eq!(classify(10_000.01), SeverityTier::Moderate);
        assert_eq!(classify(100_000.0), SeverityTier::Moderate);
        assert_eq!(classify(100_000.01), SeverityTier::Severe);
    }

    #[test]
    fn test_classify_ranges() {
        for acres in [0.0, 1.0, 512.5, 9_999.99] {
            assert_eq!(classify(acres), SeverityTier::Minor, "{}", acres);
        }
        for acres in [10_001.0, 55_000.0, 99_999.99] {
            assert_eq!(classify(acres), SeverityTier::Moderate, "{}", acres);
        }
        for acres in [100_001.0, 250_000.0, 1.0e9] {
            assert_eq!(classify(acres), SeverityTier::Severe, "{}", acres);
        }
    }

    #[test]
    fn test_negative_prediction_is_minor() {
        assert_eq!(classify(-1.0), SeverityTier::Minor);
        assert_eq!(classify(-250_000.0), SeverityTier::Minor);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = SeverityThresholds::new(1_000.0, 5_000.0).unwrap();
        assert_eq!(t.classify(1_000.0), SeverityTier::Minor);
        assert_eq!(t.classify(4_000.0), SeverityTier::Moderate);
        assert_eq!(t.classify(5_000.5), SeverityTier::Severe);
    }

    #[test]
    fn test_action_bundles() {
        let severe = action_bundle(SeverityTier::Severe);
        assert_eq!(severe.color, "#EF4444");
        assert_eq!(severe.icon, "🚨");
        assert_eq!(severe.heading, "Immediate Actions");
        assert_eq!(severe.actions[0], "Deploy maximum available resources");

        let moderate = action_bundle(SeverityTier::Moderate);
        assert_eq!(moderate.message, "Significant fire requiring close monitoring");
        assert_eq!(moderate.actions.last(), Some(&"Coordinate with agencies"));

        let minor = action_bundle(SeverityTier::Minor);
        assert_eq!(minor.color, "#10B981");
        assert_eq!(minor.heading, "Standard Actions");

        for tier in SeverityTier::ALL {
            let n = action_bundle(tier).actions.len();
            assert!((3..=4).contains(&n), "{} has {} actions", tier, n);
        }
    }

    #[test]
    fn test_severity_guide() {
        let guide = severity_guide(&SeverityThresholds::default());
        assert_eq!(guide.len(), 3);
        assert_eq!(guide[0].min_acres_exclusive, None);
        assert_eq!(guide[1].min_acres_exclusive, Some(10_000.0));
        assert_eq!(guide[1].max_acres_inclusive, Some(100_000.0));
        assert_eq!(guide[2].max_acres_inclusive, None);
        assert_eq!(guide[2].range, ">100K acres");
    }
}
