//! Severity Threshold Configuration
//!
//! Acreage cut-offs between tiers. Each bound is inclusive toward the
//! lower tier: exactly `minor_max` is Minor, exactly `moderate_max` is
//! Moderate.

use serde::{Deserialize, Serialize};

/// Upper bound (acres) of the Minor tier
pub const DEFAULT_MINOR_MAX_ACRES: f64 = 10_000.0;

/// Upper bound (acres) of the Moderate tier
pub const DEFAULT_MODERATE_MAX_ACRES: f64 = 100_000.0;

/// Threshold Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityThresholds {
    /// Largest prediction still classified Minor
    pub minor_max: f64,

    /// Largest prediction still classified Moderate
    pub moderate_max: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            minor_max: DEFAULT_MINOR_MAX_ACRES,
            moderate_max: DEFAULT_MODERATE_MAX_ACRES,
        }
    }
}

impl SeverityThresholds {
    /// Returns `None` unless both bounds are finite and `minor_max < moderate_max`
    pub fn new(minor_max: f64, moderate_max: f64) -> Option<Self> {
        if minor_max.is_finite() && moderate_max.is_finite() && minor_max < moderate_max {
            Some(Self { minor_max, moderate_max })
        } else {
            None
        }
    }
}
