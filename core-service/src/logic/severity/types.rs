//! Severity Types
//!
//! Core types for severity classification.
//! No policy here - just data structures and display metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// SEVERITY TIER
// ============================================================================

/// Severity tier derived from predicted acreage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    /// Manageable with current resources
    Minor,
    /// Needs close monitoring and scaled-up resources
    Moderate,
    /// Needs immediate, maximal response
    Severe,
}

impl SeverityTier {
    /// All tiers from least to most severe
    pub const ALL: [SeverityTier; 3] = [SeverityTier::Minor, SeverityTier::Moderate, SeverityTier::Severe];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Minor => "Minor",
            SeverityTier::Moderate => "Moderate",
            SeverityTier::Severe => "Severe",
        }
    }

    /// Headline label ("Severe Fire")
    pub fn title(&self) -> &'static str {
        match self {
            SeverityTier::Minor => "Minor Fire",
            SeverityTier::Moderate => "Moderate Fire",
            SeverityTier::Severe => "Severe Fire",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SeverityTier::Minor => "#10B981",    // Green
            SeverityTier::Moderate => "#F59E0B", // Amber
            SeverityTier::Severe => "#EF4444",   // Red
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SeverityTier::Minor => "✓",
            SeverityTier::Moderate => "⚠️",
            SeverityTier::Severe => "🚨",
        }
    }

    /// Acreage band shown in the severity guide
    pub fn range_label(&self) -> &'static str {
        match self {
            SeverityTier::Minor => "0-10K acres",
            SeverityTier::Moderate => "10K-100K acres",
            SeverityTier::Severe => ">100K acres",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SeverityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeverityTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown severity tier '{}'", s))
    }
}

// ============================================================================
// ACTION BUNDLE
// ============================================================================

/// Fixed display metadata and guidance attached to a tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionBundle {
    pub tier: SeverityTier,
    pub color: &'static str,
    pub icon: &'static str,
    /// One-line situation summary
    pub message: &'static str,
    /// Heading over the action list ("Immediate Actions")
    pub heading: &'static str,
    /// Recommended actions, in priority order
    pub actions: &'static [&'static str],
}

// ============================================================================
// DISPLAY HELPERS
// ============================================================================

/// Format acres as a whole number with thousands separators ("12,345").
/// Non-finite values render as-is.
pub fn format_acres(acres: f64) -> String {
    if !acres.is_finite() {
        return acres.to_string();
    }

    let rounded = acres.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
