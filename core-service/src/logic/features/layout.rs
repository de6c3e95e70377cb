//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the model input schema**
//!
//! The scaler and regressor were fit on exactly this column order.
//! A vector in any other order still produces a number, just a wrong one,
//! so the order is declared once here and everything else indexes by name.
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Column names in the exact order the model expects them.
/// Names match the training data columns.
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Location (0-2) ===
    "Counties",          // 0: Encoded county identifier (0-60)
    "Latitude",          // 1: Incident latitude
    "Longitude",         // 2: Incident longitude

    // === Fire status (3) ===
    "PercentContained",  // 3: Containment percent (0-100)

    // === Deployed resources (4-8) ===
    "PersonnelInvolved", // 4: Personnel on the incident
    "Engines",           // 5: Fire engines
    "Helicopters",       // 6: Helicopters
    "Dozers",            // 7: Bulldozers
    "WaterTenders",      // 8: Water tenders

    // === Flags (9) ===
    "MajorIncident",     // 9: 1 if declared a major incident, else 0
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 10;

// Slot indices, for code that must not go through name lookup
pub const IDX_COUNTY: usize = 0;
pub const IDX_LATITUDE: usize = 1;
pub const IDX_LONGITUDE: usize = 2;
pub const IDX_PERCENT_CONTAINED: usize = 3;
pub const IDX_PERSONNEL: usize = 4;
pub const IDX_ENGINES: usize = 5;
pub const IDX_HELICOPTERS: usize = 6;
pub const IDX_DOZERS: usize = 7;
pub const IDX_WATER_TENDERS: usize = 8;
pub const IDX_MAJOR_INCIDENT: usize = 9;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the feature layout
/// Used to detect layout mismatches at runtime
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get layout hash
pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when feature layout doesn't match expected
#[derive(Debug, Clone, thiserror::Error)]
#[error(
    "Feature layout mismatch: expected v{expected_version} (hash: {expected_hash:08x}), \
     got v{actual_version} (hash: {actual_hash:08x})"
)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

/// Validate that incoming data matches current layout
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

/// Check whether a list of column names (e.g. the names a scaler was fit on)
/// is exactly the current layout, in order.
pub fn matches_layout<S: AsRef<str>>(names: &[S]) -> bool {
    names.len() == FEATURE_COUNT
        && names.iter().zip(FEATURE_LAYOUT).all(|(a, b)| a.as_ref() == *b)
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 10);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_slot_indices_match_names() {
        assert_eq!(feature_index("Counties"), Some(IDX_COUNTY));
        assert_eq!(feature_index("Latitude"), Some(IDX_LATITUDE));
        assert_eq!(feature_index("Longitude"), Some(IDX_LONGITUDE));
        assert_eq!(feature_index("PercentContained"), Some(IDX_PERCENT_CONTAINED));
        assert_eq!(feature_index("PersonnelInvolved"), Some(IDX_PERSONNEL));
        assert_eq!(feature_index("Engines"), Some(IDX_ENGINES));
        assert_eq!(feature_index("Helicopters"), Some(IDX_HELICOPTERS));
        assert_eq!(feature_index("Dozers"), Some(IDX_DOZERS));
        assert_eq!(feature_index("WaterTenders"), Some(IDX_WATER_TENDERS));
        assert_eq!(feature_index("MajorIncident"), Some(IDX_MAJOR_INCIDENT));
    }

    #[test]
    fn test_layout_hash_consistency() {
        assert_eq!(compute_layout_hash(), compute_layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_validate_layout() {
        assert!(validate_layout(FEATURE_VERSION, layout_hash()).is_ok());
        assert!(validate_layout(FEATURE_VERSION + 1, layout_hash()).is_err());
        assert!(validate_layout(FEATURE_VERSION, layout_hash().wrapping_add(1)).is_err());
    }

    #[test]
    fn test_matches_layout() {
        assert!(matches_layout(FEATURE_LAYOUT));

        let mut swapped: Vec<&str> = FEATURE_LAYOUT.to_vec();
        swapped.swap(1, 2);
        assert!(!matches_layout(&swapped));

        assert!(!matches_layout(&FEATURE_LAYOUT[..9]));
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(feature_name(0), Some("Counties"));
        assert_eq!(feature_name(9), Some("MajorIncident"));
        assert_eq!(feature_name(10), None);
    }

    #[test]
    fn test_layout_info() {
        let info = LayoutInfo::current();
        assert_eq!(info.version, FEATURE_VERSION);
        assert_eq!(info.feature_count, FEATURE_COUNT);
        assert_eq!(info.feature_names.len(), FEATURE_COUNT);
    }
}
