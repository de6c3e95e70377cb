//! Feature Vector - Core data structure for model input
//!
//! **Versioned feature vector with layout validation**
//!
//! Uses centralized layout from `layout.rs` for:
//! - Consistent feature ordering
//! - Version tracking
//! - Layout hash for compatibility checks

use serde::{Deserialize, Serialize};

use super::input::{clamp_percent, MajorIncident, COUNTY_MAX, COUNTY_MIN};
use super::layout::{
    feature_index, layout_hash, validate_layout, LayoutMismatchError, FEATURE_COUNT,
    FEATURE_LAYOUT, FEATURE_VERSION, IDX_COUNTY, IDX_DOZERS, IDX_ENGINES, IDX_HELICOPTERS,
    IDX_LATITUDE, IDX_LONGITUDE, IDX_MAJOR_INCIDENT, IDX_PERCENT_CONTAINED, IDX_PERSONNEL,
    IDX_WATER_TENDERS,
};

// ============================================================================
// VERSIONED FEATURE VECTOR
// ============================================================================

/// Versioned Feature Vector with layout metadata
///
/// Every value handed to the scaler goes through this type, so the
/// column order cannot drift from `FEATURE_LAYOUT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection)
    pub layout_hash: u32,
    /// Feature values in order defined by FEATURE_LAYOUT
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create a new zeroed feature vector with current version
    pub fn new() -> Self {
        Self::from_values([0.0; FEATURE_COUNT])
    }

    /// Create from raw values with current version
    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    /// Get values as array reference
    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.values
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        feature_index(name).and_then(|i| self.get(i))
    }

    /// Set feature by index
    pub fn set(&mut self, index: usize, value: f32) {
        if index < FEATURE_COUNT {
            self.values[index] = value;
        }
    }

    /// Validate that this vector is compatible with current layout
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }

    /// Check if this vector is compatible with current layout
    pub fn is_compatible(&self) -> bool {
        self.validate().is_ok()
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        let named: serde_json::Map<String, serde_json::Value> = FEATURE_LAYOUT
            .iter()
            .zip(self.values.iter())
            .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
            .collect();

        serde_json::json!({
            "feature_version": self.version,
            "layout_hash": self.layout_hash,
            "values": self.values,
            "named_values": named,
        })
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[f32; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f32; FEATURE_COUNT]) -> Self {
        Self::from_values(values)
    }
}

// ============================================================================
// BUILDER PATTERN
// ============================================================================

/// Builder for creating FeatureVector with named setters.
///
/// County and containment are clamped to the input bounds; all other
/// fields are accepted as given. No cross-field checks are made.
pub struct FeatureVectorBuilder {
    vector: FeatureVector,
}

impl FeatureVectorBuilder {
    pub fn new() -> Self {
        Self { vector: FeatureVector::new() }
    }

    // Location
    pub fn county(mut self, code: u8) -> Self {
        let code = code.clamp(COUNTY_MIN, COUNTY_MAX);
        self.vector.set(IDX_COUNTY, f32::from(code));
        self
    }

    pub fn latitude(mut self, degrees: f64) -> Self {
        self.vector.set(IDX_LATITUDE, degrees as f32);
        self
    }

    pub fn longitude(mut self, degrees: f64) -> Self {
        self.vector.set(IDX_LONGITUDE, degrees as f32);
        self
    }

    // Fire status
    pub fn percent_contained(mut self, percent: f64) -> Self {
        self.vector.set(IDX_PERCENT_CONTAINED, clamp_percent(percent) as f32);
        self
    }

    pub fn major_incident(mut self, major: MajorIncident) -> Self {
        self.vector.set(IDX_MAJOR_INCIDENT, f32::from(major.as_flag()));
        self
    }

    // Deployed resources
    pub fn personnel(mut self, count: u32) -> Self {
        self.vector.set(IDX_PERSONNEL, count as f32);
        self
    }

    pub fn engines(mut self, count: u32) -> Self {
        self.vector.set(IDX_ENGINES, count as f32);
        self
    }

    pub fn helicopters(mut self, count: u32) -> Self {
        self.vector.set(IDX_HELICOPTERS, count as f32);
        self
    }

    pub fn dozers(mut self, count: u32) -> Self {
        self.vector.set(IDX_DOZERS, count as f32);
        self
    }

    pub fn water_tenders(mut self, count: u32) -> Self {
        self.vector.set(IDX_WATER_TENDERS, count as f32);
        self
    }

    pub fn build(self) -> FeatureVector {
        self.vector
    }
}

impl Default for FeatureVectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_new() {
        let vector = FeatureVector::new();
        assert_eq!(vector.version, FEATURE_VERSION);
        assert_eq!(vector.layout_hash, layout_hash());
        assert_eq!(vector.values.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_builder_writes_named_slots() {
        let vector = FeatureVectorBuilder::new()
            .county(15)
            .percent_contained(75.0)
            .helicopters(3)
            .build();

        assert_eq!(vector.get_by_name("Counties"), Some(15.0));
        assert_eq!(vector.get_by_name("PercentContained"), Some(75.0));
        assert_eq!(vector.get_by_name("Helicopters"), Some(3.0));
        assert_eq!(vector.get_by_name("Dozers"), Some(0.0));
    }

    #[test]
    fn test_builder_clamps_widget_bounds() {
        let vector = FeatureVectorBuilder::new()
            .county(200)
            .percent_contained(-10.0)
            .build();

        assert_eq!(vector.get(IDX_COUNTY), Some(60.0));
        assert_eq!(vector.get(IDX_PERCENT_CONTAINED), Some(0.0));
    }

    #[test]
    fn test_builder_accepts_contradictory_inputs() {
        let vector = FeatureVectorBuilder::new()
            .percent_contained(95.0)
            .personnel(500)
            .build();

        assert_eq!(vector.get(IDX_PERCENT_CONTAINED), Some(95.0));
        assert_eq!(vector.get(IDX_PERSONNEL), Some(500.0));
    }

    #[test]
    fn test_major_incident_slot() {
        let yes = FeatureVectorBuilder::new().major_incident(MajorIncident::Yes).build();
        let no = FeatureVectorBuilder::new().major_incident(MajorIncident::No).build();

        assert_eq!(yes.get(IDX_MAJOR_INCIDENT), Some(1.0));
        assert_eq!(no.get(IDX_MAJOR_INCIDENT), Some(0.0));
    }

    #[test]
    fn test_set_then_get_by_name() {
        let mut vector = FeatureVector::new();
        vector.set(IDX_ENGINES, 42.0);
        assert_eq!(vector.get_by_name("Engines"), Some(42.0));
        assert_eq!(vector.get_by_name("nonexistent"), None);

        vector.set(FEATURE_COUNT, 1.0);
        assert_eq!(vector.get(FEATURE_COUNT), None);
    }

    #[test]
    fn test_validation() {
        let mut vector = FeatureVector::new();
        assert!(vector.is_compatible());

        vector.layout_hash ^= 0xffff;
        assert!(vector.validate().is_err());
    }

    #[test]
    fn test_to_log_entry() {
        let vector = FeatureVectorBuilder::new().engines(5).build();

        let log = vector.to_log_entry();
        assert_eq!(log["feature_version"], FEATURE_VERSION);
        assert!(log["layout_hash"].as_u64().is_some());
        assert_eq!(log["named_values"]["Engines"], 5.0);
        assert_eq!(log["values"].as_array().map(|v| v.len()), Some(FEATURE_COUNT));
    }
}
