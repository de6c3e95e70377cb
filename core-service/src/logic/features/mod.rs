//! Features Module - Model Input Assembly
//!
//! Turns raw incident fields into the fixed-order vector the scaler
//! and regressor were fit on.

pub mod layout;
pub mod vector;
pub mod input;
pub mod presets;

#[cfg(test)]
mod tests;

// Re-export common types
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, LayoutInfo, LayoutMismatchError};
pub use vector::{FeatureVector, FeatureVectorBuilder};
pub use input::{IncidentInput, MajorIncident, COUNTY_MAX, COUNTY_MIN, PERCENT_MAX, PERCENT_MIN};
pub use presets::{Preset, PRESETS};
