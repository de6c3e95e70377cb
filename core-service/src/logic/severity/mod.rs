//! Severity Module - Classification Policy
//!
//! Maps a predicted burn area to a tier and its canned guidance.

pub mod types;
pub mod threshold;
pub mod classifier;

// Re-export common types
pub use types::{ActionBundle, SeverityTier, format_acres};
pub use threshold::SeverityThresholds;
pub use classifier::{action_bundle, classify, severity_guide, GuideEntry};
