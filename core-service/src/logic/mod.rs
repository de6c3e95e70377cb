//! Logic Module - Business Logic & Engines
//!
//! - `features/` - Model input layout, builder, presets
//! - `model/` - Scaler/regressor capabilities and artifact loading
//! - `severity/` - Tier thresholds and action bundles
//! - `pipeline` - Scale → predict → classify

pub mod error;
pub mod features;
pub mod model;
pub mod severity;
pub mod pipeline;
