//! HTTP handlers

pub mod health;
pub mod model;
pub mod presets;
pub mod predict;
pub mod severity;
