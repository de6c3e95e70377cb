//! Request/response models

pub mod prediction;
pub mod preset;

pub use prediction::*;
pub use preset::*;
