//! Configuration module for the strategy engine.

pub mod analysis;

// Re-export commonly used items
pub use analysis::{ENGINE, EngineConfig};
