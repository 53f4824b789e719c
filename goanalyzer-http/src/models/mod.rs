pub mod analysis;

// Re-export all models for easier imports
pub use analysis::*;
