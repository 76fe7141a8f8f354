//! HTTP adapters - REST API implementations.

pub mod analysis;

// Re-export key types for convenience
pub use analysis::analysis_routes;
