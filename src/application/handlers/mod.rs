//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod analyze_choices;

pub use analyze_choices::{AnalyzeChoicesCommand, AnalyzeChoicesHandler, AnalyzeChoicesResult};
