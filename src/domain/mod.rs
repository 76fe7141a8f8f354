//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors)
//! - `analysis` - Pure domain services for choice analysis (validation, statistics, export)

pub mod analysis;
pub mod foundation;
