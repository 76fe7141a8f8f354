//! Analysis Module - Pure domain services for choice analysis.
//!
//! This module contains stateless functions that operate on domain objects
//! to rank a set of candidate decisions.
//!
//! # Components
//!
//! - `Choice` / `Outcome` - Input data types for one analysis run
//! - `ChoiceValidator` - Structural and range checks, first violation wins
//! - `ChoiceAnalyzer` - Expected value, risk, and sensitivity per choice
//! - `Insights` - Headline picks (best, lowest risk, most sensitive)
//! - `ReportExporter` - Plain-text rendering of results
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod analyzer;
mod choice;
mod export;
mod report;
mod result;
mod validator;

pub use analyzer::{ChoiceAnalyzer, OPTIMISTIC_FACTOR, PESSIMISTIC_FACTOR};
pub use choice::{Choice, Outcome};
pub use export::{ReportExporter, DEFAULT_EXPORT_TITLE};
pub use report::Insights;
pub use result::{AnalysisResult, RiskLevel, SensitivityLevel};
pub use validator::{
    ChoiceValidator, IMPACT_RANGE, IMPORTANCE_RANGE, MAX_DESCRIPTION_CHARS, MAX_NAME_CHARS,
    MIN_CHOICES, PROBABILITY_RANGE,
};
