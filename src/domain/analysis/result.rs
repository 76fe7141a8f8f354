//! Analysis result type and presentation-level classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Statistics computed for a single choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Copied from the analyzed choice.
    pub name: String,
    /// Sum of impact x probability x importance over the outcomes.
    pub expected_value: f64,
    /// Population standard deviation of the per-outcome contributions.
    pub risk: f64,
    /// Optimistic projection: every contribution amplified by 25%.
    pub plus: f64,
    /// Pessimistic projection: every contribution dampened by 25%.
    pub minus: f64,
    /// Magnitude of the swing between `plus` and `minus`.
    pub sensitivity: f64,
    /// Alias of `expected_value`; downstream thresholds key on this field.
    pub current: f64,
}

/// Risk classification on the standard-deviation scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sensitivity classification relative to the current expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensitivityLevel {
    Low,
    Medium,
    High,
}

impl SensitivityLevel {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            SensitivityLevel::Low => "Low",
            SensitivityLevel::Medium => "Medium",
            SensitivityLevel::High => "High",
        }
    }
}

impl fmt::Display for SensitivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl AnalysisResult {
    /// Classifies risk: High above 8, Medium above 4, Low otherwise.
    pub fn risk_level(&self) -> RiskLevel {
        if self.risk > 8.0 {
            RiskLevel::High
        } else if self.risk > 4.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Classifies sensitivity against fractions of `current`.
    ///
    /// `current` can be negative or zero, which makes the right side of the
    /// comparison negative and High almost unavoidable. That asymmetry is
    /// part of the observable contract and is kept as-is.
    pub fn sensitivity_level(&self) -> SensitivityLevel {
        if self.sensitivity > self.current * 0.4 {
            SensitivityLevel::High
        } else if self.sensitivity > self.current * 0.2 {
            SensitivityLevel::Medium
        } else {
            SensitivityLevel::Low
        }
    }
}
