//! HTTP DTOs for analysis endpoints.
//!
//! The domain types are already designed for serialization with camelCase
//! wire names, so request bodies deserialize straight into them.

pub use crate::domain::analysis::{AnalysisResult, Choice, Insights, Outcome};

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for POST /api/analysis.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub choices: Vec<Choice>,
}

/// Request body for POST /api/analysis/export.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub choices: Vec<Choice>,
    /// Title line for the exported text; defaults to the standard report title.
    pub title: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One analyzed choice with its classification labels attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedChoiceView {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub risk_level: String,
    pub sensitivity_level: String,
}

impl From<AnalysisResult> for AnalyzedChoiceView {
    fn from(result: AnalysisResult) -> Self {
        let risk_level = result.risk_level().label().to_string();
        let sensitivity_level = result.sensitivity_level().label().to_string();
        Self {
            result,
            risk_level,
            sensitivity_level,
        }
    }
}

/// Response body for POST /api/analysis.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub results: Vec<AnalyzedChoiceView>,
    pub insights: Insights,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
