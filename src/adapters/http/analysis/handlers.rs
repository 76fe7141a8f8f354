//! HTTP handlers for analysis endpoints.
//!
//! These handlers connect Axum routes to the application layer. The core is
//! pure and stateless, so there is no shared application state to carry.

use axum::extract::Json;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::{AnalyzeChoicesCommand, AnalyzeChoicesHandler};
use crate::domain::analysis::{ChoiceAnalyzer, ChoiceValidator, ReportExporter, DEFAULT_EXPORT_TITLE};
use crate::domain::foundation::ValidationError;

use super::dto::{AnalyzeRequest, AnalyzeResponse, AnalyzedChoiceView, ErrorResponse, ExportRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analysis API error that implements IntoResponse.
#[derive(Debug)]
pub enum AnalysisApiError {
    /// Input failed validation; the message is surfaced to the user verbatim.
    Validation(String),
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AnalysisApiError::Validation(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::validation_failed(message)),
            )
                .into_response(),
        }
    }
}

impl From<ValidationError> for AnalysisApiError {
    fn from(error: ValidationError) -> Self {
        AnalysisApiError::Validation(error.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
///
/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /api/analysis
///
/// Validates the submitted choices and returns per-choice statistics with
/// classification labels, plus headline insights.
pub async fn analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AnalysisApiError> {
    let command = AnalyzeChoicesCommand {
        choices: request.choices,
    };
    let outcome = AnalyzeChoicesHandler::handle(command)?;

    Ok(Json(AnalyzeResponse {
        results: outcome
            .results
            .into_iter()
            .map(AnalyzedChoiceView::from)
            .collect(),
        insights: outcome.insights,
    }))
}

/// POST /api/analysis/export
///
/// Validates and analyzes the submitted choices, then renders the results
/// as the plain-text report used for copy and download flows.
pub async fn export(
    Json(request): Json<ExportRequest>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    ChoiceValidator::validate(&request.choices)?;

    let results = ChoiceAnalyzer::analyze(&request.choices);
    let title = request.title.as_deref().unwrap_or(DEFAULT_EXPORT_TITLE);
    let text = ReportExporter::render(Some(title), &results);

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    ))
}
