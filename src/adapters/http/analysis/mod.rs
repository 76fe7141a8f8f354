//! HTTP adapter for analysis endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AnalyzeRequest, AnalyzeResponse, AnalyzedChoiceView, ErrorResponse, ExportRequest};
pub use handlers::AnalysisApiError;
pub use routes::analysis_routes;
