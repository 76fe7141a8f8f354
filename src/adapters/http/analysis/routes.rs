//! HTTP routes for analysis endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{analyze, export, health};

/// Creates the analysis router with all routes.
pub fn analysis_routes() -> Router {
    Router::new()
        // GET /health
        .route("/health", get(health))
        // POST /api/analysis
        .route("/api/analysis", post(analyze))
        // POST /api/analysis/export
        .route("/api/analysis/export", post(export))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_compile() {
        // This test ensures routes are correctly defined
        // Actual testing happens in the HTTP integration tests
        let _router: Router = analysis_routes();
    }
}
