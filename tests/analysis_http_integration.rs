//! Integration tests for analysis HTTP endpoints.
//!
//! These tests drive the router directly with `tower::ServiceExt::oneshot`:
//! 1. Request DTOs deserialize correctly
//! 2. Validation failures surface their messages verbatim
//! 3. Response bodies carry the statistics and insights

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use decision_compass::adapters::http::analysis_routes;

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn two_valid_choices() -> Value {
    json!({
        "choices": [
            {
                "name": "Plan A",
                "outcomes": [
                    {"description": "Strong uptake", "impact": 5, "probability": 0.6, "importance": 2},
                    {"description": "Slow start", "impact": 2, "probability": 0.4, "importance": 3}
                ]
            },
            {
                "name": "Plan B",
                "outcomes": [
                    {"description": "Quick win", "impact": 7, "probability": 0.5, "importance": 1},
                    {"description": "Backfires", "impact": -3, "probability": 0.5, "importance": 2}
                ]
            }
        ]
    })
}

#[tokio::test]
async fn health_returns_ok() {
    let response = analysis_routes()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn analyze_returns_results_and_insights() {
    let response = analysis_routes()
        .oneshot(post_json("/api/analysis", &two_valid_choices()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["name"], "Plan A");
    assert_eq!(results[1]["name"], "Plan B");
    assert!(results[0]["expectedValue"].is_number());
    assert!(results[0]["riskLevel"].is_string());
    assert!(results[0]["sensitivityLevel"].is_string());

    // A: 5*0.6*2 + 2*0.4*3 = 8.4; B: 7*0.5*1 + -3*0.5*2 = 0.5.
    assert!((results[0]["expectedValue"].as_f64().unwrap() - 8.4).abs() < 1e-9);
    assert_eq!(body["insights"]["bestOption"], "Plan A");
}

#[tokio::test]
async fn analyze_rejects_single_choice_with_verbatim_message() {
    let body = json!({
        "choices": [
            {
                "name": "Only one",
                "outcomes": [
                    {"description": "Something", "impact": 1, "probability": 0.5, "importance": 1}
                ]
            }
        ]
    });
    let response = analysis_routes()
        .oneshot(post_json("/api/analysis", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(
        body["message"],
        "Please add at least two options before analyzing."
    );
}

#[tokio::test]
async fn analyze_rejects_out_of_range_probability() {
    let mut body = two_valid_choices();
    body["choices"][1]["outcomes"][0]["probability"] = json!(1.5);

    let response = analysis_routes()
        .oneshot(post_json("/api/analysis", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "Option 2, Outcome 1: Probability must be a number between 0 and 1."
    );
}

#[tokio::test]
async fn export_returns_plain_text_report() {
    let response = analysis_routes()
        .oneshot(post_json("/api/analysis/export", &two_valid_choices()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.starts_with("Decision Analysis Results\n\n"));
    assert!(text.contains("Option: Plan A\n  Expected Value: 8.40\n"));
    assert!(text.contains("Option: Plan B\n"));
}

#[tokio::test]
async fn export_honors_custom_title() {
    let mut body = two_valid_choices();
    body["title"] = json!("Decision Analysis Results:");

    let response = analysis_routes()
        .oneshot(post_json("/api/analysis/export", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.starts_with("Decision Analysis Results:\n\n"));
}

#[tokio::test]
async fn export_rejects_invalid_choices() {
    let mut body = two_valid_choices();
    body["choices"][0]["name"] = json!("");

    let response = analysis_routes()
        .oneshot(post_json("/api/analysis/export", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Option 1: Name is required.");
}
