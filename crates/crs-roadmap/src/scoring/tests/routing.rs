use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::scoring::router::score_handler;
use crate::scoring::ScoringService;

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn reference_profile_json() -> Value {
    json!({
        "age": 25,
        "marital_status": "single",
        "education": "bachelors",
        "first_language": { "speaking": 9, "listening": 9, "reading": 9, "writing": 9 },
        "canadian_experience_months": 0
    })
}

fn baseline_json() -> Value {
    json!({
        "crs": 472,
        "language_level": 8,
        "canadian_experience_months": 10,
        "french_level": "none",
        "has_provincial_nomination": false,
        "has_job_offer": false
    })
}

#[tokio::test]
async fn score_handler_returns_breakdown() {
    let service = Arc::new(ScoringService::default());

    let Json(breakdown) = score_handler(State(service), Json(reference_profile_json()))
        .await
        .expect("profile scores");

    assert_eq!(breakdown.total, 346);
    assert_eq!(breakdown.components.first_language, 116);
}

#[tokio::test]
async fn score_route_serializes_components_and_notes() {
    let response = router()
        .oneshot(post_json("/api/v1/crs/score", reference_profile_json()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total"], 346);
    assert_eq!(body["components"]["age"], 110);
    assert_eq!(body["components"]["canadian_experience"], 0);
    assert_eq!(body["notes"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn score_route_rejects_unknown_education() {
    let mut profile = reference_profile_json();
    profile["education"] = json!("bootcamp");

    let response = router()
        .oneshot(post_json("/api/v1/crs/score", profile))
        .await
        .expect("router responds");

    assert_bad_request(response, "bootcamp").await;
}

#[tokio::test]
async fn score_route_rejects_unscored_benchmark() {
    let mut profile = reference_profile_json();
    profile["first_language"]["reading"] = json!(2);

    let response = router()
        .oneshot(post_json("/api/v1/crs/score", profile))
        .await
        .expect("router responds");

    assert_bad_request(response, "CLB 2").await;
}

#[tokio::test]
async fn diff_route_reports_delta() {
    let mut improved = reference_profile_json();
    improved["canadian_experience_months"] = json!(24);

    let response = router()
        .oneshot(post_json(
            "/api/v1/crs/diff",
            json!({ "from": reference_profile_json(), "to": improved }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["from"], 346);
    assert_eq!(body["to"], 399);
    assert_eq!(body["delta"], 53);
}

#[tokio::test]
async fn improvements_route_ranks_nomination_first() {
    let response = router()
        .oneshot(post_json("/api/v1/scenarios/improvements", baseline_json()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let items = body["items"].as_array().expect("items array");
    assert_eq!(items.len(), 7);
    assert_eq!(items[0]["key"], "pnp");
    assert_eq!(items[0]["min"], 600);
    assert_eq!(items[0]["effort"], "High");
    assert_eq!(items[1]["key"], "french_b2");
}

#[tokio::test]
async fn project_route_applies_selection() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/scenarios/project",
            json!({ "baseline": baseline_json(), "selected": { "pnp": true, "job_offer": false } }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, json!({ "min": 1072, "max": 1072 }));
}

#[tokio::test]
async fn project_route_rejects_unknown_improvement() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/scenarios/project",
            json!({ "baseline": baseline_json(), "selected": { "lottery": true } }),
        ))
        .await
        .expect("router responds");

    assert_bad_request(response, "lottery").await;
}

#[tokio::test]
async fn estimate_route_returns_quick_crs() {
    let response = router()
        .oneshot(post_json("/api/v1/scenarios/estimate", baseline_json()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["crs"], 437);
}

#[tokio::test]
async fn score_route_saturates_oversized_numbers() {
    let mut oldest = reference_profile_json();
    oldest["age"] = json!(99);
    let mut oversized = reference_profile_json();
    oversized["age"] = json!(5_000_000_000i64);

    let expected = json_body(
        router()
            .oneshot(post_json("/api/v1/crs/score", oldest))
            .await
            .expect("router responds"),
    )
    .await;
    let response = router()
        .oneshot(post_json("/api/v1/crs/score", oversized))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, expected);
    assert_eq!(body["components"]["age"], 0);
    assert_eq!(body["total"], 236);
}

#[tokio::test]
async fn score_route_truncates_fractional_months() {
    let mut profile = reference_profile_json();
    profile["canadian_experience_months"] = json!(12.9);

    let response = router()
        .oneshot(post_json("/api/v1/crs/score", profile))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["components"]["canadian_experience"], 40);
}

#[tokio::test]
async fn project_route_saturates_oversized_baseline() {
    let mut baseline = baseline_json();
    baseline["crs"] = json!(9_999_999_999i64);

    let response = router()
        .oneshot(post_json(
            "/api/v1/scenarios/project",
            json!({ "baseline": baseline, "selected": { "pnp": true } }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, json!({ "min": 1200, "max": 1200 }));
}

#[tokio::test]
async fn score_route_still_rejects_non_numeric_age() {
    let mut profile = reference_profile_json();
    profile["age"] = json!("thirty");

    let response = router()
        .oneshot(post_json("/api/v1/crs/score", profile))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
