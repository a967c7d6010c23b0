//! API Regression Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! the /health and /api/v1/* endpoints using `tower::ServiceExt::oneshot()`.
//! No binary spawn, no network port — runs in CI without `#[ignore]`.

use hydrawatch::api::{create_app, ApiState};
use hydrawatch::registry::ProfileRegistry;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_state() -> ApiState {
    ApiState::new(Arc::new(ProfileRegistry::builtin()), "TEST-FIELD")
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// /health returns a JSON object with service identification.
#[tokio::test]
async fn health_returns_service_identity() {
    let app = create_app(create_test_state());

    let resp = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "hydrawatch");
    assert_eq!(json["field"], "TEST-FIELD");
}

/// /api/v1/profiles lists all five classes in registry order.
#[tokio::test]
async fn profiles_lists_all_classes() {
    let app = create_app(create_test_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/profiles")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    assert_eq!(data[0]["class"], "gathering");
    assert_eq!(data[4]["class"], "distribution");
    assert_eq!(data[3]["is_dry"], true);
    assert_eq!(json["meta"]["version"], "1");
}

/// /api/v1/profiles/:class resolves case-insensitively.
#[tokio::test]
async fn single_profile_resolves_by_name() {
    let app = create_app(create_test_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/profiles/Flowline")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["class"], "flowline");
    assert_eq!(json["data"]["is_dry"], false);
}

/// Unknown class name on the profile path returns 404 with the error code.
#[tokio::test]
async fn unknown_profile_is_404() {
    let app = create_app(create_test_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/profiles/umbilical")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json = body_json(resp).await;
    assert_eq!(json["error"]["code"], "UNKNOWN_CLASS");
}

/// POST /api/v1/evaluate returns the reference Flowline assessment.
#[tokio::test]
async fn evaluate_returns_reference_assessment() {
    let app = create_app(create_test_state());

    let body = serde_json::json!({
        "class": "flowline",
        "pressure_bar": 57.0,
        "temperature_c": 15.0,
        "inhibitor_meg_percent": 10.0,
        "salinity_ppm": 10000.0,
        "water_cut_percent": 25.0
    });
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/evaluate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    let data = &json["data"];
    assert_eq!(data["class"], "flowline");
    assert_eq!(data["zone"], "Safe");
    assert_eq!(data["zone_label"], "SAFE");
    assert_eq!(data["damping_applied"], false);
    let risk = data["risk_index"].as_f64().unwrap();
    assert!((risk - 0.249_052_3).abs() < 1e-6);
}

/// Dry class without ingress reports the damping flag and a negligible index.
#[tokio::test]
async fn evaluate_reports_dry_damping() {
    let app = create_app(create_test_state());

    let body = serde_json::json!({
        "class": "transmission",
        "pressure_bar": 120.0,
        "temperature_c": 2.0
    });
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/evaluate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["damping_applied"], true);
    assert!(json["data"]["risk_index"].as_f64().unwrap() <= 0.1);
}

/// Unknown class in the evaluate body returns 400 with the error code.
#[tokio::test]
async fn evaluate_rejects_unknown_class() {
    let app = create_app(create_test_state());

    let body = serde_json::json!({
        "class": "umbilical",
        "pressure_bar": 50.0,
        "temperature_c": 10.0
    });
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/evaluate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["error"]["code"], "UNKNOWN_CLASS");
}
