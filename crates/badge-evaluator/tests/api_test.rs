//! HTTP 接口集成测试
//!
//! 直接驱动 axum Router，不绑定端口。

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use badge_evaluator::{
    BadgeCatalog, BadgeTier, CatalogRegistry,
    api::{AppState, build_router},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::new(Arc::new(CatalogRegistry::builtin()), "badge-evaluator");
    build_router(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "badge-evaluator");
    assert_eq!(body["catalogs"], 2);
}

#[tokio::test]
async fn test_evaluate_default_catalog() {
    let (status, body) = get(app(), "/api/v1/badges/evaluate?xp=100").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["xp"], 100);
    assert_eq!(body["data"]["catalog"], "classic");
    assert_eq!(
        body["data"]["badges"],
        json!(["first_steps", "rising_star", "dedicated_learner"])
    );
}

#[tokio::test]
async fn test_evaluate_below_first_threshold_is_empty() {
    let (status, body) = get(app(), "/api/v1/badges/evaluate?xp=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["badges"], json!([]));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/badges/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_evaluate_named_catalog() {
    let (status, body) = get(app(), "/api/v1/badges/evaluate?xp=200&catalog=extended").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["catalog"], "extended");
    assert_eq!(
        body["data"]["badges"],
        json!(["first_steps", "rising_star", "dedicated_learner", "bookworm"])
    );
}

#[tokio::test]
async fn test_evaluate_max_u64_xp() {
    let (status, body) = get(app(), "/api/v1/badges/evaluate?xp=18446744073709551615").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["xp"], u64::MAX);
    assert_eq!(
        body["data"]["badges"],
        json!([
            "first_steps",
            "rising_star",
            "dedicated_learner",
            "quiz_master",
            "expert",
            "legend"
        ])
    );
}

#[tokio::test]
async fn test_xp_above_u64_is_invalid_argument() {
    let (status, body) = get(app(), "/api/v1/badges/evaluate?xp=18446744073709551616").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_negative_xp_is_invalid_argument() {
    let (status, body) = get(app(), "/api/v1/badges/evaluate?xp=-5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn test_non_numeric_or_missing_xp_is_invalid_argument() {
    for uri in [
        "/api/v1/badges/evaluate?xp=lots",
        "/api/v1/badges/evaluate?xp=1.5",
        "/api/v1/badges/evaluate",
    ] {
        let (status, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["code"], "INVALID_ARGUMENT", "{}", uri);
    }
}

#[tokio::test]
async fn test_unknown_catalog_is_not_found() {
    let (status, body) = get(app(), "/api/v1/badges/evaluate?xp=10&catalog=seasonal").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "CATALOG_NOT_FOUND");
}

#[tokio::test]
async fn test_empty_catalog_name_is_validation_error() {
    let (status, body) = get(app(), "/api/v1/badges/evaluate?xp=10&catalog=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_progress() {
    let (status, body) = get(app(), "/api/v1/badges/progress?xp=75").await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["earned"], json!(["first_steps", "rising_star"]));
    assert_eq!(data["nextBadge"]["badge"], "dedicated_learner");
    assert_eq!(data["nextBadge"]["xpRemaining"], 25);
    assert_eq!(data["tierProgressPercent"], 50);
}

#[tokio::test]
async fn test_progress_complete() {
    let (status, body) = get(app(), "/api/v1/badges/progress?xp=2000&catalog=extended").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nextBadge"], Value::Null);
    assert_eq!(body["data"]["tierProgressPercent"], 100);
}

#[tokio::test]
async fn test_list_catalogs() {
    let (status, body) = get(app(), "/api/v1/catalogs").await;

    assert_eq!(status, StatusCode::OK);
    let catalogs = body["data"].as_array().unwrap();
    assert_eq!(catalogs.len(), 2);
    assert_eq!(catalogs[0]["name"], "classic");
    assert_eq!(catalogs[0]["isDefault"], true);
    assert_eq!(catalogs[1]["name"], "extended");
    assert_eq!(catalogs[1]["isDefault"], false);
    assert_eq!(catalogs[1]["tiers"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_get_catalog() {
    let (status, body) = get(app(), "/api/v1/catalogs/classic").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tiers"][5], json!({"badge": "legend", "threshold": 1000}));

    let (status, body) = get(app(), "/api/v1/catalogs/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "CATALOG_NOT_FOUND");
}

#[tokio::test]
async fn test_custom_default_catalog() {
    let custom = BadgeCatalog::new(
        "campus",
        vec![BadgeTier::new("first_steps", 5), BadgeTier::new("regular", 40)],
    )
    .unwrap();
    let registry = CatalogRegistry::new([BadgeCatalog::classic(), custom], "campus").unwrap();
    let app = build_router(AppState::new(Arc::new(registry), "badge-evaluator"));

    let (status, body) = get(app, "/api/v1/badges/evaluate?xp=40").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["catalog"], "campus");
    assert_eq!(body["data"]["badges"], json!(["first_steps", "regular"]));
}

#[tokio::test]
async fn test_request_id_propagated() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-123");

    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
