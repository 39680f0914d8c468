//! End-to-end tests: HTTP request in, envelope-shaped response out

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use appfactory_fn::config::FunctionConfig;
use appfactory_fn::handler::ProcessingHandler;
use appfactory_fn::server::{create_router, AppState};

fn test_router(api_key: Option<&str>, auth_enabled: bool) -> Router {
    let config = FunctionConfig {
        api_key: api_key.map(str::to_string),
        auth_enabled,
        cors_origin: "*".to_string(),
        service_label: "AppFactory Hybrid Backend".to_string(),
        port: 8080,
    };
    create_router(Arc::new(AppState {
        handler: ProcessingHandler::new(config),
    }))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn matching_key_returns_success() {
    let app = test_router(Some("secret123"), true);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/process")
                .header("x-api-key", "secret123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert!(body["timestamp"].as_i64().unwrap() > 0);
    assert!(body["processing_time_ms"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn missing_key_is_unauthorized() {
    let app = test_router(Some("secret123"), true);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );

    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({"status": "unauthorized"}));
}

#[tokio::test]
async fn wrong_key_is_unauthorized() {
    let app = test_router(Some("secret123"), true);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/process")
                .header("x-api-key", "wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unconfigured_key_fails_closed() {
    let app = test_router(None, true);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/process")
                .header("x-api-key", "secret123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn any_method_and_path_reach_the_handler() {
    let app = test_router(Some("secret123"), true);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/some/nested/path?debug=1")
                .header("X-Api-Key", "secret123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn auth_disabled_serves_without_key() {
    let app = test_router(None, false);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
}
