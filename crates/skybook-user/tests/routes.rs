#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use skybook_core::auth::{CredentialVerifier, SessionToken};
use skybook_core::config::ServiceConfig;
use skybook_user::{app_state::AppState, router};

fn app() -> Router {
    let state = AppState::new(ServiceConfig::default()).unwrap();
    router::build_router(state)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_says_alive() {
    let resp = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"I'm alive");
}

#[tokio::test]
async fn login_with_demo_credentials_returns_session() {
    let resp = app()
        .oneshot(post_json(
            "/login",
            json!({ "username": "user", "password": "password" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert!(!body["session_id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn login_with_wrong_credentials_returns_empty_object() {
    let resp = app()
        .oneshot(post_json(
            "/login",
            json!({ "username": "user", "password": "hunter2" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!({}));
}

#[tokio::test]
async fn login_with_no_fields_returns_empty_object() {
    let resp = app().oneshot(post_json("/login", json!({}))).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!({}));
}

struct AlwaysToken;

#[async_trait]
impl CredentialVerifier for AlwaysToken {
    async fn verify(&self, _username: &str, _password: &str) -> Option<SessionToken> {
        Some(SessionToken("fixed-token".to_string()))
    }
}

#[tokio::test]
async fn login_uses_injected_verifier() {
    let state = AppState::with_verifier(ServiceConfig::default(), Arc::new(AlwaysToken)).unwrap();
    let resp = router::build_router(state)
        .oneshot(post_json(
            "/login",
            json!({ "username": "anyone", "password": "anything" }),
        ))
        .await
        .unwrap();

    assert_eq!(json_body(resp).await, json!({ "session_id": "fixed-token" }));
}

#[tokio::test]
async fn preference_returns_mock_record() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/preference/alice")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        json!({ "username": "alice", "cc_token": "zxcvbnm", "name": "Ronald" })
    );
}

#[tokio::test]
async fn update_preference_echoes_every_field() {
    let fields = json!({
        "username": "alice",
        "cc_token": "tok_123",
        "name": "Alice"
    });
    let resp = app()
        .oneshot(post_json("/update", fields.clone()))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, fields);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let req = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("]["))
        .unwrap();

    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn info_maps_timeout_to_metadata_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/metadata");
        then.status(200)
            .delay(std::time::Duration::from_secs(2))
            .json_body(json!({ "TaskARN": "arn", "AvailabilityZone": "az" }));
    });

    let mut cfg = ServiceConfig::default();
    cfg.service.metadata_endpoint = server.url("/v2/metadata");
    cfg.service.metadata_timeout_ms = 200;
    let state = AppState::new(cfg).unwrap();

    let resp = router::build_router(state)
        .oneshot(Request::builder().uri("/info").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(resp).await;
    assert_eq!(body["code"], "METADATA_UNAVAILABLE");
}
