#![allow(dead_code)]

use aftersales_gateway::{build_router, AppState, EnvironmentConfig};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

/// Puerto sin servidor: cualquier llamada falla por transporte
pub const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:1";

pub fn app_with_backend(url: &str) -> Router {
    let config = EnvironmentConfig::for_upstream(url);
    build_router(AppState::new(config).expect("app state"))
}

pub fn app_for(server: &MockServer) -> Router {
    app_with_backend(&server.uri())
}

pub fn unreachable_app() -> Router {
    app_with_backend(UNREACHABLE_BACKEND)
}

pub async fn send_raw(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(raw) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let raw = body.map(|b| b.to_string());
    send_raw(app, method, uri, raw.as_deref()).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
