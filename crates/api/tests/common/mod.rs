#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use portfolio_api::auth::AdminCredentials;
use portfolio_api::config::ServerConfig;
use portfolio_api::routes;
use portfolio_api::state::AppState;

pub const TEST_ADMIN_USER: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "test-password";

/// Build a test `ServerConfig` with safe defaults and known admin
/// credentials.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        static_dir: "static".to_string(),
        admin: AdminCredentials {
            username: TEST_ADMIN_USER.to_string(),
            password: TEST_ADMIN_PASSWORD.to_string(),
        },
    }
}

/// Build the full application router with the production middleware stack,
/// with no record store attached (degraded mode) and no notifier.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware (request ID, timeout, tracing, panic
/// recovery) that production uses. With no store, every read path serves
/// the fixed fallback data.
pub fn build_test_app() -> Router {
    let state = AppState {
        store: None,
        config: Arc::new(test_config()),
        notifier: None,
    };

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::site_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    request(app, Method::GET, uri, None).await
}

/// Issue a bodyless request with an optional `Authorization` header value.
pub async fn request(app: Router, method: Method, uri: &str, auth: Option<&str>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST a urlencoded form with an optional `Authorization` header value.
pub async fn post_form(app: Router, uri: &str, auth: Option<&str>, body: &str) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// `Authorization` header value for the given username/password pair.
pub fn auth_header_for(username: &str, password: &str) -> String {
    use base64::Engine;
    let credentials = format!("{username}:{password}");
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(credentials)
    )
}

/// `Authorization` header value for the test admin credentials.
pub fn admin_auth_header() -> String {
    auth_header_for(TEST_ADMIN_USER, TEST_ADMIN_PASSWORD)
}

/// Collect a response body into a string.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
