//! Integration tests for the admin auth gate and project management routes.
//!
//! The test app runs without a record store: reads fall back to the fixed
//! sample data, form posts log-and-redirect, and the JSON delete route
//! surfaces a structured server error.

mod common;

use axum::http::header::{LOCATION, WWW_AUTHENTICATE};
use axum::http::{Method, StatusCode};
use common::{
    admin_auth_header, auth_header_for, body_json, body_string, build_test_app, get, post_form,
    request,
};

/// A syntactically valid ObjectId that matches no record.
const MISSING_ID: &str = "0123456789abcdef01234567";

const VALID_PROJECT_FORM: &str = "name=Test+Project\
    &description=A+sufficiently+long+description\
    &tech_stack=Rust%2C+Axum&status=Planning&featured=on";

// ---------------------------------------------------------------------------
// Auth gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_without_credentials_is_challenged() {
    let app = build_test_app();
    let response = get(app, "/admin").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let challenge = response
        .headers()
        .get(WWW_AUTHENTICATE)
        .expect("401 must carry a WWW-Authenticate header")
        .to_str()
        .unwrap();
    assert!(challenge.starts_with("Basic"));

    // No project data may leak past the gate.
    let body = body_string(response).await;
    assert!(!body.contains("Social Media Platform"));
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let app = build_test_app();
    let header = auth_header_for(common::TEST_ADMIN_USER, "wrong-password");
    let response = request(app, Method::GET, "/admin", Some(&header)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_authorization_header_is_rejected() {
    let app = build_test_app();
    let response = request(app, Method::GET, "/admin", Some("Bearer abc123")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_and_delete_also_require_credentials() {
    let response = post_form(build_test_app(), "/admin/projects", None, VALID_PROJECT_FORM).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let uri = format!("/admin/projects/{MISSING_ID}");
    let response = request(build_test_app(), Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_with_credentials_shows_fallback_projects_and_no_messages() {
    let app = build_test_app();
    let header = admin_auth_header();
    let response = request(app, Method::GET, "/admin", Some(&header)).await;

    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Social Media Platform"));
    assert!(html.contains("Emoji Classifier"));
    assert!(html.contains("No messages yet"));
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_project_redirects_to_dashboard_even_when_the_store_is_down() {
    let app = build_test_app();
    let header = admin_auth_header();
    let response = post_form(app, "/admin/projects", Some(&header), VALID_PROJECT_FORM).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/admin");
}

#[tokio::test]
async fn add_project_with_invalid_status_still_redirects() {
    let app = build_test_app();
    let header = admin_auth_header();
    let response = post_form(
        app,
        "/admin/projects",
        Some(&header),
        "name=Test&description=A+sufficiently+long+description\
         &tech_stack=Rust&status=Done",
    )
    .await;

    // Form failures are logged, never surfaced to the admin page.
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/admin");
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_with_invalid_form_redirects_without_touching_the_store() {
    let app = build_test_app();
    let header = admin_auth_header();
    let uri = format!("/admin/projects/{MISSING_ID}/edit");
    let response = post_form(
        app,
        &uri,
        Some(&header),
        "name=Test&description=short&tech_stack=Rust&status=Planning",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn edit_with_store_down_is_a_server_error() {
    let app = build_test_app();
    let header = admin_auth_header();
    let uri = format!("/admin/projects/{MISSING_ID}/edit");
    let response = post_form(app, &uri, Some(&header), VALID_PROJECT_FORM).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_with_malformed_id_is_not_found() {
    let app = build_test_app();
    let header = admin_auth_header();
    let response = request(
        app,
        Method::DELETE,
        "/admin/projects/not-a-valid-id",
        Some(&header),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn delete_with_store_down_is_a_server_error() {
    let app = build_test_app();
    let header = admin_auth_header();
    let uri = format!("/admin/projects/{MISSING_ID}");
    let response = request(app, Method::DELETE, &uri, Some(&header)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(json["error"].is_string());
}
