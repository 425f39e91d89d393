//! Route definitions for the portfolio site.

pub mod health;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{admin, contact, pages};
use crate::state::AppState;

/// Build the site route tree.
///
/// ```text
/// GET    /                           home (featured projects)
/// GET    /about                      about page
/// GET    /projects                   project listing
/// GET    /contact                    contact form
/// POST   /contact                    contact submission
///
/// GET    /admin                      dashboard          (basic auth)
/// POST   /admin/projects             create project     (basic auth)
/// POST   /admin/projects/{id}/edit   update project     (basic auth)
/// DELETE /admin/projects/{id}        delete project     (basic auth)
/// ```
///
/// Admin routes require credentials, enforced by the `AdminAuth` handler
/// extractor.
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/projects", get(pages::projects))
        .route("/contact", get(contact::page).post(contact::submit))
        .route("/admin", get(admin::dashboard))
        .route("/admin/projects", post(admin::add_project))
        .route("/admin/projects/{id}/edit", post(admin::edit_project))
        .route("/admin/projects/{id}", delete(admin::delete_project))
}
