//! Handlers for the admin dashboard and project management routes.
//!
//! Every handler takes the [`AdminAuth`] extractor, so a request only
//! reaches this module with valid credentials.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::{Form, Json};
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use portfolio_core::error::CoreError;
use portfolio_core::project::{parse_tech_stack, ProjectStatus};
use portfolio_store::fallback;
use portfolio_store::models::{ContactMessage, CreateProject, Project, UpdateProject};
use portfolio_store::repositories::{ContactRepo, ProjectRepo};
use serde::{Deserialize, Serialize};

use crate::auth::AdminAuth;
use crate::error::{AppError, AppResult};
use crate::handlers::render;
use crate::state::AppState;

/// How many recent contact messages the dashboard shows.
const RECENT_CONTACTS_LIMIT: i64 = 5;

#[derive(Template)]
#[template(path = "admin.html")]
struct AdminTemplate {
    projects: Vec<Project>,
    contacts: Vec<ContactMessage>,
}

/// GET /admin
pub async fn dashboard(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> AppResult<Html<String>> {
    let (projects, contacts) = match state.store() {
        Some(store) => {
            let projects = match ProjectRepo::find_all(store).await {
                Ok(projects) => projects,
                Err(err) => {
                    tracing::warn!(error = %err, "Dashboard project query failed, serving fallback data");
                    fallback::sample_projects()
                }
            };
            let contacts = match ContactRepo::recent(store, RECENT_CONTACTS_LIMIT).await {
                Ok(contacts) => contacts,
                Err(err) => {
                    tracing::warn!(error = %err, "Dashboard contact query failed");
                    Vec::new()
                }
            };
            (projects, contacts)
        }
        None => (fallback::sample_projects(), Vec::new()),
    };

    render(&AdminTemplate { projects, contacts })
}

/// Project form fields as the admin pages post them.
#[derive(Debug, Deserialize)]
pub struct ProjectForm {
    name: String,
    description: String,
    /// Comma-separated on the wire; split and trimmed before validation.
    tech_stack: String,
    status: String,
    #[serde(default)]
    github_url: String,
    #[serde(default)]
    demo_url: String,
    /// Checkbox: present (any value) means checked.
    #[serde(default)]
    featured: Option<String>,
}

impl ProjectForm {
    fn into_create(self) -> Result<CreateProject, CoreError> {
        let status = ProjectStatus::try_from(self.status.as_str())?;
        let input = CreateProject {
            name: self.name,
            description: self.description,
            tech_stack: parse_tech_stack(&self.tech_stack),
            status,
            github_url: none_if_empty(self.github_url),
            demo_url: none_if_empty(self.demo_url),
            image_url: None,
            featured: self.featured.is_some(),
        };
        input.validate()?;
        Ok(input)
    }

    fn into_update(self) -> Result<UpdateProject, CoreError> {
        let status = ProjectStatus::try_from(self.status.as_str())?;
        let update = UpdateProject {
            name: self.name,
            description: self.description,
            tech_stack: parse_tech_stack(&self.tech_stack),
            status,
            github_url: none_if_empty(self.github_url),
            demo_url: none_if_empty(self.demo_url),
            featured: self.featured.is_some(),
        };
        update.validate()?;
        Ok(update)
    }
}

fn none_if_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// POST /admin/projects
///
/// Redirects back to the dashboard regardless of outcome; failures are
/// logged, not surfaced.
pub async fn add_project(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Form(form): Form<ProjectForm>,
) -> Redirect {
    match form.into_create() {
        Ok(input) => match state.store() {
            Some(store) => {
                match ProjectRepo::insert(store, input.into_project(Utc::now())).await {
                    Ok(id) => tracing::info!(id = %id, "Project created"),
                    Err(err) => tracing::error!(error = %err, "Failed to create project"),
                }
            }
            None => tracing::error!("Record store unavailable, project not created"),
        },
        Err(err) => tracing::warn!(error = %err, "Rejected project form"),
    }

    Redirect::to("/admin")
}

/// POST /admin/projects/{id}/edit
///
/// Overwrites exactly the fields the edit form carries and stamps
/// `updated_at`. 404 when no record matches the id.
pub async fn edit_project(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ProjectForm>,
) -> AppResult<Redirect> {
    let id = parse_object_id(&id)?;

    let update = match form.into_update() {
        Ok(update) => update,
        Err(err) => {
            tracing::warn!(error = %err, "Rejected project edit form");
            return Ok(Redirect::to("/admin"));
        }
    };

    let store = state.store().ok_or_else(store_unavailable)?;

    if ProjectRepo::update_by_id(store, id, update).await? {
        tracing::info!(id = %id, "Project updated");
        Ok(Redirect::to("/admin"))
    } else {
        Err(not_found(id))
    }
}

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// DELETE /admin/projects/{id}
pub async fn delete_project(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = parse_object_id(&id)?;
    let store = state.store().ok_or_else(store_unavailable)?;

    if ProjectRepo::delete_by_id(store, id).await? {
        tracing::info!(id = %id, "Project deleted");
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(not_found(id))
    }
}

/// An id that is not valid ObjectId hex cannot match any record, so it maps
/// to the same not-found error as a missing record.
fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| {
        AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: id.to_string(),
        })
    })
}

fn not_found(id: ObjectId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: id.to_hex(),
    })
}

fn store_unavailable() -> AppError {
    AppError::InternalError("record store unavailable".to_string())
}
