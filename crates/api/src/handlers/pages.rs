//! Handlers for the public site pages.
//!
//! Read paths never fail outward: when the record store is down or a query
//! errors, the fixed sample set stands in and the page renders normally.

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use portfolio_store::fallback;
use portfolio_store::models::Project;
use portfolio_store::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::handlers::render;
use crate::state::AppState;

/// How many featured projects the home page shows.
const FEATURED_LIMIT: i64 = 2;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    featured_projects: Vec<Project>,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate;

#[derive(Template)]
#[template(path = "projects.html")]
struct ProjectsTemplate {
    projects: Vec<Project>,
}

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let featured_projects = match state.store() {
        Some(store) => match ProjectRepo::find_featured(store, FEATURED_LIMIT).await {
            Ok(projects) => projects,
            Err(err) => {
                tracing::warn!(error = %err, "Featured project query failed, serving fallback data");
                fallback::featured_projects(FEATURED_LIMIT as usize)
            }
        },
        None => fallback::featured_projects(FEATURED_LIMIT as usize),
    };

    render(&HomeTemplate { featured_projects })
}

/// GET /about
pub async fn about() -> AppResult<Html<String>> {
    render(&AboutTemplate)
}

/// GET /projects
pub async fn projects(State(state): State<AppState>) -> AppResult<Html<String>> {
    let projects = match state.store() {
        Some(store) => match ProjectRepo::find_all(store).await {
            Ok(projects) => projects,
            Err(err) => {
                tracing::warn!(error = %err, "Project listing query failed, serving fallback data");
                fallback::sample_projects()
            }
        },
        None => fallback::sample_projects(),
    };

    render(&ProjectsTemplate { projects })
}
