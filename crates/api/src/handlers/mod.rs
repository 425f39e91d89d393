//! HTTP request handlers.

pub mod admin;
pub mod contact;
pub mod pages;

use askama::Template;
use axum::response::Html;

use crate::error::AppResult;

/// Render an askama template into an HTML response.
pub(crate) fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}
