//! Handlers for the contact page and form submission.

use std::sync::Arc;

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use axum::Form;
use chrono::Utc;
use portfolio_store::models::CreateContactMessage;
use portfolio_store::repositories::ContactRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::render;
use crate::state::AppState;

const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you soon!";

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    success: Option<&'static str>,
}

/// Contact form fields as the browser posts them.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(rename = "firstName")]
    first_name: String,
    #[serde(rename = "lastName")]
    last_name: String,
    email: String,
    subject: String,
    #[serde(default)]
    message: String,
    /// Checkbox: present (any value) means checked.
    #[serde(default)]
    newsletter: Option<String>,
}

/// GET /contact
pub async fn page() -> AppResult<Html<String>> {
    render(&ContactTemplate { success: None })
}

/// POST /contact
///
/// The submitter always sees the success message. Invalid input is dropped
/// before any store write, and store failures are logged and swallowed; the
/// contact page never shows a hard error.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> AppResult<Html<String>> {
    let input = CreateContactMessage {
        first_name: form.first_name,
        last_name: form.last_name,
        email: form.email,
        subject: form.subject,
        message: form.message,
        newsletter_signup: form.newsletter.is_some(),
    };

    match input.validate() {
        Ok(()) => persist_and_notify(&state, input).await,
        Err(err) => {
            tracing::warn!(error = %err, "Discarding invalid contact submission");
        }
    }

    render(&ContactTemplate {
        success: Some(SUCCESS_MESSAGE),
    })
}

/// Store the message, then hand it to the notifier on a detached task so
/// delivery cannot delay or fail the response.
async fn persist_and_notify(state: &AppState, input: CreateContactMessage) {
    let message = input.into_message(Utc::now());

    let Some(store) = state.store() else {
        tracing::warn!("Record store unavailable, contact message not persisted");
        return;
    };

    match ContactRepo::insert(store, message.clone()).await {
        Ok(id) => {
            tracing::info!(id = %id, "Contact message stored");
            if let Some(notifier) = &state.notifier {
                let notifier = Arc::clone(notifier);
                tokio::spawn(async move {
                    if let Err(err) = notifier.send(&message).await {
                        tracing::warn!(error = %err, "Contact notification delivery failed");
                    }
                });
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to store contact message");
        }
    }
}
