//! Contact message entity model and DTO.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use portfolio_core::contact;
use portfolio_core::error::CoreError;
use portfolio_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// A contact message document from the `contacts` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Store-generated identifier; `None` until the record is inserted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub newsletter_signup: bool,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: Timestamp,
    /// Set when an admin has seen the message. No exposed route flips this
    /// yet; the flag is stored so existing data keeps its meaning.
    #[serde(default)]
    pub read: bool,
}

/// DTO for a public contact-form submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub newsletter_signup: bool,
}

impl CreateContactMessage {
    /// Enforce the submission constraints. Nothing is written to the store
    /// unless this passes.
    pub fn validate(&self) -> Result<(), CoreError> {
        contact::validate_person_name("First name", &self.first_name)?;
        contact::validate_person_name("Last name", &self.last_name)?;
        contact::validate_email(&self.email)?;
        contact::validate_subject(&self.subject)?;
        contact::validate_message(&self.message)?;
        Ok(())
    }

    /// Stamp the submission time and produce the storable document.
    pub fn into_message(self, created_at: Timestamp) -> ContactMessage {
        ContactMessage {
            id: None,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            newsletter_signup: self.newsletter_signup,
            created_at,
            read: false,
        }
    }
}
