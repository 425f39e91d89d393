//! Project entity model and DTOs.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use mongodb::bson::{doc, Bson, Document};
use portfolio_core::error::CoreError;
use portfolio_core::project::{self, ProjectStatus};
use portfolio_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// A project document from the `projects` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Store-generated identifier; `None` until the record is inserted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub status: ProjectStatus,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: Timestamp,
    #[serde(default, with = "super::chrono_datetime_option_as_bson_datetime")]
    pub updated_at: Option<Timestamp>,
}

impl Project {
    /// Hex form of the document id; empty for an unsaved record.
    pub fn id_hex(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }
}

/// DTO for creating a project from the admin form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub status: ProjectStatus,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
}

impl CreateProject {
    /// Enforce the create-path constraints.
    pub fn validate(&self) -> Result<(), CoreError> {
        project::validate_name(&self.name)?;
        project::validate_create_description(&self.description)?;
        project::validate_tech_stack(&self.tech_stack)?;
        Ok(())
    }

    /// Stamp the creation time and produce the storable document.
    pub fn into_project(self, created_at: Timestamp) -> Project {
        Project {
            id: None,
            name: self.name,
            description: self.description,
            tech_stack: self.tech_stack,
            status: self.status,
            github_url: self.github_url,
            demo_url: self.demo_url,
            image_url: self.image_url,
            featured: self.featured,
            created_at,
            updated_at: None,
        }
    }
}

/// The fields the admin edit form carries. Exactly these are written back;
/// anything else on the stored document is left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub status: ProjectStatus,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub featured: bool,
}

impl UpdateProject {
    /// Same constraints as the create path.
    pub fn validate(&self) -> Result<(), CoreError> {
        project::validate_name(&self.name)?;
        project::validate_create_description(&self.description)?;
        project::validate_tech_stack(&self.tech_stack)?;
        Ok(())
    }

    /// Build the `$set` document for the update, stamping `updated_at`.
    pub fn into_update_document(self, updated_at: Timestamp) -> Document {
        doc! {
            "$set": {
                "name": self.name,
                "description": self.description,
                "tech_stack": self.tech_stack,
                "status": self.status.as_str(),
                "github_url": opt_string(self.github_url),
                "demo_url": opt_string(self.demo_url),
                "featured": self.featured,
                "updated_at": mongodb::bson::DateTime::from_chrono(updated_at),
            }
        }
    }
}

fn opt_string(value: Option<String>) -> Bson {
    value.map(Bson::String).unwrap_or(Bson::Null)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn create_input() -> CreateProject {
        CreateProject {
            name: "Portfolio Site".to_string(),
            description: "Server-rendered portfolio with an admin panel".to_string(),
            tech_stack: vec!["Rust".to_string(), "Axum".to_string()],
            status: ProjectStatus::InProgress,
            github_url: None,
            demo_url: None,
            image_url: None,
            featured: false,
        }
    }

    #[test]
    fn create_validates_description_minimum() {
        let mut input = create_input();
        input.description = "too short".to_string();
        assert_matches!(input.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn create_rejects_empty_tech_stack() {
        let mut input = create_input();
        input.tech_stack.clear();
        assert_matches!(input.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn into_project_stamps_created_at_and_leaves_updated_at_unset() {
        let created_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let project = create_input().into_project(created_at);
        assert_eq!(project.created_at, created_at);
        assert!(project.id.is_none());
        assert!(project.updated_at.is_none());
    }

    #[test]
    fn stored_document_uses_underscore_id_and_display_status() {
        let created_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let doc = mongodb::bson::to_document(&create_input().into_project(created_at)).unwrap();

        // An unsaved record must not carry a null `_id`; the store generates it.
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("status").unwrap(), "In Progress");
        assert!(doc.get_datetime("created_at").is_ok());
    }

    #[test]
    fn update_document_overwrites_exactly_the_form_fields() {
        let updated_at = Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap();
        let update = UpdateProject {
            name: "Renamed".to_string(),
            description: "A sufficiently long description".to_string(),
            tech_stack: vec!["Rust".to_string()],
            status: ProjectStatus::Completed,
            github_url: Some("https://github.com/example/renamed".to_string()),
            demo_url: None,
            featured: true,
        };

        let doc = update.into_update_document(updated_at);
        let set = doc.get_document("$set").unwrap();

        assert_eq!(set.get_str("name").unwrap(), "Renamed");
        assert_eq!(set.get_str("status").unwrap(), "Completed");
        assert_eq!(set.get_bool("featured").unwrap(), true);
        assert!(set.get_datetime("updated_at").is_ok());
        // Cleared optional URL is written as an explicit null.
        assert!(matches!(set.get("demo_url"), Some(Bson::Null)));
        // Fields absent from the edit form are never touched.
        assert!(!set.contains_key("image_url"));
        assert!(!set.contains_key("created_at"));
    }

    #[test]
    fn id_hex_is_empty_for_unsaved_records() {
        let created_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let project = create_input().into_project(created_at);
        assert_eq!(project.id_hex(), "");
    }
}
