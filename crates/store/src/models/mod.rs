//! Serde models for the stored entities.

pub mod contact;
pub mod project;

pub use contact::{ContactMessage, CreateContactMessage};
pub use project::{CreateProject, Project, UpdateProject};

/// `Option<DateTime<Utc>>` ⇄ BSON datetime (or null / missing field).
///
/// `bson::serde_helpers` ships the non-optional variant only, so the
/// `updated_at` fields carry this module instead.
pub(crate) mod chrono_datetime_option_as_bson_datetime {
    use chrono::{DateTime, Utc};
    use mongodb::bson;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => bson::DateTime::from_chrono(*dt).serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Ok(Option::<bson::DateTime>::deserialize(deserializer)?.map(|dt| dt.to_chrono()))
    }
}
