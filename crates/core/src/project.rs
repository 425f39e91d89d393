//! Project entity constants, status enum, and input validators.
//!
//! The admin forms submit the tech stack as a single comma-separated string;
//! [`parse_tech_stack`] normalizes it into the ordered list the store keeps.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum project name length, in characters.
pub const MAX_NAME_LEN: usize = 100;
/// Maximum project description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;
/// Minimum description length required when creating a project.
pub const MIN_CREATE_DESCRIPTION_LEN: usize = 10;

const STATUS_COMPLETED: &str = "Completed";
const STATUS_IN_PROGRESS: &str = "In Progress";
const STATUS_PLANNING: &str = "Planning";

/// Every status a project may hold, in display order.
pub const VALID_STATUSES: [&str; 3] = [STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_PLANNING];

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a portfolio project.
///
/// Serialized with the human-readable labels (`"In Progress"`, not
/// `"InProgress"`) so stored documents and rendered pages agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Planning,
}

impl ProjectStatus {
    /// The canonical display/storage label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => STATUS_COMPLETED,
            ProjectStatus::InProgress => STATUS_IN_PROGRESS,
            ProjectStatus::Planning => STATUS_PLANNING,
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            STATUS_COMPLETED => Ok(Self::Completed),
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_PLANNING => Ok(Self::Planning),
            other => Err(CoreError::Validation(format!(
                "Unknown project status: '{other}'. Valid statuses: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tech stack parsing
// ---------------------------------------------------------------------------

/// Split a comma-separated tech-stack string into an ordered list of
/// trimmed, non-empty entries.
///
/// `"Go, , Rust"` becomes `["Go", "Rust"]`.
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a project name is non-empty and within length limits.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let len = name.chars().count();
    if len == 0 {
        return Err(CoreError::Validation(
            "Project name must not be empty".to_string(),
        ));
    }
    if len > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Project name exceeds maximum length of {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate that a project description is within length limits.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Project description exceeds maximum length of {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a description on the create path, which additionally requires a
/// minimum length.
pub fn validate_create_description(description: &str) -> Result<(), CoreError> {
    validate_description(description)?;
    if description.chars().count() < MIN_CREATE_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Project description must be at least {MIN_CREATE_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate that a tech stack has at least one entry.
pub fn validate_tech_stack(stack: &[String]) -> Result<(), CoreError> {
    if stack.is_empty() {
        return Err(CoreError::Validation(
            "Tech stack must contain at least one entry".to_string(),
        ));
    }
    Ok(())
}
