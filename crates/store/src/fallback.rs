//! Fixed sample records served when the record store is unreachable.
//!
//! The same four records seed an empty `projects` collection on first
//! connect, so the public site looks identical whether it is reading the
//! store or the fallback set.

use chrono::Utc;
use portfolio_core::project::ProjectStatus;

use crate::models::Project;

/// The four sample projects shown on the public site.
pub fn sample_projects() -> Vec<Project> {
    vec![
        sample(
            "Social Media Platform",
            "A social networking application with user profiles and posts",
            &["Python", "Flask", "SQLite"],
            ProjectStatus::Completed,
            true,
        ),
        sample(
            "Learning Platform",
            "Educational platform with courses and progress tracking",
            &["Python", "Django", "PostgreSQL"],
            ProjectStatus::Completed,
            true,
        ),
        sample(
            "Music Streaming Platform",
            "Music player with playlists and user preferences",
            &["Python", "FastAPI", "MongoDB"],
            ProjectStatus::Completed,
            false,
        ),
        sample(
            "Emoji Classifier",
            "Machine learning model to classify and analyze emojis",
            &["Python", "TensorFlow", "Pandas"],
            ProjectStatus::InProgress,
            true,
        ),
    ]
}

/// Fallback for the home page: featured samples only, capped at `limit`.
pub fn featured_projects(limit: usize) -> Vec<Project> {
    sample_projects()
        .into_iter()
        .filter(|project| project.featured)
        .take(limit)
        .collect()
}

fn sample(
    name: &str,
    description: &str,
    tech_stack: &[&str],
    status: ProjectStatus,
    featured: bool,
) -> Project {
    Project {
        id: None,
        name: name.to_string(),
        description: description.to_string(),
        tech_stack: tech_stack.iter().map(|entry| entry.to_string()).collect(),
        status,
        github_url: None,
        demo_url: None,
        image_url: None,
        featured,
        created_at: Utc::now(),
        updated_at: None,
    }
}
