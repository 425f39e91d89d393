//! Repository for the `projects` collection.

use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Collection;

use crate::fallback;
use crate::models::{Project, UpdateProject};
use crate::{RecordStore, StoreError, PROJECTS_COLLECTION};

/// CRUD operations for project records.
pub struct ProjectRepo;

impl ProjectRepo {
    fn collection(store: &RecordStore) -> Collection<Project> {
        store.collection(PROJECTS_COLLECTION)
    }

    /// Fetch up to `limit` projects with `featured = true`.
    pub async fn find_featured(
        store: &RecordStore,
        limit: i64,
    ) -> Result<Vec<Project>, StoreError> {
        let cursor = Self::collection(store)
            .find(doc! { "featured": true })
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Fetch every project, in insertion order.
    pub async fn find_all(store: &RecordStore) -> Result<Vec<Project>, StoreError> {
        let cursor = Self::collection(store).find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Insert a new project, returning its store-generated id.
    pub async fn insert(store: &RecordStore, project: Project) -> Result<ObjectId, StoreError> {
        let result = Self::collection(store).insert_one(project).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::InvalidId("store returned a non-ObjectId key".to_string()))
    }

    /// Overwrite the form-carried fields of the project with `id`, stamping
    /// `updated_at`. Returns `false` when no record matched.
    pub async fn update_by_id(
        store: &RecordStore,
        id: ObjectId,
        update: UpdateProject,
    ) -> Result<bool, StoreError> {
        let result = Self::collection(store)
            .update_one(doc! { "_id": id }, update.into_update_document(Utc::now()))
            .await?;
        Ok(result.matched_count > 0)
    }

    /// Delete the project with `id`. Returns `false` when no record matched.
    pub async fn delete_by_id(store: &RecordStore, id: ObjectId) -> Result<bool, StoreError> {
        let result = Self::collection(store)
            .delete_one(doc! { "_id": id })
            .await?;
        Ok(result.deleted_count > 0)
    }

    /// Seed an empty collection with the fixed sample records, so a fresh
    /// deployment renders the same site the fallback path shows. Returns the
    /// number of records inserted (zero when the collection already has data).
    pub async fn seed_if_empty(store: &RecordStore) -> Result<usize, StoreError> {
        let collection = Self::collection(store);
        if collection.count_documents(doc! {}).await? > 0 {
            return Ok(0);
        }

        let samples = fallback::sample_projects();
        let count = samples.len();
        collection.insert_many(samples).await?;
        Ok(count)
    }
}
