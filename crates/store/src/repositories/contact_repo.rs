//! Repository for the `contacts` collection.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Collection;

use crate::models::ContactMessage;
use crate::{RecordStore, StoreError, CONTACTS_COLLECTION};

/// Operations for submitted contact messages.
pub struct ContactRepo;

impl ContactRepo {
    fn collection(store: &RecordStore) -> Collection<ContactMessage> {
        store.collection(CONTACTS_COLLECTION)
    }

    /// Persist a submitted message, returning its store-generated id.
    pub async fn insert(
        store: &RecordStore,
        message: ContactMessage,
    ) -> Result<ObjectId, StoreError> {
        let result = Self::collection(store).insert_one(message).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::InvalidId("store returned a non-ObjectId key".to_string()))
    }

    /// The most recently submitted messages, newest first.
    pub async fn recent(store: &RecordStore, limit: i64) -> Result<Vec<ContactMessage>, StoreError> {
        let cursor = Self::collection(store)
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
