//! MongoDB-backed record store for the portfolio site.
//!
//! [`RecordStore`] wraps a single client and database handle, opened once at
//! process startup and shared read-only by every request handler. A value of
//! this type exists only after a successful [`RecordStore::connect`], so
//! "used before connect" is unrepresentable; the api crate models a failed
//! startup connect as running without a store (degraded mode, served from
//! [`fallback`] data).

pub mod fallback;
pub mod models;
pub mod repositories;

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

/// Collection holding project records.
pub const PROJECTS_COLLECTION: &str = "projects";
/// Collection holding submitted contact messages.
pub const CONTACTS_COLLECTION: &str = "contacts";

/// How long a store call waits for a reachable server before failing.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Error type for record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Driver-level failure (connectivity, server errors, codec issues).
    #[error("Database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// A record identifier that is not a valid ObjectId.
    #[error("Invalid record identifier: {0}")]
    InvalidId(String),
}

/// Handle to the portfolio database and its collections.
///
/// Cheaply cloneable; clones share the same underlying connection pool.
#[derive(Clone)]
pub struct RecordStore {
    client: Client,
    db: Database,
}

impl RecordStore {
    /// Connect to the store at `uri` and verify reachability with a `ping`
    /// against `db_name`.
    ///
    /// Server selection is bounded so an unreachable deployment fails fast
    /// instead of hanging startup on the driver's default timeout.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(uri).await?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options)?;
        let db = client.database(db_name);
        db.run_command(doc! { "ping": 1 }).await?;

        Ok(Self { client, db })
    }

    /// Check that the store is still reachable.
    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Typed handle to a named collection.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Gracefully shut down the underlying client.
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}
