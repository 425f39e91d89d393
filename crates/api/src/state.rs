use std::sync::Arc;

use portfolio_store::RecordStore;

use crate::config::ServerConfig;
use crate::email::ContactNotifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc`). `store` is `None` when
/// startup could not reach the record store; read handlers then serve the
/// fixed fallback data, and write handlers report failure per route.
#[derive(Clone)]
pub struct AppState {
    /// Record store handle, opened once at startup.
    pub store: Option<Arc<RecordStore>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// SMTP contact notifier; `None` when SMTP is not configured.
    pub notifier: Option<Arc<ContactNotifier>>,
}

impl AppState {
    /// The store handle, if startup connected successfully.
    pub fn store(&self) -> Option<&RecordStore> {
        self.store.as_deref()
    }
}
