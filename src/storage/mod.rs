pub mod memory;
pub mod mongo;

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::{Arc, RwLock};

use anyhow::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::models::{event::Event, notification::Notification};
use crate::storage::{memory::MemoryStore, mongo::MongoStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    Memory,
    Mongo,
}

impl Display for StorageMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            StorageMode::Memory => write!(f, "memory"),
            StorageMode::Mongo => write!(f, "mongo"),
        }
    }
}

/// Append-only persistence capabilities shared by both storage variants.
/// Callers cannot tell which variant backs them.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn save_event(&self, event: Event) -> Result<Event, Error>;

    async fn save_notification(&self, notification: Notification) -> Result<Notification, Error>;

    /// All notifications targeting the user, newest first.
    async fn notifications_by_user(&self, user_id: &str) -> Result<Vec<Notification>, Error>;

    fn mode(&self) -> StorageMode;
}

/// Process-wide backend selector. Starts on the ephemeral store and is
/// promoted at most once to the durable store; never switched back. Entities
/// written under one variant are invisible to the other.
pub struct Storage {
    active: RwLock<Arc<dyn StorageBackend>>,
}

impl Storage {
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryStore::default()))
    }

    pub fn with_backend(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            active: RwLock::new(backend),
        }
    }

    /// Resolves the active backend. Each request resolves once, so the
    /// ephemeral-to-durable transition is observed atomically per request.
    pub fn backend(&self) -> Arc<dyn StorageBackend> {
        self.active.read().unwrap().clone()
    }

    pub fn mode(&self) -> StorageMode {
        self.backend().mode()
    }

    pub fn promote(&self, backend: Arc<dyn StorageBackend>) {
        *self.active.write().unwrap() = backend;
    }
}

/// Attempts the durable-store connection once, off the startup path. Requests
/// arriving before it resolves are served from memory; on failure the process
/// stays on memory for its remaining lifetime.
pub fn connect_mongo_in_background(storage: Arc<Storage>, uri: String) {
    tokio::spawn(async move {
        match MongoStore::connect(&uri).await {
            Ok(store) => {
                storage.promote(Arc::new(store));
                info!("Mongo connected, switched to durable storage");
            }
            Err(e) => {
                warn!(error = %e, "Mongo connect failed, using memory");
            }
        }
    });
}

pub(crate) fn sort_newest_first(notifications: &mut [Notification]) {
    notifications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
