use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{Client, Collection, bson::doc};
use tracing::info;

use crate::models::{event::Event, notification::Notification};
use crate::storage::{StorageBackend, StorageMode, sort_newest_first};

const DEFAULT_DATABASE: &str = "notifications";

pub struct MongoStore {
    events: Collection<Event>,
    notifications: Collection<Notification>,
}

impl MongoStore {
    /// The driver connects lazily, so a ping forces the connection attempt to
    /// resolve here instead of on the first request.
    pub async fn connect(uri: &str) -> Result<Self, Error> {
        info!("Connecting to MongoDB");

        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| anyhow!("Failed to create MongoDB client: {}", e))?;

        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| anyhow!("MongoDB ping failed: {}", e))?;

        info!(database = %database.name(), "MongoDB connection established");

        Ok(Self {
            events: database.collection("events"),
            notifications: database.collection("notifications"),
        })
    }
}

#[async_trait]
impl StorageBackend for MongoStore {
    async fn save_event(&self, event: Event) -> Result<Event, Error> {
        self.events
            .insert_one(&event)
            .await
            .map_err(|e| anyhow!("Failed to insert event: {}", e))?;

        Ok(event)
    }

    async fn save_notification(
        &self,
        notification: Notification,
    ) -> Result<Notification, Error> {
        self.notifications
            .insert_one(&notification)
            .await
            .map_err(|e| anyhow!("Failed to insert notification: {}", e))?;

        Ok(notification)
    }

    async fn notifications_by_user(&self, user_id: &str) -> Result<Vec<Notification>, Error> {
        let cursor = self
            .notifications
            .find(doc! { "targetUserId": user_id })
            .await
            .map_err(|e| anyhow!("Failed to query notifications: {}", e))?;

        let mut matches: Vec<Notification> = cursor
            .try_collect()
            .await
            .map_err(|e| anyhow!("Failed to read notification cursor: {}", e))?;

        // Sorted in process so ordering is identical across storage variants.
        sort_newest_first(&mut matches);

        Ok(matches)
    }

    fn mode(&self) -> StorageMode {
        StorageMode::Mongo
    }
}
