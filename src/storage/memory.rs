use std::sync::Mutex;

use anyhow::{Error, Result};
use async_trait::async_trait;

use crate::models::{event::Event, notification::Notification};
use crate::storage::{StorageBackend, StorageMode, sort_newest_first};

/// Process-local store. Unbounded and lost on restart; good enough for the
/// no-database deployment this service falls back to.
#[derive(Default)]
pub struct MemoryStore {
    events: Mutex<Vec<Event>>,
    notifications: Mutex<Vec<Notification>>,
}

impl MemoryStore {
    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }
}

#[async_trait]
impl StorageBackend for MemoryStore {
    async fn save_event(&self, event: Event) -> Result<Event, Error> {
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn save_notification(
        &self,
        notification: Notification,
    ) -> Result<Notification, Error> {
        self.notifications.lock().unwrap().push(notification.clone());
        Ok(notification)
    }

    async fn notifications_by_user(&self, user_id: &str) -> Result<Vec<Notification>, Error> {
        let mut matches: Vec<Notification> = self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|notification| notification.target_user_id == user_id)
            .cloned()
            .collect();

        // Stable sort, so same-instant notifications keep insertion order.
        sort_newest_first(&mut matches);

        Ok(matches)
    }

    fn mode(&self) -> StorageMode {
        StorageMode::Memory
    }
}
