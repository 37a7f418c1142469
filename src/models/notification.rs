use std::fmt::{Display, Formatter, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::event::{Event, EventType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Unread,
    Read,
}

impl Display for NotificationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            NotificationStatus::Unread => write!(f, "unread"),
            NotificationStatus::Read => write!(f, "read"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub notification_id: String,

    #[serde(rename = "type")]
    pub notification_type: EventType,

    pub content: String,
    pub source_user_id: String,
    pub target_user_id: String,
    pub status: NotificationStatus,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        notification_type: EventType,
        content: String,
        source_user_id: String,
        target_user_id: String,
    ) -> Self {
        Self {
            notification_id: Uuid::new_v4().to_string(),
            notification_type,
            content,
            source_user_id,
            target_user_id,
            status: NotificationStatus::Unread,
            timestamp: Utc::now(),
        }
    }

    /// Derives a notification from an accepted event, with a fresh timestamp.
    pub fn from_event(event: &Event, content: String) -> Self {
        Self::new(
            event.event_type,
            content,
            event.source_user_id.clone(),
            event.target_user_id.clone(),
        )
    }
}
