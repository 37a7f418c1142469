use serde::Serialize;

use crate::models::{event::Event, notification::Notification};

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub notification: Notification,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub event: Event,
    pub notification: Notification,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<Notification>,
}
