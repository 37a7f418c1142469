use std::sync::Arc;

use tracing::debug;

use crate::content::build_content;
use crate::error::ServiceError;
use crate::models::{
    event::{Event, EventType},
    notification::Notification,
    request::{CreateNotificationRequest, ProcessEventRequest},
};
use crate::storage::Storage;

#[derive(Clone)]
pub struct NotificationService {
    storage: Arc<Storage>,
}

impl NotificationService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub async fn create_notification(
        &self,
        request: CreateNotificationRequest,
    ) -> Result<Notification, ServiceError> {
        let target_user_id = non_empty(request.target_user_id)
            .ok_or_else(|| ServiceError::validation("targetUserId is required"))?;

        let source_user_id =
            non_empty(request.source_user_id).unwrap_or_else(|| "system".to_string());

        // Unrecognized kinds on direct creation fall back to custom.
        let notification_type = request
            .notification_type
            .as_deref()
            .and_then(EventType::parse)
            .unwrap_or(EventType::Custom);

        let content = match request.content {
            Some(content) => content,
            None => build_content(notification_type, &source_user_id, &Default::default()),
        };

        let notification =
            Notification::new(notification_type, content, source_user_id, target_user_id);

        let saved = self
            .storage
            .backend()
            .save_notification(notification)
            .await
            .map_err(|e| ServiceError::internal("Failed to create notification", e))?;

        debug!(notification_id = %saved.notification_id, "Notification created");

        Ok(saved)
    }

    pub async fn process_event(
        &self,
        request: ProcessEventRequest,
    ) -> Result<(Event, Notification), ServiceError> {
        let event_type = request
            .event_type
            .as_deref()
            .and_then(EventType::parse)
            .ok_or_else(|| ServiceError::validation("Invalid or missing type"))?;

        let (source_user_id, target_user_id) = match (
            non_empty(request.source_user_id),
            non_empty(request.target_user_id),
        ) {
            (Some(source), Some(target)) => (source, target),
            _ => {
                return Err(ServiceError::validation(
                    "sourceUserId & targetUserId required",
                ));
            }
        };

        let data = request.data.unwrap_or_default();
        let event = Event::new(event_type, source_user_id, target_user_id, data);

        // Resolved once, so both writes land in the same storage variant.
        let backend = self.storage.backend();

        let event = backend
            .save_event(event)
            .await
            .map_err(|e| ServiceError::internal("Failed to process event", e))?;

        let content = build_content(event.event_type, &event.source_user_id, &event.data);
        let notification = Notification::from_event(&event, content);

        let notification = backend
            .save_notification(notification)
            .await
            .map_err(|e| ServiceError::internal("Failed to process event", e))?;

        debug!(
            event_id = %event.event_id,
            notification_id = %notification.notification_id,
            "Event processed"
        );

        Ok((event, notification))
    }

    pub async fn notifications_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Notification>, ServiceError> {
        self.storage
            .backend()
            .notifications_by_user(user_id)
            .await
            .map_err(|e| ServiceError::internal("Failed to fetch notifications", e))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
