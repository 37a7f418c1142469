use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Body of POST /notifications. The kind is kept as a raw string so the
/// service can apply its own defaulting instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    #[serde(rename = "type")]
    pub notification_type: Option<String>,

    pub source_user_id: Option<String>,
    pub target_user_id: Option<String>,
    pub content: Option<String>,
}

/// Body of POST /events. All fields optional at the wire level; the service
/// validates and reports the exact client error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessEventRequest {
    #[serde(rename = "type")]
    pub event_type: Option<String>,

    pub source_user_id: Option<String>,
    pub target_user_id: Option<String>,
    pub data: Option<HashMap<String, JsonValue>>,
}
