use std::collections::HashMap;

use serde_json::Value as JsonValue;

use crate::models::event::EventType;

/// Maps an event's type and payload to human-readable notification text.
/// Pure and total: always returns a string, never fails.
pub fn build_content(
    event_type: EventType,
    source_user_id: &str,
    data: &HashMap<String, JsonValue>,
) -> String {
    match event_type {
        EventType::Like => {
            let post_id = scalar_text(data.get("postId")).unwrap_or_default();
            format!("User {} liked your post {}", source_user_id, post_id)
                .trim()
                .to_string()
        }
        EventType::Comment => {
            let post_id = scalar_text(data.get("postId")).unwrap_or_default();
            format!("User {} commented on your post {}", source_user_id, post_id)
                .trim()
                .to_string()
        }
        EventType::Follow => format!("User {} started following you", source_user_id),
        EventType::NewPost => format!("User {} published a new post", source_user_id),
        EventType::Custom => scalar_text(data.get("content"))
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| "New notification".to_string()),
    }
}

fn scalar_text(value: Option<&JsonValue>) -> Option<String> {
    match value? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
