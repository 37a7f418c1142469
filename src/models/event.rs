use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Like,
    Comment,
    Follow,
    NewPost,
    Custom,
}

impl EventType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "like" => Some(EventType::Like),
            "comment" => Some(EventType::Comment),
            "follow" => Some(EventType::Follow),
            "new_post" => Some(EventType::NewPost),
            "custom" => Some(EventType::Custom),
            _ => None,
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            EventType::Like => write!(f, "like"),
            EventType::Comment => write!(f, "comment"),
            EventType::Follow => write!(f, "follow"),
            EventType::NewPost => write!(f, "new_post"),
            EventType::Custom => write!(f, "custom"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: String,

    #[serde(rename = "type")]
    pub event_type: EventType,

    pub source_user_id: String,
    pub target_user_id: String,

    #[serde(default)]
    pub data: HashMap<String, JsonValue>,

    pub timestamp: DateTime<Utc>,
}

impl Event {
    pub fn new(
        event_type: EventType,
        source_user_id: String,
        target_user_id: String,
        data: HashMap<String, JsonValue>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            event_type,
            source_user_id,
            target_user_id,
            data,
            timestamp: Utc::now(),
        }
    }
}
