use std::collections::HashMap;

use notification_service::{content::build_content, models::event::EventType};
use serde_json::{Value, json};

fn data(entries: &[(&str, Value)]) -> HashMap<String, Value> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// Test: like events render the post id into the template
#[test]
fn test_like_content_includes_post_id() {
    let content = build_content(
        EventType::Like,
        "u1",
        &data(&[("postId", json!("p9"))]),
    );

    assert_eq!(content, "User u1 liked your post p9");
}

/// Test: like events without a post id are trimmed
#[test]
fn test_like_content_without_post_id_is_trimmed() {
    let content = build_content(EventType::Like, "u1", &HashMap::new());

    assert_eq!(content, "User u1 liked your post");
}

/// Test: comment events render the post id into the template
#[test]
fn test_comment_content_includes_post_id() {
    let content = build_content(
        EventType::Comment,
        "alice",
        &data(&[("postId", json!("p42"))]),
    );

    assert_eq!(content, "User alice commented on your post p42");
}

/// Test: comment events without a post id are trimmed
#[test]
fn test_comment_content_without_post_id_is_trimmed() {
    let content = build_content(EventType::Comment, "alice", &HashMap::new());

    assert_eq!(content, "User alice commented on your post");
}

/// Test: follow events use the fixed template
#[test]
fn test_follow_content() {
    let content = build_content(EventType::Follow, "bob", &HashMap::new());

    assert_eq!(content, "User bob started following you");
}

/// Test: new_post events use the fixed template
#[test]
fn test_new_post_content() {
    let content = build_content(EventType::NewPost, "bob", &HashMap::new());

    assert_eq!(content, "User bob published a new post");
}

/// Test: custom events use the payload content when present
#[test]
fn test_custom_content_uses_payload() {
    let content = build_content(
        EventType::Custom,
        "u1",
        &data(&[("content", json!("you have mail"))]),
    );

    assert_eq!(content, "you have mail");
}

/// Test: custom events fall back when content is absent or empty
#[test]
fn test_custom_content_fallback() {
    let absent = build_content(EventType::Custom, "u1", &HashMap::new());
    let empty = build_content(EventType::Custom, "u1", &data(&[("content", json!(""))]));

    assert_eq!(absent, "New notification");
    assert_eq!(empty, "New notification");
}

/// Test: numeric payload values render as text
#[test]
fn test_numeric_post_id_renders_as_text() {
    let content = build_content(EventType::Like, "u1", &data(&[("postId", json!(7))]));

    assert_eq!(content, "User u1 liked your post 7");
}

/// Test: non-scalar payload values are treated as absent
#[test]
fn test_non_scalar_payload_values_are_ignored() {
    let content = build_content(
        EventType::Custom,
        "u1",
        &data(&[("content", json!({"nested": true}))]),
    );

    assert_eq!(content, "New notification");
}
