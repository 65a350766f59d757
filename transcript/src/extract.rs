//! Flattening message bodies to plain text.

use crate::types::{Message, MessageBody};
use serde_json::Value;

/// Extracts the visible text of a message.
///
/// Total over every shape [`Message::from_value`] can produce. Bodies that
/// carry no usable text flatten to the empty string; this never fails, so
/// extraction issues surface as non-matches rather than errors.
///
/// - `parts` arrays contribute the `text` field of each object part whose
///   `text` is a string, joined with single spaces and trimmed.
/// - Plain string `content` is returned verbatim.
/// - Fragment arrays contribute the stringified `text` of each object
///   element, joined with single spaces.
pub fn extract_text(message: &Message) -> String {
    match &message.body {
        MessageBody::Parts(parts) => {
            let pieces: Vec<&str> = parts
                .iter()
                .filter_map(|part| part.get("text").and_then(Value::as_str))
                .collect();
            pieces.join(" ").trim().to_string()
        }
        MessageBody::Text(content) => content.clone(),
        MessageBody::Fragments(items) => {
            let pieces: Vec<String> = items
                .iter()
                .filter(|item| item.is_object())
                .map(fragment_text)
                .collect();
            pieces.join(" ")
        }
        MessageBody::Opaque => String::new(),
    }
}

/// Stringifies the `text` field of one content fragment. Missing and null
/// both read as empty; non-string values keep their JSON rendering.
fn fragment_text(item: &Value) -> String {
    match item.get("text") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message_from(value: Value) -> Message {
        Message::from_value(&value)
    }

    #[test]
    fn test_plain_string_content_is_verbatim() {
        let message = message_from(json!({"role": "user", "content": "  spaced  "}));
        assert_eq!(extract_text(&message), "  spaced  ");
    }

    #[test]
    fn test_parts_join_and_trim() {
        let message = message_from(json!({
            "role": "assistant",
            "parts": [{"text": "Big O"}, {"text": "notation"}]
        }));
        assert_eq!(extract_text(&message), "Big O notation");
    }

    #[test]
    fn test_parts_skip_textless_and_non_object_entries() {
        let message = message_from(json!({
            "role": "assistant",
            "parts": [{"type": "tool-call"}, "bare string", {"text": "kept"}, 3]
        }));
        assert_eq!(extract_text(&message), "kept");
    }

    #[test]
    fn test_parts_skip_non_string_text() {
        let message = message_from(json!({
            "role": "assistant",
            "parts": [{"text": 42}, {"text": "ok"}]
        }));
        assert_eq!(extract_text(&message), "ok");
    }

    #[test]
    fn test_parts_with_empty_text_entries_trim_clean() {
        let message = message_from(json!({
            "role": "assistant",
            "parts": [{"text": ""}, {"text": "x"}, {"text": ""}]
        }));
        assert_eq!(extract_text(&message), "x");
    }

    #[test]
    fn test_fragments_join_with_spaces() {
        let message = message_from(json!({
            "role": "assistant",
            "content": [{"text": "first"}, {"text": "second"}]
        }));
        assert_eq!(extract_text(&message), "first second");
    }

    #[test]
    fn test_fragments_skip_non_object_elements() {
        let message = message_from(json!({
            "role": "assistant",
            "content": ["loose", {"text": "kept"}, 9]
        }));
        assert_eq!(extract_text(&message), "kept");
    }

    #[test]
    fn test_fragments_missing_and_null_text_are_empty() {
        let message = message_from(json!({
            "role": "assistant",
            "content": [{"kind": "image"}, {"text": null}, {"text": "tail"}]
        }));
        assert_eq!(extract_text(&message), "  tail");
    }

    #[test]
    fn test_fragments_stringify_non_string_text() {
        let message = message_from(json!({
            "role": "assistant",
            "content": [{"text": 5}, {"text": true}]
        }));
        assert_eq!(extract_text(&message), "5 true");
    }

    #[test]
    fn test_unsupported_shapes_are_empty() {
        for value in [
            json!({"role": "user"}),
            json!({"role": "user", "content": 12}),
            json!({"role": "user", "content": {"nested": true}}),
            json!({"role": "user", "parts": "not a list"}),
            json!(null),
            json!(17),
            json!(["not", "an", "object"]),
        ] {
            assert_eq!(extract_text(&message_from(value)), "");
        }
    }
}
