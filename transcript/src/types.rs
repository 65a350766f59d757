//! Message model for agent conversation history.
//!
//! History payloads come back from a live agent service and are only loosely
//! shaped: roles may be missing or unknown, and bodies arrive in several
//! formats depending on which client wrote the turn. The conversion here is
//! total so that one malformed element can never sink a whole benchmark run.

use serde_json::Value;

/// Who produced a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    /// Any other role tag, including a missing one.
    Other(String),
}

impl Role {
    /// Maps a raw role tag onto the known roles. Missing, non-string, and
    /// unrecognized tags all collapse into [`Role::Other`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("user") => Role::User,
            Some("assistant") => Role::Assistant,
            Some(other) => Role::Other(other.to_string()),
            None => Role::Other(String::new()),
        }
    }
}

/// The body of a history message, as found on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    /// UI-style `parts` array; each part may carry a `text` field.
    Parts(Vec<Value>),
    /// Plain string `content`.
    Text(String),
    /// `content` given as an array of fragment records.
    Fragments(Vec<Value>),
    /// Anything else. Extracts to the empty string.
    Opaque,
}

/// One turn of agent conversation history.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub body: MessageBody,
}

impl Message {
    /// Builds a message from one raw history element.
    ///
    /// Total over arbitrary JSON: non-object elements, unknown roles, and
    /// unusable body shapes all become valid messages. A `parts` field wins
    /// over `content` when both are present.
    pub fn from_value(value: &Value) -> Self {
        let role = Role::parse(value.get("role").and_then(Value::as_str));
        let body = match value.get("parts") {
            Some(parts) => match parts.as_array() {
                Some(items) => MessageBody::Parts(items.clone()),
                None => MessageBody::Opaque,
            },
            None => match value.get("content") {
                Some(Value::String(text)) => MessageBody::Text(text.clone()),
                Some(Value::Array(items)) => MessageBody::Fragments(items.clone()),
                _ => MessageBody::Opaque,
            },
        };
        Self { role, body }
    }

    /// A plain-text user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            body: MessageBody::Text(text.into()),
        }
    }

    /// A plain-text assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            body: MessageBody::Text(text.into()),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}
