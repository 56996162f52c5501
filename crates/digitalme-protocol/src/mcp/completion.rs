//! `llm/complete` method types.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A single chat message in an `llm/complete` request.
///
/// Fields stay untyped: clients send structured content for non-user
/// roles, and only the first user message is ever read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Speaker role (`user`, `assistant`, `system`, ...).
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub role: Value,
    /// Message content.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub content: Value,
}

impl ChatMessage {
    /// Creates a `user` message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Value::from("user"),
            content: Value::from(content.into()),
        }
    }

    /// Whether the role is exactly `"user"`.
    pub fn is_user(&self) -> bool {
        self.role.as_str() == Some("user")
    }
}

impl From<ChatMessage> for Value {
    fn from(msg: ChatMessage) -> Self {
        json!({"role": msg.role, "content": msg.content})
    }
}

/// Request params for `llm/complete`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionParams {
    /// Conversation so far, oldest first. Entries are decoded lazily.
    #[serde(default)]
    pub messages: Vec<Value>,
    /// Caller-supplied system prompt.
    #[serde(
        default,
        rename = "systemPrompt",
        skip_serializing_if = "Option::is_none"
    )]
    pub system_prompt: Option<String>,
    /// Opaque caller metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl CompletionParams {
    /// Finds the first message whose role is `user`.
    ///
    /// Entries are decoded in order and the scan stops at the first user
    /// message, so anything after it is never inspected.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry up to and including that message is
    /// not an object.
    pub fn first_user_message(&self) -> Result<Option<ChatMessage>, serde_json::Error> {
        for entry in &self.messages {
            let msg = ChatMessage::deserialize(entry)?;
            if msg.is_user() {
                return Ok(Some(msg));
            }
        }
        Ok(None)
    }
}

/// Metadata attached to every completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionMetadata {
    /// Persona model identifier.
    pub model: String,
    /// Generation time, RFC 3339 UTC.
    pub timestamp: String,
    /// Fixed confidence score.
    pub confidence: f64,
    /// Fixed mood label.
    pub mood: String,
}

/// Response for `llm/complete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResult {
    /// Reply text.
    pub content: String,
    /// Generation metadata.
    pub metadata: CompletionMetadata,
}
