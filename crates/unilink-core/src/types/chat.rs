//! Chatbot records.

use serde::{Deserialize, Serialize};

/// A message sent to `POST /chatbot/message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// The user's message text.
    pub message: String,
    /// Conversation identifier, when continuing a conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl ChatMessage {
    /// Creates a message that starts a new conversation.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            conversation_id: None,
        }
    }
}

/// The assistant's reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatReply {
    /// Reply text.
    #[serde(alias = "response", alias = "message")]
    pub reply: String,
    /// Conversation identifier to continue with.
    pub conversation_id: Option<String>,
}
