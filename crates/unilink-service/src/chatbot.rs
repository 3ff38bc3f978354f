//! Career assistant chatbot.

use unilink_core::Result;
use unilink_core::types::{ChatMessage, ChatReply};
use unilink_reqwest::ApiClient;

use crate::TRACING_TARGET_CHATBOT;

/// Sends messages to the backend chatbot.
#[derive(Debug, Clone)]
pub struct ChatbotService {
    client: ApiClient,
}

impl ChatbotService {
    /// Creates a new chatbot service.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Sends a message and waits for the reply.
    ///
    /// Failures are logged before being returned unchanged.
    pub async fn send_message(&self, message: &ChatMessage) -> Result<ChatReply> {
        self.client
            .post("/chatbot/message", message)
            .await
            .inspect_err(|err| {
                tracing::error!(
                    target: TRACING_TARGET_CHATBOT,
                    error = %err,
                    "Chatbot request failed"
                );
            })
    }
}
