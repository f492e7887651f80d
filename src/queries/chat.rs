//! Free-text chat forwarded to the hosted assistant (`/api/chat`).

use crate::config::Endpoint;
use crate::error::{RankingError, Result};
use crate::gateway::Gateway;
use crate::models::{ChatReply, ChatRequest};

/// Query interface for the chat endpoint.
pub struct ChatQuery<'a> {
    gateway: &'a Gateway,
}

impl<'a> ChatQuery<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Send a question and wait for the assistant's reply.
    ///
    /// A blank message is rejected locally without contacting the service.
    pub fn send(&self, message: &str) -> Result<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(RankingError::InvalidArgument(
                "Chat message must not be empty".into(),
            ));
        }
        let body = serde_json::to_value(ChatRequest { message }).map_err(|source| {
            RankingError::Decode {
                context: "Failed to send chat message",
                source,
            }
        })?;
        self.gateway
            .post_json("Failed to send chat message", Endpoint::Chat.path(), Some(body))
    }
}
