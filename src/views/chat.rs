//! Chat transcript.

use serde::{Deserialize, Serialize};

use crate::error::{RankingError, Result};
use crate::view::ViewKind;
use crate::RankingClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
    /// Shown in place of a reply when the request failed.
    Notice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Append-only chat history for one session.
#[derive(Debug, Clone, Default)]
pub struct ChatTranscript {
    turns: Vec<ChatTurn>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Send `message` and record both sides of the exchange.
    ///
    /// On failure the user turn is kept, a notice turn is appended, and the
    /// error is returned. Blank messages are rejected without recording
    /// anything.
    pub fn ask(&mut self, client: &RankingClient, message: &str) -> Result<&ChatTurn> {
        let text = message.trim();
        if text.is_empty() {
            return Err(RankingError::InvalidArgument(
                "Chat message must not be empty".into(),
            ));
        }

        self.turns.push(ChatTurn {
            role: ChatRole::User,
            text: text.to_string(),
        });

        match client.chat().send(text) {
            Ok(reply) => {
                self.turns.push(ChatTurn {
                    role: ChatRole::Assistant,
                    text: reply.response,
                });
            }
            Err(e) => {
                tracing::warn!(view = %ViewKind::Chat, error = %e, "chat request failed");
                self.turns.push(ChatTurn {
                    role: ChatRole::Notice,
                    text: format!("Sorry, something went wrong: {}", e),
                });
                return Err(e);
            }
        }

        Ok(&self.turns[self.turns.len() - 1])
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
