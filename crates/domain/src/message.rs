//! Text messages exchanged with the device host.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Period between polls of `GET /api/messages`.
pub const POLL_MS: u32 = 2000;

/// Body of `GET /api/messages`, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageList {
    #[serde(default)]
    pub messages: Vec<String>,
}

impl MessageList {
    /// Messages in display order, newest first.
    #[must_use]
    pub fn newest_first(self) -> Vec<String> {
        let mut messages = self.messages;
        messages.reverse();
        messages
    }
}

/// Validated body of `POST /api/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    text: String,
}

impl OutgoingMessage {
    /// Trim `text` and reject it when nothing is left.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyMessage`] for empty or whitespace-only text.
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
