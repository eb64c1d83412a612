// src/message.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("conversation must contain at least one message")]
pub struct EmptyConversation;

/// Chronological message history with at least one entry.
#[derive(Clone, Debug)]
pub struct Conversation {
    earlier: Vec<Message>,
    latest: Message,
}

impl Conversation {
    /// The most recent message, the one that drives classification.
    pub fn latest(&self) -> &Message {
        &self.latest
    }

    pub fn turns(&self) -> usize {
        self.earlier.len() + 1
    }
}

impl TryFrom<Vec<Message>> for Conversation {
    type Error = EmptyConversation;

    fn try_from(mut messages: Vec<Message>) -> Result<Self, Self::Error> {
        let latest = messages.pop().ok_or(EmptyConversation)?;
        Ok(Self {
            earlier: messages,
            latest,
        })
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
