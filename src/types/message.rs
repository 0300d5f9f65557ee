//! Conversation transcript types

use serde::{Deserialize, Serialize};

/// Role of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions to the generation backend
    System,
    /// Dialogue authored by the end user
    User,
    /// Dialogue authored by the backend
    Assistant,
}

/// A single conversation turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a new message
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}

/// Request body for the chat endpoint
///
/// The transcript is ordered conversation chronology; the last entry is the
/// active query. The gateway does not interpret user/assistant alternation,
/// cap length, or deduplicate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation transcript, oldest first (defaults to empty when absent)
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}
