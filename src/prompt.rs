//! Transcript normalization and query derivation

use crate::error::{Error, Result};
use crate::types::message::{ChatMessage, Role};

/// Ensures the domain instruction preamble is present exactly once.
///
/// Holds the canonical preamble text from configuration; the text itself is
/// opaque to the gateway.
#[derive(Debug, Clone)]
pub struct PromptInjector {
    preamble: String,
}

impl PromptInjector {
    /// Create an injector with the given preamble text
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            preamble: preamble.into(),
        }
    }

    /// Normalize a transcript.
    ///
    /// If no system message is present anywhere in the transcript, prepends
    /// one carrying the canonical preamble. A caller-supplied system message
    /// (at any position, even several) is left untouched: no merge, no
    /// replacement, no deduplication. Pure and idempotent.
    pub fn normalize(&self, mut messages: Vec<ChatMessage>) -> Vec<ChatMessage> {
        let has_system = messages.iter().any(|m| m.role == Role::System);
        if !has_system {
            messages.insert(0, ChatMessage::system(self.preamble.clone()));
        }
        messages
    }
}

/// Derive the active retrieval query from a normalized transcript.
///
/// The query is the content of the last message. A transcript with no
/// non-system message at all has no query: sending the injected preamble
/// back to the backend as a question is never what the caller meant, so
/// that case is rejected instead.
pub fn active_query(messages: &[ChatMessage]) -> Result<&str> {
    if !messages.iter().any(|m| m.role != Role::System) {
        return Err(Error::MalformedRequest(
            "transcript contains no user or assistant message".to_string(),
        ));
    }
    let last = messages
        .last()
        .ok_or_else(|| Error::MalformedRequest("empty transcript".to_string()))?;
    Ok(&last.content)
}
