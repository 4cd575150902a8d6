//! Transcript messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable handle to a transcript entry, assigned on append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    System,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Text so far; grows while `streaming` is true
    pub content: String,
    pub sender: Sender,
    /// True only for the in-flight system reply
    #[serde(default)]
    pub streaming: bool,
    /// Set when the reply stopped early because its request failed
    #[serde(default)]
    pub failed: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self::complete(id, Sender::User, content)
    }

    pub fn system(id: MessageId, content: impl Into<String>) -> Self {
        Self::complete(id, Sender::System, content)
    }

    /// Empty system reply awaiting streamed content.
    pub fn placeholder(id: MessageId) -> Self {
        Self {
            streaming: true,
            ..Self::complete(id, Sender::System, String::new())
        }
    }

    fn complete(id: MessageId, sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            sender,
            streaming: false,
            failed: false,
            created_at: Utc::now(),
        }
    }

    /// Append streamed text. Ignored once the message is finalized.
    pub fn append(&mut self, piece: &str) -> bool {
        if !self.streaming {
            return false;
        }
        self.content.push_str(piece);
        true
    }

    /// Stop streaming, keeping the accumulated content.
    pub fn finalize(&mut self) {
        self.streaming = false;
    }

    /// Stop streaming and replace the content.
    pub fn finalize_with(&mut self, content: String) {
        if self.streaming {
            self.content = content;
            self.streaming = false;
        }
    }

    /// Stop streaming because the request failed.
    pub fn mark_failed(&mut self) {
        if self.streaming {
            self.streaming = false;
            self.failed = true;
        }
    }

    /// True for a reply that has not received any text yet.
    pub fn is_pending(&self) -> bool {
        self.streaming && self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_grows_then_freezes() {
        let mut message = Message::placeholder(MessageId(2));
        assert!(message.is_pending());
        assert!(message.append("Hello, "));
        assert!(message.append("world!"));
        assert!(!message.is_pending());

        message.finalize();
        assert!(!message.streaming);
        assert!(!message.append(" more"));
        assert_eq!(message.content, "Hello, world!");
    }

    #[test]
    fn test_user_messages_are_immutable() {
        let mut message = Message::user(MessageId(1), "question");
        assert!(!message.append("x"));
        assert_eq!(message.content, "question");
    }

    #[test]
    fn test_mark_failed_only_applies_while_streaming() {
        let mut message = Message::placeholder(MessageId(3));
        message.append("partial");
        message.mark_failed();
        assert!(message.failed);
        assert!(!message.streaming);
        assert_eq!(message.content, "partial");

        let mut done = Message::system(MessageId(4), "ok");
        done.mark_failed();
        assert!(!done.failed);
    }

    #[test]
    fn test_finalize_with_replaces_content() {
        let mut message = Message::placeholder(MessageId(5));
        message.finalize_with("No result found.".to_string());
        assert_eq!(message.content, "No result found.");
        assert!(!message.streaming);
    }

    #[test]
    fn test_sender_serialization() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Sender::System).unwrap(), "\"system\"");
    }
}
