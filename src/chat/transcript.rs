//! Conversation transcript with handle-addressed entries.

use crate::models::{Message, MessageId, Sender};

/// Ordered list of messages. Entries are addressed by the [`MessageId`]
/// handed out on append, never by position.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript opening with a system greeting.
    pub fn with_welcome(welcome: Option<&str>) -> Self {
        let mut transcript = Self::new();
        if let Some(text) = welcome {
            transcript.push_system(text);
        }
        transcript
    }

    fn allocate_id(&mut self) -> MessageId {
        self.next_id += 1;
        MessageId(self.next_id)
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> MessageId {
        let id = self.allocate_id();
        self.messages.push(Message::user(id, content));
        id
    }

    pub fn push_system(&mut self, content: impl Into<String>) -> MessageId {
        let id = self.allocate_id();
        self.messages.push(Message::system(id, content));
        id
    }

    /// Append an empty streaming reply and return its handle.
    pub fn push_placeholder(&mut self) -> MessageId {
        let id = self.allocate_id();
        self.messages.push(Message::placeholder(id));
        id
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.id == id)
    }

    fn get_mut(&mut self, id: MessageId) -> Option<&mut Message> {
        self.messages.iter_mut().rev().find(|m| m.id == id)
    }

    /// Append a streamed piece. False if the message is unknown or finalized.
    pub fn append(&mut self, id: MessageId, piece: &str) -> bool {
        self.get_mut(id).map(|m| m.append(piece)).unwrap_or(false)
    }

    /// Finalize a streaming message with its full content.
    pub fn complete(&mut self, id: MessageId, content: String) -> bool {
        match self.get_mut(id) {
            Some(message) if message.streaming => {
                message.finalize_with(content);
                true
            }
            _ => false,
        }
    }

    /// Finalize a streaming message, keeping what it has so far.
    pub fn finalize(&mut self, id: MessageId) -> bool {
        match self.get_mut(id) {
            Some(message) if message.streaming => {
                message.finalize();
                true
            }
            _ => false,
        }
    }

    pub fn mark_failed(&mut self, id: MessageId) -> bool {
        match self.get_mut(id) {
            Some(message) if message.streaming => {
                message.mark_failed();
                true
            }
            _ => false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn streaming_count(&self) -> usize {
        self.messages.iter().filter(|m| m.streaming).count()
    }

    pub fn count_by(&self, sender: Sender) -> usize {
        self.messages.iter().filter(|m| m.sender == sender).count()
    }
}
