//! Append-only chat transcript

use crate::types::ChatMessage;

/// Ordered list of conversation messages, always starting from a greeting
#[derive(Debug, Clone)]
pub struct Transcript {
    greeting: String,
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Create a transcript holding only the greeting
    pub fn new(greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        Self {
            messages: vec![ChatMessage::assistant(greeting.clone())],
            greeting,
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Drop everything and start again from a fresh greeting
    pub fn reset(&mut self) {
        self.messages.clear();
        self.messages.push(ChatMessage::assistant(self.greeting.clone()));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
