//! Chat message model and the in-memory transcript.
//!
//! Messages are immutable once appended. Ids come from a per-transcript
//! counter and only ever increase, even across `clear()`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Utc>,
    /// For bot replies: the user message that triggered it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<MessageId>,
}

impl ChatMessage {
    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

/// Append-only message log for one session.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    last_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return a copy of it.
    pub fn push(
        &mut self,
        sender: Sender,
        text: impl Into<String>,
        in_reply_to: Option<MessageId>,
    ) -> ChatMessage {
        self.last_id += 1;
        let message = ChatMessage {
            id: MessageId(self.last_id),
            text: text.into(),
            sender,
            sent_at: Utc::now(),
            in_reply_to,
        };
        self.messages.push(message.clone());
        message
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    /// The last `n` messages, oldest first.
    pub fn recent(&self, n: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.clone()
    }

    /// Drop the visible history. Ids keep counting from where they were.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
