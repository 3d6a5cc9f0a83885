use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A bulletin-board post as persisted by a [`MessageStore`](super::MessageStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

/// A validated post that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub content: String,
    pub timestamp: NaiveDateTime,
}

impl NewMessage {
    pub fn into_message(self, id: u64) -> Message {
        Message {
            id,
            content: self.content,
            timestamp: self.timestamp,
        }
    }
}

/// Most recent first; equal timestamps fall back to the later id first.
pub fn newest_first(left: &Message, right: &Message) -> Ordering {
    right
        .timestamp
        .cmp(&left.timestamp)
        .then_with(|| right.id.cmp(&left.id))
}
