use serde::{Deserialize, Serialize};

use crate::core::clock::format_timestamp;
use crate::features::messages::model::Message;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMessageRequest {
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: u64,
    pub content: String,
    pub timestamp: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            timestamp: format_timestamp(&message.timestamp),
            id: message.id,
            content: message.content,
        }
    }
}
