use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::AppError;
use crate::features::messages::model::{Message, NewMessage, newest_first};
use crate::features::messages::store::MessageStore;

#[derive(Default)]
pub struct InMemoryMessageStore {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    last_id: u64,
    messages: Vec<Message>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn save(&self, message: NewMessage) -> Result<Message, AppError> {
        let mut guard = self.state.write().await;
        guard.last_id += 1;
        let stored = message.into_message(guard.last_id);
        guard.messages.push(stored.clone());
        Ok(stored)
    }

    async fn find_all_order_by_timestamp_desc(&self) -> Result<Vec<Message>, AppError> {
        let guard = self.state.read().await;
        let mut messages = guard.messages.clone();
        messages.sort_by(newest_first);
        Ok(messages)
    }

    async fn count(&self) -> Result<u64, AppError> {
        let guard = self.state.read().await;
        Ok(guard.messages.len() as u64)
    }
}
