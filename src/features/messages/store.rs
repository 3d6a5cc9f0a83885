use async_trait::async_trait;

use crate::core::error::AppError;
use crate::features::messages::model::{Message, NewMessage};

/// Persistence for messages. The store is the only place ids are assigned.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn save(&self, message: NewMessage) -> Result<Message, AppError>;
    async fn find_all_order_by_timestamp_desc(&self) -> Result<Vec<Message>, AppError>;
    async fn count(&self) -> Result<u64, AppError>;
}
