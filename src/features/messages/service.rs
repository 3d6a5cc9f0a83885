use std::sync::Arc;

use tracing::{info, warn};

use crate::core::clock::Clock;
use crate::core::error::AppError;
use crate::features::messages::model::{Message, NewMessage};
use crate::features::messages::store::MessageStore;

pub const MAX_CONTENT_CHARS: usize = 1000;

pub struct MessageService {
    store: Arc<dyn MessageStore>,
    clock: Arc<dyn Clock>,
}

impl MessageService {
    pub fn new(store: Arc<dyn MessageStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn create_message(&self, content: Option<String>) -> Result<Message, AppError> {
        let content = validate_content(content).inspect_err(|err| {
            warn!(error = %err, "rejected message");
        })?;

        let message = NewMessage {
            content,
            timestamp: self.clock.now(),
        };
        let stored = self.store.save(message).await?;
        info!(id = stored.id, length = stored.content.encode_utf16().count(), "message stored");

        Ok(stored)
    }

    pub async fn list_messages(&self) -> Result<Vec<Message>, AppError> {
        self.store.find_all_order_by_timestamp_desc().await
    }

    pub async fn count_messages(&self) -> Result<u64, AppError> {
        self.store.count().await
    }
}

/// Empty content is allowed; absent content and anything past the limit are not.
/// Length is measured in UTF-16 code units, so astral characters count twice.
pub fn validate_content(content: Option<String>) -> Result<String, AppError> {
    let content =
        content.ok_or_else(|| AppError::validation("content must not be null".to_string()))?;

    let length = content.encode_utf16().count();
    if length > MAX_CONTENT_CHARS {
        return Err(AppError::validation(format!(
            "content must not exceed {MAX_CONTENT_CHARS} characters (got {length})"
        )));
    }

    Ok(content)
}
