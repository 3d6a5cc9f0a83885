use std::path::Path;

use async_trait::async_trait;
use sled::{Db, Tree};
use tokio::task;

use crate::core::error::AppError;
use crate::features::messages::model::{Message, NewMessage, newest_first};
use crate::features::messages::store::MessageStore;

const MESSAGES_TREE: &str = "messages";

/// Messages keyed by big-endian id in a dedicated sled tree, stored as JSON.
pub struct SledMessageStore {
    db: Db,
    tree: Tree,
}

impl SledMessageStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let db = sled::open(path).map_err(|err| {
            AppError::storage(format!(
                "failed to open sled database at {}: {err}",
                path.display()
            ))
        })?;

        Self::new(db)
    }

    pub fn new(db: Db) -> Result<Self, AppError> {
        let tree = db
            .open_tree(MESSAGES_TREE)
            .map_err(|err| AppError::storage(format!("failed to open messages tree: {err}")))?;

        Ok(Self { db, tree })
    }

    pub async fn flush(&self) -> Result<(), AppError> {
        self.tree
            .flush_async()
            .await
            .map_err(|err| AppError::storage(format!("failed to flush messages: {err}")))?;
        Ok(())
    }
}

#[async_trait]
impl MessageStore for SledMessageStore {
    async fn save(&self, message: NewMessage) -> Result<Message, AppError> {
        let db = self.db.clone();
        let tree = self.tree.clone();

        let stored = task::spawn_blocking(move || -> Result<Message, AppError> {
            // generate_id starts at 0 and never hands out the same value twice, even across restarts
            let id = db
                .generate_id()
                .map_err(|err| AppError::storage(format!("failed to allocate message id: {err}")))?
                + 1;
            let stored = message.into_message(id);
            let data = serde_json::to_vec(&stored)
                .map_err(|err| AppError::internal(format!("failed to serialise message: {err}")))?;

            tree.insert(id.to_be_bytes(), data)
                .map_err(|err| AppError::storage(format!("failed to persist message: {err}")))?;
            Ok(stored)
        })
        .await
        .map_err(|err| AppError::internal(format!("message store task join error: {err}")))??;

        self.flush().await?;

        Ok(stored)
    }

    async fn find_all_order_by_timestamp_desc(&self) -> Result<Vec<Message>, AppError> {
        let tree = self.tree.clone();

        let mut messages = task::spawn_blocking(move || -> Result<Vec<Message>, AppError> {
            tree.iter()
                .values()
                .map(|value| {
                    let bytes = value.map_err(|err| {
                        AppError::storage(format!("failed to read messages: {err}"))
                    })?;
                    serde_json::from_slice::<Message>(&bytes).map_err(|err| {
                        AppError::storage(format!("failed to decode stored message: {err}"))
                    })
                })
                .collect()
        })
        .await
        .map_err(|err| AppError::internal(format!("message store task join error: {err}")))??;

        messages.sort_by(newest_first);
        Ok(messages)
    }

    async fn count(&self) -> Result<u64, AppError> {
        let tree = self.tree.clone();
        let count = task::spawn_blocking(move || tree.len())
            .await
            .map_err(|err| AppError::internal(format!("message store task join error: {err}")))?;

        Ok(count as u64)
    }
}
