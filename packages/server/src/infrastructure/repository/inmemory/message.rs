use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Message, MessageRepository, RepositoryError};

/// インメモリ Message Repository 実装
///
/// 追記専用のメッセージログ。削除・更新の操作は持ちません。
#[derive(Default)]
pub struct InMemoryMessageRepository {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl InMemoryMessageRepository {
    /// 新しい InMemoryMessageRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn append(&self, message: Message) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        messages.push(message);
        Ok(())
    }

    async fn append_many(&self, batch: Vec<Message>) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        messages.extend(batch);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Message>, RepositoryError> {
        let messages = self.messages.lock().await;
        Ok(messages.clone())
    }
}
