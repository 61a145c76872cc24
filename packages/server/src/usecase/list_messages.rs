//! UseCase: メッセージ一覧の取得
//!
//! ログ全体を読み出し、要求者ごとの可視性ルールを適用します。

use std::sync::Arc;

use crate::domain::{
    Message, MessageRepository, ParticipantName, RepositoryError, visible_messages,
};

/// メッセージ一覧のユースケース
pub struct ListMessagesUseCase {
    messages: Arc<dyn MessageRepository>,
}

impl ListMessagesUseCase {
    /// 新しい ListMessagesUseCase を作成
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// `requester` が見られるメッセージを返す
    ///
    /// # Arguments
    ///
    /// * `requester` - 要求者（登録済みである必要はない）
    /// * `limit` - 指定時はフィルタ後の末尾 `limit` 件のみ
    pub async fn execute(
        &self,
        requester: &ParticipantName,
        limit: Option<usize>,
    ) -> Result<Vec<Message>, RepositoryError> {
        let log = self.messages.list_all().await?;
        Ok(visible_messages(&log, requester, limit))
    }
}
