//! UseCase: 参加者登録処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RegisterParticipantUseCase::execute() メソッド
//! - 参加者の登録（重複チェック、参加通知メッセージの追記）
//!
//! ### なぜこのテストが必要か
//! - 名前が唯一の識別子であるため、重複登録を防ぐ必要がある
//! - 登録ごとに参加通知がちょうど 1 件追記されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の登録
//! - 異常系：同じ名前での再登録
//! - 異常系：ストレージ障害（補償処理なし）

use std::sync::Arc;

use parlor_shared::time::now_millis;

use crate::domain::{
    MessageFactory, MessageRepository, Participant, ParticipantName, ParticipantRepository,
    RepositoryError, Timestamp,
};

use super::error::RegisterParticipantError;

/// 参加者登録のユースケース
pub struct RegisterParticipantUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl RegisterParticipantUseCase {
    /// 新しい RegisterParticipantUseCase を作成
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participants,
            messages,
        }
    }

    /// 参加者登録を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 登録された参加者
    /// * `Err(RegisterParticipantError)` - 登録失敗
    pub async fn execute(
        &self,
        name: ParticipantName,
    ) -> Result<Participant, RegisterParticipantError> {
        // 1. 重複チェック
        if self.participants.exists(&name).await? {
            return Err(RegisterParticipantError::DuplicateName(name.into_string()));
        }

        // 2. 参加者を追加（チェック後に割り込まれた場合はストアの一意制約で検出）
        let now = Timestamp::new(now_millis());
        let participant = Participant::new(name.clone(), now);
        self.participants
            .insert(participant.clone())
            .await
            .map_err(|e| match e {
                RepositoryError::DuplicateKey(key) => RegisterParticipantError::DuplicateName(key),
                other => RegisterParticipantError::Repository(other),
            })?;

        // 3. 参加通知を追記
        self.messages
            .append(MessageFactory::joined(name, now))
            .await?;

        Ok(participant)
    }
}
