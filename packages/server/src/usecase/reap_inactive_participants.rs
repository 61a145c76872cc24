//! UseCase: 非アクティブな参加者の退出処理（リーパーの 1 ティック分）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ReapInactiveParticipantsUseCase::execute() メソッド
//! - カットオフ時刻の計算、退出通知の追記、参加者の削除
//!
//! ### なぜこのテストが必要か
//! - 退出通知は参加者ごとにちょうど 1 件、時刻は `now` ではなくカットオフ時刻
//! - 途中で失敗した場合はそのティックを中断し、ロールバックしない
//!
//! ### どのような状況を想定しているか
//! - 正常系：古い参加者のみ削除される
//! - エッジケース：該当者なし（何もしない）、境界値（last_seen == cutoff）
//! - 異常系：追記失敗（削除しない）、削除失敗（通知は残る）

use std::{sync::Arc, time::Duration};

use crate::domain::{
    MessageFactory, MessageRepository, ParticipantName, ParticipantRepository, RepositoryError,
    Timestamp,
};

/// リーパー 1 ティック分のユースケース
pub struct ReapInactiveParticipantsUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
    inactivity_threshold: Duration,
}

impl ReapInactiveParticipantsUseCase {
    /// 新しい ReapInactiveParticipantsUseCase を作成
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        inactivity_threshold: Duration,
    ) -> Self {
        Self {
            participants,
            messages,
            inactivity_threshold,
        }
    }

    /// `now` 時点で 1 ティック分の退出処理を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ParticipantName>)` - 退出させた参加者（該当者なしなら空）
    /// * `Err(RepositoryError)` - 途中で失敗した。それまでの変更はそのまま残る
    pub async fn execute(&self, now: Timestamp) -> Result<Vec<ParticipantName>, RepositoryError> {
        let cutoff = now.saturating_sub(self.inactivity_threshold);

        let stale = self.participants.find_inactive(cutoff).await?;
        if stale.is_empty() {
            return Ok(Vec::new());
        }

        let names: Vec<ParticipantName> = stale.into_iter().map(|p| p.name).collect();
        let departures = names
            .iter()
            .map(|name| MessageFactory::departed(name.clone(), cutoff))
            .collect();
        self.messages.append_many(departures).await?;

        let removed = self.participants.delete_inactive(cutoff).await?;
        if removed != names.len() {
            tracing::debug!(
                "Reaper selected {} participants but removed {} (cutoff: {})",
                names.len(),
                removed,
                cutoff
            );
        }

        Ok(names)
    }
}
