//! UseCase: 参加者の生存通知（heartbeat）処理
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録済み参加者の last_seen 更新
//! - 異常系：未登録の参加者（何も変更しない）

use std::sync::Arc;

use parlor_shared::time::now_millis;

use crate::domain::{ParticipantName, ParticipantRepository, Timestamp};

use super::error::HeartbeatError;

/// heartbeat のユースケース
pub struct HeartbeatParticipantUseCase {
    participants: Arc<dyn ParticipantRepository>,
}

impl HeartbeatParticipantUseCase {
    /// 新しい HeartbeatParticipantUseCase を作成
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    /// 参加者の last_seen を現在時刻に更新
    pub async fn execute(&self, name: &ParticipantName) -> Result<Timestamp, HeartbeatError> {
        let now = Timestamp::new(now_millis());
        if self.participants.touch(name, now).await? {
            Ok(now)
        } else {
            Err(HeartbeatError::ParticipantNotFound(name.to_string()))
        }
    }
}
