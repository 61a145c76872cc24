//! UseCase: 参加者一覧の取得

use std::sync::Arc;

use crate::domain::{Participant, ParticipantRepository, RepositoryError};

/// 参加者一覧のユースケース
pub struct ListParticipantsUseCase {
    participants: Arc<dyn ParticipantRepository>,
}

impl ListParticipantsUseCase {
    /// 新しい ListParticipantsUseCase を作成
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    /// 登録中の参加者のスナップショットを返す
    pub async fn execute(&self) -> Result<Vec<Participant>, RepositoryError> {
        self.participants.list().await
    }
}
