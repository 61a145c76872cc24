use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Participant, ParticipantName, ParticipantRepository, RepositoryError, Timestamp,
};

/// インメモリ Participant Repository 実装
///
/// 参加者名を一意キーとするコレクション。挿入順を保持します。
#[derive(Default)]
pub struct InMemoryParticipantRepository {
    participants: Arc<Mutex<Vec<Participant>>>,
}

impl InMemoryParticipantRepository {
    /// 新しい InMemoryParticipantRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn find_by_name(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.iter().find(|p| &p.name == name).cloned())
    }

    async fn exists(&self, name: &ParticipantName) -> Result<bool, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.iter().any(|p| &p.name == name))
    }

    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        if participants.iter().any(|p| p.name == participant.name) {
            return Err(RepositoryError::DuplicateKey(
                participant.name.into_string(),
            ));
        }
        participants.push(participant);
        Ok(())
    }

    async fn touch(
        &self,
        name: &ParticipantName,
        last_seen: Timestamp,
    ) -> Result<bool, RepositoryError> {
        let mut participants = self.participants.lock().await;
        match participants.iter_mut().find(|p| &p.name == name) {
            Some(participant) => {
                participant.last_seen = last_seen;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.clone())
    }

    async fn find_inactive(&self, cutoff: Timestamp) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants
            .iter()
            .filter(|p| p.is_inactive_since(cutoff))
            .cloned()
            .collect())
    }

    async fn delete_inactive(&self, cutoff: Timestamp) -> Result<usize, RepositoryError> {
        let mut participants = self.participants.lock().await;
        let before = participants.len();
        participants.retain(|p| !p.is_inactive_since(cutoff));
        Ok(before - participants.len())
    }
}
