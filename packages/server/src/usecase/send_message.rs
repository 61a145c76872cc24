//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 送信者の存在確認とメッセージログへの追記
//!
//! ### なぜこのテストが必要か
//! - 送信時点で登録されている参加者だけが投稿できることを保証
//! - 投稿は last_seen を更新しない（heartbeat のみが更新する）
//!
//! ### どのような状況を想定しているか
//! - 正常系：公開メッセージ・個人宛てメッセージの送信
//! - 異常系：未登録の送信者、status 種別の投稿

use std::sync::Arc;

use parlor_shared::time::now_millis;

use crate::domain::{
    Message, MessageKind, MessageRepository, MessageText, ParticipantName, ParticipantRepository,
    Recipient, Timestamp,
};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participants,
            messages,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - 追記されたメッセージ
    /// * `Err(SendMessageError)` - 送信失敗
    pub async fn execute(
        &self,
        from: ParticipantName,
        to: Recipient,
        text: MessageText,
        kind: MessageKind,
    ) -> Result<Message, SendMessageError> {
        if !kind.is_client_postable() {
            return Err(SendMessageError::KindNotPostable(kind));
        }

        if !self.participants.exists(&from).await? {
            return Err(SendMessageError::UnknownSender(from.into_string()));
        }

        let message = Message::new(from, to, text, kind, Timestamp::new(now_millis()));
        self.messages.append(message.clone()).await?;

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Participant, RepositoryError, repository::MockMessageRepository},
        infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
    };

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    fn text(value: &str) -> MessageText {
        MessageText::new(value.to_string()).unwrap()
    }

    async fn repositories_with_alice() -> (
        Arc<InMemoryParticipantRepository>,
        Arc<InMemoryMessageRepository>,
    ) {
        let participants = Arc::new(InMemoryParticipantRepository::new());
        participants
            .insert(Participant::new(name("Alice"), Timestamp::new(0)))
            .await
            .unwrap();
        (participants, Arc::new(InMemoryMessageRepository::new()))
    }

    #[tokio::test]
    async fn test_send_message_success() {
        // テスト項目: 登録済み参加者のメッセージがログに追記される
        // given (前提条件):
        let (participants, messages) = repositories_with_alice().await;
        let usecase = SendMessageUseCase::new(participants, messages.clone());

        // when (操作):
        let result = usecase
            .execute(name("Alice"), Recipient::Everyone, text("hi"), MessageKind::Message)
            .await;

        // then (期待する結果):
        let sent = result.unwrap();
        assert_eq!(messages.list_all().await.unwrap(), vec![sent.clone()]);
        assert_eq!(sent.from, name("Alice"));
        assert_eq!(sent.text.as_str(), "hi");
    }

    #[tokio::test]
    async fn test_send_private_message_to_unregistered_recipient() {
        // テスト項目: 宛先が未登録でも送信できる（宛先の存在は検証しない）
        let (participants, messages) = repositories_with_alice().await;
        let usecase = SendMessageUseCase::new(participants, messages.clone());

        let result = usecase
            .execute(
                name("Alice"),
                Recipient::Participant(name("Ghost")),
                text("are you there?"),
                MessageKind::PrivateMessage,
            )
            .await;

        assert!(result.is_ok());
        assert_eq!(messages.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_send_message_does_not_refresh_last_seen() {
        // テスト項目: メッセージ送信では last_seen は更新されない
        let (participants, messages) = repositories_with_alice().await;
        let usecase = SendMessageUseCase::new(participants.clone(), messages);

        usecase
            .execute(name("Alice"), Recipient::Everyone, text("hi"), MessageKind::Message)
            .await
            .unwrap();

        let alice = participants.find_by_name(&name("Alice")).await.unwrap().unwrap();
        assert_eq!(alice.last_seen, Timestamp::new(0));
    }

    #[tokio::test]
    async fn test_send_message_unknown_sender() {
        // テスト項目: 未登録の送信者はエラーになり、ログは変化しない
        // given (前提条件):
        let (participants, messages) = repositories_with_alice().await;
        let usecase = SendMessageUseCase::new(participants, messages.clone());

        // when (操作):
        let result = usecase
            .execute(name("Bob"), Recipient::Everyone, text("hi"), MessageKind::Message)
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(SendMessageError::UnknownSender("Bob".to_string()))
        );
        assert!(messages.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_send_status_kind_rejected() {
        // テスト項目: status 種別はクライアントから投稿できない
        let (participants, messages) = repositories_with_alice().await;
        let usecase = SendMessageUseCase::new(participants, messages.clone());

        let result = usecase
            .execute(name("Alice"), Recipient::Everyone, text("fake"), MessageKind::Status)
            .await;

        assert_eq!(
            result,
            Err(SendMessageError::KindNotPostable(MessageKind::Status))
        );
        assert!(messages.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_send_message_append_fails() {
        // テスト項目: 追記失敗は Repository エラーとして返る
        let (participants, _) = repositories_with_alice().await;
        let mut messages = MockMessageRepository::new();
        messages
            .expect_append()
            .returning(|_| Err(RepositoryError::Unavailable("down".to_string())));
        let usecase = SendMessageUseCase::new(participants, Arc::new(messages));

        let result = usecase
            .execute(name("Alice"), Recipient::Everyone, text("hi"), MessageKind::Message)
            .await;

        assert!(matches!(result, Err(SendMessageError::Repository(_))));
    }
}
