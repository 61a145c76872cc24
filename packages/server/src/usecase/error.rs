//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{MessageKind, RepositoryError};

/// 参加者登録のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterParticipantError {
    /// 同じ名前の参加者が既に登録されている
    #[error("Participant '{0}' is already registered")]
    DuplicateName(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// heartbeat のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeartbeatError {
    #[error("Participant '{0}' is not registered")]
    ParticipantNotFound(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// メッセージ送信のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// 送信者が登録されていない
    #[error("Sender '{0}' is not registered")]
    UnknownSender(String),

    /// クライアントからは投稿できない種別
    #[error("Messages of kind '{0}' cannot be posted")]
    KindNotPostable(MessageKind),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
