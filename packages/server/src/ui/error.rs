//! HTTP error mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    domain::{RepositoryError, ValueObjectError},
    usecase::{HeartbeatError, RegisterParticipantError, SendMessageError},
};

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input (422)
    #[error("{0}")]
    Validation(String),

    /// Duplicate participant name (409)
    #[error("{0}")]
    Conflict(String),

    /// Unknown participant (404)
    #[error("{0}")]
    NotFound(String),

    /// Any storage failure (500)
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Storage(e) => tracing::error!("Storage failure: {}", e),
            other => tracing::warn!("Request rejected ({}): {}", status, other),
        }

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<ValueObjectError> for ApiError {
    fn from(err: ValueObjectError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<RegisterParticipantError> for ApiError {
    fn from(err: RegisterParticipantError) -> Self {
        match err {
            RegisterParticipantError::DuplicateName(_) => Self::Conflict(err.to_string()),
            RegisterParticipantError::Repository(e) => Self::Storage(e),
        }
    }
}

impl From<HeartbeatError> for ApiError {
    fn from(err: HeartbeatError) -> Self {
        match err {
            HeartbeatError::ParticipantNotFound(_) => Self::NotFound(err.to_string()),
            HeartbeatError::Repository(e) => Self::Storage(e),
        }
    }
}

impl From<SendMessageError> for ApiError {
    fn from(err: SendMessageError) -> Self {
        match err {
            SendMessageError::UnknownSender(_) | SendMessageError::KindNotPostable(_) => {
                Self::Validation(err.to_string())
            }
            SendMessageError::Repository(e) => Self::Storage(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageKind;

    #[test]
    fn test_status_codes() {
        // テスト項目: エラー分類ごとに HTTP ステータスが対応する
        assert_eq!(
            ApiError::from(ValueObjectError::ParticipantNameEmpty).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(RegisterParticipantError::DuplicateName("Alice".to_string()))
                .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(HeartbeatError::ParticipantNotFound("Alice".to_string()))
                .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(SendMessageError::UnknownSender("Bob".to_string())).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(SendMessageError::KindNotPostable(MessageKind::Status)).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(RepositoryError::Unavailable("down".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_errors_inside_usecase_errors_map_to_500() {
        // テスト項目: UseCase エラーに包まれたストレージ障害も 500 になる
        let err = RegisterParticipantError::Repository(RepositoryError::Unavailable(
            "down".to_string(),
        ));
        assert_eq!(
            ApiError::from(err).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
