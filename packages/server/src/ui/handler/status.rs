//! `/status` endpoint (presence heartbeat).

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
};

use super::user_header;
use crate::{
    domain::ParticipantName,
    ui::{
        error::{ApiError, ApiResult},
        state::AppState,
    },
    usecase::HeartbeatParticipantUseCase,
};

/// Refresh `last_seen` of the participant named in the `user` header
///
/// A missing or unusable header is reported the same way as an unknown participant.
pub async fn heartbeat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<StatusCode> {
    let name = user_header(&headers)
        .and_then(|user| ParticipantName::new(user).ok())
        .ok_or_else(|| ApiError::NotFound("Unknown participant".to_string()))?;

    let usecase = HeartbeatParticipantUseCase::new(state.participants.clone());
    usecase.execute(&name).await?;

    tracing::trace!("Heartbeat from '{}'", name);
    Ok(StatusCode::OK)
}
