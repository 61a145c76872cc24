//! `/participants` endpoints.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::{
    domain::ParticipantName,
    infrastructure::dto::http::{ParticipantDto, RegisterParticipantRequest},
    ui::{
        error::{ApiError, ApiResult},
        state::AppState,
    },
    usecase::{ListParticipantsUseCase, RegisterParticipantUseCase},
};

/// Register a participant and announce it to the room
pub async fn register_participant(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterParticipantRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(request) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    let name = ParticipantName::new(request.name)?;

    let usecase =
        RegisterParticipantUseCase::new(state.participants.clone(), state.messages.clone());
    let participant = usecase.execute(name).await?;

    tracing::info!("Participant '{}' registered", participant.name);
    Ok(StatusCode::CREATED)
}

/// List registered participants
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ParticipantDto>>> {
    let usecase = ListParticipantsUseCase::new(state.participants.clone());
    let participants = usecase.execute().await?;

    Ok(Json(
        participants.into_iter().map(ParticipantDto::from).collect(),
    ))
}
