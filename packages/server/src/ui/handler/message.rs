//! `/messages` endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode},
};

use super::user_header;
use crate::{
    domain::{MessageKind, MessageText, ParticipantName, Recipient},
    infrastructure::dto::http::{ListMessagesQuery, MessageDto, PostMessageRequest},
    ui::{
        error::{ApiError, ApiResult},
        state::AppState,
    },
    usecase::{ListMessagesUseCase, SendMessageUseCase},
};

/// Post a message as the participant named in the `user` header
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<PostMessageRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(request) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    let from = requester(&headers)?;
    let to = Recipient::new(request.to)?;
    let text = MessageText::new(request.text)?;
    let kind: MessageKind = request.kind.parse()?;

    let usecase = SendMessageUseCase::new(state.participants.clone(), state.messages.clone());
    let message = usecase.execute(from, to, text, kind).await?;

    tracing::debug!(
        "Message {} appended ({} -> {}, {})",
        message.id,
        message.from,
        message.to,
        message.kind
    );
    Ok(StatusCode::CREATED)
}

/// List the messages visible to the participant named in the `user` header
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<ListMessagesQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<MessageDto>>> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    let reader = requester(&headers)?;
    let limit = parse_limit(query.limit.as_deref())?;

    let usecase = ListMessagesUseCase::new(state.messages.clone());
    let messages = usecase.execute(&reader, limit).await?;

    Ok(Json(messages.into_iter().map(MessageDto::from).collect()))
}

fn requester(headers: &HeaderMap) -> ApiResult<ParticipantName> {
    let user = user_header(headers)
        .ok_or_else(|| ApiError::Validation("Missing 'user' header".to_string()))?;
    Ok(ParticipantName::new(user)?)
}

/// `limit` must be a positive integer when present
fn parse_limit(raw: Option<&str>) -> ApiResult<Option<usize>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(Some(limit)),
        _ => Err(ApiError::Validation(format!(
            "limit must be a positive integer (got '{raw}')"
        ))),
    }
}
