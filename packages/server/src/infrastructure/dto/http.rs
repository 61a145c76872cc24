//! HTTP API request and response DTOs for the chat room.

use parlor_shared::time::format_clock_time;
use serde::{Deserialize, Serialize};

use crate::domain::{Message, Participant};

/// Body of `POST /participants`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterParticipantRequest {
    pub name: String,
}

/// Body of `POST /messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessageRequest {
    pub to: String,
    pub text: String,
    #[serde(alias = "type")]
    pub kind: String,
}

/// Query of `GET /messages`
///
/// `limit` is kept as a string so that a malformed value is reported as a
/// validation error rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMessagesQuery {
    pub limit: Option<String>,
}

/// Participant entry of `GET /participants`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub name: String,
    /// Unix timestamp (milliseconds since epoch)
    pub last_seen: i64,
}

impl From<Participant> for ParticipantDto {
    fn from(participant: Participant) -> Self {
        Self {
            name: participant.name.into_string(),
            last_seen: participant.last_seen.value(),
        }
    }
}

/// Message entry of `GET /messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    pub kind: String,
    pub time: String, // HH:MM:SS
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string(),
            from: message.from.into_string(),
            to: message.to.into(),
            text: message.text.as_str().to_string(),
            kind: message.kind.as_str().to_string(),
            time: format_clock_time(message.timestamp.value()),
        }
    }
}
