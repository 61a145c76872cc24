//! Core domain models for the chat room.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{
    error::ValueObjectError,
    factory::MessageIdFactory,
    value_object::{MessageId, MessageText, ParticipantName, Recipient, Timestamp},
};

/// Represents a registered participant and its freshness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Participant identity
    pub name: ParticipantName,
    /// Last time the participant was seen (registration or heartbeat)
    pub last_seen: Timestamp,
}

impl Participant {
    /// Create a new participant
    pub fn new(name: ParticipantName, last_seen: Timestamp) -> Self {
        Self { name, last_seen }
    }

    /// Whether the participant has not been seen after `cutoff`
    pub fn is_inactive_since(&self, cutoff: Timestamp) -> bool {
        self.last_seen <= cutoff
    }
}

/// Kind of a chat event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Join and departure notices
    Status,
    /// Public message, visible to every reader
    Message,
    PrivateMessage,
}

impl MessageKind {
    /// Whether clients may post messages of this kind
    pub fn is_client_postable(&self) -> bool {
        !matches!(self, Self::Status)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Message => "message",
            Self::PrivateMessage => "private_message",
        }
    }
}

impl FromStr for MessageKind {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(Self::Status),
            "message" => Ok(Self::Message),
            "private_message" => Ok(Self::PrivateMessage),
            other => Err(ValueObjectError::UnknownMessageKind(other.to_string())),
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a chat event in the message log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Identity assigned when the message is created
    pub id: MessageId,
    /// Sender. Not required to still be registered
    pub from: ParticipantName,
    /// Recipient
    pub to: Recipient,
    /// Message text
    pub text: MessageText,
    /// Message kind
    pub kind: MessageKind,
    /// Timestamp of the event
    pub timestamp: Timestamp,
}

impl Message {
    /// Create a new message with a fresh id
    pub fn new(
        from: ParticipantName,
        to: Recipient,
        text: MessageText,
        kind: MessageKind,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: MessageIdFactory::generate(),
            from,
            to,
            text,
            kind,
            timestamp,
        }
    }
}
