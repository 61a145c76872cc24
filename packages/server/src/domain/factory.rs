//! Domain factories for creating domain entities and value objects.

use super::{
    entity::{Message, MessageKind},
    value_object::{MessageId, MessageText, ParticipantName, Recipient, Timestamp},
};

/// Text of the status message appended when a participant registers.
pub const JOINED_TEXT: &str = "joined the room";

/// Text of the status message appended when a participant is evicted.
pub const DEPARTED_TEXT: &str = "left the room";

/// Factory for generating MessageId instances.
pub struct MessageIdFactory;

impl MessageIdFactory {
    /// Generate a new MessageId with a random UUID v4.
    pub fn generate() -> MessageId {
        MessageId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// Factory for the status messages the room emits on its own.
pub struct MessageFactory;

impl MessageFactory {
    /// Status message announcing `name` to everyone.
    pub fn joined(name: ParticipantName, at: Timestamp) -> Message {
        Self::status(name, JOINED_TEXT, at)
    }

    /// Status message announcing that `name` left the room.
    pub fn departed(name: ParticipantName, at: Timestamp) -> Message {
        Self::status(name, DEPARTED_TEXT, at)
    }

    fn status(name: ParticipantName, text: &'static str, at: Timestamp) -> Message {
        Message::new(
            name,
            Recipient::Everyone,
            MessageText(text.to_string()),
            MessageKind::Status,
            at,
        )
    }
}
