//! Domain layer for the chat room.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;
pub mod visibility;

pub use entity::{Message, MessageKind, Participant};
pub use error::{RepositoryError, ValueObjectError};
pub use factory::{MessageFactory, MessageIdFactory};
pub use repository::{MessageRepository, ParticipantRepository};
pub use value_object::{MessageId, MessageText, ParticipantName, Recipient, Timestamp};
pub use visibility::{is_visible_to, visible_messages};
