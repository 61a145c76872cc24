//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ParticipantName validation error
    #[error("ParticipantName cannot be empty")]
    ParticipantNameEmpty,

    /// Recipient validation error
    #[error("Recipient cannot be empty")]
    RecipientEmpty,

    /// MessageText validation error
    #[error("MessageText cannot be empty")]
    MessageTextEmpty,

    /// Unknown message kind on the wire
    #[error("Unknown message kind: {0}")]
    UnknownMessageKind(String),
}

/// Errors raised by the storage collaborators
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A document with the same unique key already exists
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The store could not complete the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
