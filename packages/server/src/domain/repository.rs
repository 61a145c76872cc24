//! Repository traits for the storage collaborators.
//!
//! The domain only relies on filter-by-exact-field lookups, inserts, single
//! updates and filtered deletes. No transactions span two calls.

use async_trait::async_trait;

use super::{
    entity::{Message, Participant},
    error::RepositoryError,
    value_object::{ParticipantName, Timestamp},
};

/// Participant registry storage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Find a participant by its exact name
    async fn find_by_name(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError>;

    /// Whether a participant with this name is registered
    async fn exists(&self, name: &ParticipantName) -> Result<bool, RepositoryError>;

    /// Insert a participant
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DuplicateKey` if the name is already taken
    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError>;

    /// Set `last_seen` of an existing participant. Returns false if none matched
    async fn touch(
        &self,
        name: &ParticipantName,
        last_seen: Timestamp,
    ) -> Result<bool, RepositoryError>;

    /// Snapshot of every registered participant
    async fn list(&self) -> Result<Vec<Participant>, RepositoryError>;

    /// Participants whose `last_seen` is at or before `cutoff`
    async fn find_inactive(&self, cutoff: Timestamp) -> Result<Vec<Participant>, RepositoryError>;

    /// Delete participants whose `last_seen` is at or before `cutoff`, returning how many were removed
    async fn delete_inactive(&self, cutoff: Timestamp) -> Result<usize, RepositoryError>;
}

/// Append-only message log storage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append a single message
    async fn append(&self, message: Message) -> Result<(), RepositoryError>;

    /// Append several messages, keeping their relative order
    async fn append_many(&self, messages: Vec<Message>) -> Result<(), RepositoryError>;

    /// Every message in append order
    async fn list_all(&self) -> Result<Vec<Message>, RepositoryError>;
}
