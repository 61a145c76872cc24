//! Server state shared by handlers and the presence reaper.

use std::{sync::Arc, time::Duration};

use crate::{
    domain::{MessageRepository, ParticipantRepository},
    infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
};

/// Shared application state
pub struct AppState {
    /// Participant registry storage
    pub participants: Arc<dyn ParticipantRepository>,
    /// Message log storage
    pub messages: Arc<dyn MessageRepository>,
    /// How long a participant may stay silent before the reaper evicts it
    pub inactivity_threshold: Duration,
}

impl AppState {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        inactivity_threshold: Duration,
    ) -> Self {
        Self {
            participants,
            messages,
            inactivity_threshold,
        }
    }

    /// State backed by fresh in-memory stores
    pub fn in_memory(inactivity_threshold: Duration) -> Self {
        Self::new(
            Arc::new(InMemoryParticipantRepository::new()),
            Arc::new(InMemoryMessageRepository::new()),
            inactivity_threshold,
        )
    }
}
