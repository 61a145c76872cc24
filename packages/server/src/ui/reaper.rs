//! Presence reaper: the periodic inactivity sweep.
//!
//! Runs on its own tokio task, independent of request handling. Each tick
//! evicts participants that have been silent for longer than the inactivity
//! threshold. A failed tick is logged and abandoned; the next tick is the retry.

use std::{sync::Arc, time::Duration};

use parlor_shared::time::now_millis;
use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};

use super::state::AppState;
use crate::{domain::Timestamp, usecase::ReapInactiveParticipantsUseCase};

/// Spawn the reaper. The first tick fires one full `period` after the call.
///
/// # Panics
///
/// Panics if `period` is zero.
pub fn spawn_presence_reaper(state: Arc<AppState>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let usecase = ReapInactiveParticipantsUseCase::new(
            state.participants.clone(),
            state.messages.clone(),
            state.inactivity_threshold,
        );
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(
            "Presence reaper started (every {:?}, threshold {:?})",
            period,
            state.inactivity_threshold
        );

        loop {
            ticker.tick().await;
            run_tick(&usecase).await;
        }
    })
}

async fn run_tick(usecase: &ReapInactiveParticipantsUseCase) {
    match usecase.execute(Timestamp::new(now_millis())).await {
        Ok(evicted) if evicted.is_empty() => {
            tracing::trace!("Reaper tick: nobody to evict");
        }
        Ok(evicted) => {
            for name in &evicted {
                tracing::info!("Participant '{}' left the room (inactive)", name);
            }
        }
        Err(e) => {
            tracing::error!("Reaper tick abandoned: {}", e);
        }
    }
}
