//! Test server fixture.
//!
//! Starts the router in-process on an ephemeral port.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use parlor_server::ui::{AppState, build_router, reaper::spawn_presence_reaper};
use tokio::{net::TcpListener, task::JoinHandle};

pub struct TestServer {
    addr: SocketAddr,
    tasks: Vec<JoinHandle<()>>,
}

impl TestServer {
    /// Start a server with the reaper disabled
    pub async fn start() -> Self {
        Self::spawn(Arc::new(AppState::in_memory(Duration::from_secs(10))), None).await
    }

    /// Start a server whose reaper ticks every `period` with the given threshold
    pub async fn start_with_reaper(period: Duration, inactivity_threshold: Duration) -> Self {
        let state = Arc::new(AppState::in_memory(inactivity_threshold));
        Self::spawn(state, Some(period)).await
    }

    async fn spawn(state: Arc<AppState>, reaper_period: Option<Duration>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let mut tasks = Vec::new();
        if let Some(period) = reaper_period {
            tasks.push(spawn_presence_reaper(state.clone(), period));
        }

        let app = build_router(state);
        tasks.push(tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        }));

        Self { addr, tasks }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}
