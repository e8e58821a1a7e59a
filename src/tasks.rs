//! Async task management for non-blocking API operations.
//!
//! Page fetches run in background tasks so the UI stays responsive while a
//! request is in flight. Results come back to the main event loop over a
//! tokio channel.
//!
//! # Architecture
//!
//! 1. The main loop detects a pending page request on the application state
//! 2. Instead of awaiting inline, it spawns a background task via `TaskSpawner`
//! 3. The main loop continues rendering and handling events
//! 4. When the task completes, it sends an `ApiMessage` through the channel
//! 5. The main loop polls the channel with `try_recv()` and handles results
//!
//! Nothing cancels an in-flight fetch when another page is requested; if two
//! fetches overlap, both messages arrive and the later one wins.

use tokio::sync::mpsc;

use crate::api::types::ArtworksPage;
use crate::api::ArticClient;

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum ApiMessage {
    /// One page of artwork records, or the failure that replaced it.
    PageFetched {
        /// The zero-based page index that was requested.
        page: usize,
        /// The fetch outcome, with errors flattened to display strings.
        result: Result<ArtworksPage, String>,
    },
}

/// Spawns background tasks for async operations.
///
/// Holds a channel sender; each spawn method clones the data it needs and
/// spawns a tokio task that sends its result through the channel.
#[derive(Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<ApiMessage>,
}

impl TaskSpawner {
    /// Create a new TaskSpawner with the given channel sender.
    pub fn new(tx: mpsc::UnboundedSender<ApiMessage>) -> Self {
        Self { tx }
    }

    /// Spawn a task to fetch one page of artworks.
    pub fn spawn_fetch_page(&self, client: &ArticClient, page: usize) {
        let tx = self.tx.clone();
        let client = client.clone();
        tokio::spawn(async move {
            let result = client.fetch_page(page).await.map_err(|e| e.to_string());
            let _ = tx.send(ApiMessage::PageFetched { page, result });
        });
    }
}

/// Create a new task channel and spawner.
///
/// Returns a tuple of (receiver, spawner). The receiver should be polled
/// in the main event loop, and the spawner should be used to spawn tasks.
pub fn create_task_channel() -> (mpsc::UnboundedReceiver<ApiMessage>, TaskSpawner) {
    let (tx, rx) = mpsc::unbounded_channel();
    (rx, TaskSpawner::new(tx))
}
