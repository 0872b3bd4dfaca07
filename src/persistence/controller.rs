//! Debounced snapshot writer.
//!
//! Every state change schedules a snapshot; the background writer waits for
//! a quiet interval before serializing, and a newer snapshot arriving
//! mid-wait supersedes the pending one (last write wins, no merging). When
//! the controller is dropped before the interval elapses the pending write
//! is cancelled rather than flushed — the acceptable data-loss window is
//! bounded by the debounce interval.

use super::{TABS_STORE_KEY, WorkspaceSnapshot};
use crate::persistence::store::StateStore;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread::JoinHandle;
use std::time::Duration;

/// Owns the writer thread. `schedule` never blocks the caller.
pub struct PersistenceController {
    tx: Option<Sender<WorkspaceSnapshot>>,
    worker: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for PersistenceController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceController").finish_non_exhaustive()
    }
}

impl PersistenceController {
    /// Spawn the writer over `store` with the given quiet interval.
    pub fn new<S: StateStore + 'static>(store: S, debounce: Duration) -> Self {
        let (tx, rx) = channel::<WorkspaceSnapshot>();
        let worker = std::thread::Builder::new()
            .name("tabdeck-persist".to_string())
            .spawn(move || run_writer(store, rx, debounce));
        match worker {
            Ok(handle) => Self {
                tx: Some(tx),
                worker: Some(handle),
            },
            Err(err) => {
                // No writer thread: the workspace runs in-memory only.
                log::error!("Failed to spawn persistence writer: {}", err);
                Self {
                    tx: None,
                    worker: None,
                }
            }
        }
    }

    /// Queue a snapshot for the next debounced write, superseding any
    /// pending one. Fire-and-forget.
    pub fn schedule(&self, snapshot: WorkspaceSnapshot) {
        if let Some(tx) = &self.tx {
            // A send error means the writer already exited; nothing to do.
            let _ = tx.send(snapshot);
        }
    }
}

impl Drop for PersistenceController {
    fn drop(&mut self) {
        // Dropping the sender disconnects the channel; the writer cancels
        // any pending write and exits.
        self.tx.take();
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

fn run_writer<S: StateStore>(store: S, rx: Receiver<WorkspaceSnapshot>, debounce: Duration) {
    while let Ok(mut latest) = rx.recv() {
        loop {
            match rx.recv_timeout(debounce) {
                Ok(newer) => latest = newer,
                Err(RecvTimeoutError::Timeout) => {
                    write_snapshot(&store, &latest);
                    break;
                }
                // Controller dropped mid-wait: cancel the pending write.
                Err(RecvTimeoutError::Disconnected) => return,
            }
        }
    }
}

fn write_snapshot<S: StateStore>(store: &S, snapshot: &WorkspaceSnapshot) {
    match serde_json::to_string(snapshot) {
        Ok(raw) => {
            store.set(TABS_STORE_KEY, &raw);
            log::debug!("Persisted snapshot with {} tabs", snapshot.tabs.len());
        }
        Err(err) => log::error!("Failed to serialize snapshot: {}", err),
    }
}
