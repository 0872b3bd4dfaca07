//! Durable snapshots of the open-tab state.
//!
//! The persisted payload is a minimal, versioned JSON document: the ordered
//! tab list (id, path, title, icon, scroll position, timestamps) plus the
//! active tab id. Snapshots with a different schema version are discarded
//! wholesale on load, never partially applied; the workspace then derives
//! its state from the current address instead.

pub mod controller;
pub mod store;

pub use controller::PersistenceController;

use crate::routes::TabIcon;
use crate::tab::{TabId, TabManager};
use serde::{Deserialize, Serialize};
use store::StateStore;
use thiserror::Error;

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Store key under which the open-tab snapshot lives.
pub const TABS_STORE_KEY: &str = "tabdeck.tabs";

/// One persisted tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabRecord {
    pub id: TabId,
    pub path: String,
    pub title: String,
    #[serde(default)]
    pub icon: TabIcon,
    #[serde(default)]
    pub scroll_position: f32,
    pub opened_at: i64,
    /// Absent in older snapshots; hydration reconstitutes it from `opened_at`.
    #[serde(default)]
    pub last_active_at: Option<i64>,
}

/// The persisted open-tab state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    pub version: u32,
    pub tabs: Vec<TabRecord>,
    pub active_tab_id: Option<TabId>,
}

impl WorkspaceSnapshot {
    /// Capture the durable fields of the live tab state.
    pub fn capture(manager: &TabManager) -> Self {
        let tabs = manager
            .tabs()
            .iter()
            .map(|tab| TabRecord {
                id: tab.id,
                path: tab.path.clone(),
                title: tab.title.clone(),
                icon: tab.icon,
                scroll_position: tab.scroll_position,
                opened_at: tab.opened_at,
                last_active_at: Some(tab.last_active_at),
            })
            .collect();
        Self {
            version: SNAPSHOT_VERSION,
            tabs,
            active_tab_id: manager.active_tab_id(),
        }
    }
}

/// Why a stored snapshot was rejected.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot schema version {found} does not match {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("snapshot contains no tabs")]
    Empty,
    #[error("corrupt snapshot payload: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Parse and validate a raw snapshot payload.
pub fn decode(raw: &str) -> Result<WorkspaceSnapshot, SnapshotError> {
    let snapshot: WorkspaceSnapshot = serde_json::from_str(raw)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::VersionMismatch {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    if snapshot.tabs.is_empty() {
        return Err(SnapshotError::Empty);
    }
    Ok(snapshot)
}

/// Read the stored snapshot at startup.
///
/// Returns `None` when nothing usable is stored (missing key, corrupt
/// payload, version mismatch, empty tab list); the reason is logged and the
/// caller starts from the current address instead.
pub fn load(store: &dyn StateStore) -> Option<WorkspaceSnapshot> {
    let raw = store.get(TABS_STORE_KEY)?;
    match decode(&raw) {
        Ok(snapshot) => {
            log::info!("Loaded snapshot with {} tabs", snapshot.tabs.len());
            Some(snapshot)
        }
        Err(err) => {
            log::warn!("Discarding stored tab snapshot: {}", err);
            None
        }
    }
}
