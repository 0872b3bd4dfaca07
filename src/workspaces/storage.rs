//! Persistence for saved workspaces.
//!
//! Workspaces live in the same key/value store as the open-tab snapshot,
//! under their own key and schema version. Loading is tolerant: a missing,
//! empty, corrupt, or version-mismatched payload yields an empty collection
//! rather than an error — losing saved workspaces must never break the strip.

use super::{Workspace, WorkspaceManager};
use crate::persistence::store::StateStore;
use serde::{Deserialize, Serialize};

/// Current workspaces schema version.
pub const WORKSPACES_VERSION: u32 = 1;

/// Store key under which saved workspaces live.
pub const WORKSPACES_STORE_KEY: &str = "tabdeck.workspaces";

#[derive(Debug, Serialize, Deserialize)]
struct WorkspacesPayload {
    version: u32,
    workspaces: Vec<Workspace>,
}

/// Load saved workspaces from the store.
pub fn load_workspaces(store: &dyn StateStore) -> WorkspaceManager {
    let Some(raw) = store.get(WORKSPACES_STORE_KEY) else {
        return WorkspaceManager::new();
    };

    match serde_json::from_str::<WorkspacesPayload>(&raw) {
        Ok(payload) if payload.version == WORKSPACES_VERSION => {
            log::info!("Loaded {} saved workspaces", payload.workspaces.len());
            WorkspaceManager::from_workspaces(payload.workspaces)
        }
        Ok(payload) => {
            log::warn!(
                "Discarding saved workspaces with schema version {} (expected {})",
                payload.version,
                WORKSPACES_VERSION
            );
            WorkspaceManager::new()
        }
        Err(err) => {
            log::warn!("Discarding corrupt saved workspaces: {}", err);
            WorkspaceManager::new()
        }
    }
}

/// Write the saved workspaces to the store. Best-effort.
pub fn save_workspaces(store: &dyn StateStore, manager: &WorkspaceManager) {
    let payload = WorkspacesPayload {
        version: WORKSPACES_VERSION,
        workspaces: manager.ordered().to_vec(),
    };
    match serde_json::to_string(&payload) {
        Ok(raw) => {
            store.set(WORKSPACES_STORE_KEY, &raw);
            log::debug!("Persisted {} saved workspaces", manager.len());
        }
        Err(err) => log::error!("Failed to serialize saved workspaces: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::store::MemoryStore;
    use crate::workspaces::WorkspaceTab;
    use uuid::Uuid;

    fn sample(name: &str) -> Workspace {
        Workspace {
            id: Uuid::new_v4(),
            name: name.to_string(),
            saved_at: 1_700_000_000_000,
            tabs: vec![WorkspaceTab {
                path: "/people/5".to_string(),
                title: "People #5".to_string(),
                icon: Default::default(),
            }],
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let store = MemoryStore::new();
        let mut manager = WorkspaceManager::new();
        manager.add(sample("Dispatch"));
        save_workspaces(&store, &manager);

        let loaded = load_workspaces(&store);
        assert_eq!(loaded.len(), 1);
        let ws = &loaded.ordered()[0];
        assert_eq!(ws.name, "Dispatch");
        assert_eq!(ws.tabs[0].path, "/people/5");
    }

    #[test]
    fn missing_key_yields_empty_collection() {
        let store = MemoryStore::new();
        assert!(load_workspaces(&store).is_empty());
    }

    #[test]
    fn corrupt_payload_yields_empty_collection() {
        let store = MemoryStore::new();
        store.set(WORKSPACES_STORE_KEY, "not json at all");
        assert!(load_workspaces(&store).is_empty());
    }

    #[test]
    fn version_mismatch_discards_wholesale() {
        let store = MemoryStore::new();
        let raw = serde_json::json!({
            "version": WORKSPACES_VERSION + 1,
            "workspaces": [sample("Old")]
        });
        store.set(WORKSPACES_STORE_KEY, &raw.to_string());
        assert!(load_workspaces(&store).is_empty());
    }
}
