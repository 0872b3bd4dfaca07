//! Persistence round trips through a real file-backed store: capture,
//! debounced write, process "restart", hydrate.

use std::sync::Arc;
use std::time::Duration;

use tabdeck::config::WorkspaceConfig;
use tabdeck::persistence::store::{FileStore, MemoryStore, StateStore};
use tabdeck::persistence::{self, PersistenceController, TABS_STORE_KEY, WorkspaceSnapshot};
use tabdeck::tab::TabManager;
use tempfile::tempdir;

fn paths_of(mgr: &TabManager) -> Vec<&str> {
    mgr.tabs().iter().map(|t| t.path.as_str()).collect()
}

#[test]
fn session_survives_a_restart_via_file_store() {
    let temp = tempdir().expect("temp dir");

    // First "session": build up some state and flush it.
    {
        let store = FileStore::new(temp.path());
        let mut mgr = TabManager::new(WorkspaceConfig::default());
        mgr.open_tab("/");
        let person = mgr.open_tab("/people/42");
        mgr.rename_active_tab("Jane Doe");
        mgr.update_scroll_position(person, 240.0);
        mgr.open_tab("/alarms");
        mgr.set_active_tab(person);

        let controller = PersistenceController::new(store, Duration::from_millis(20));
        controller.schedule(WorkspaceSnapshot::capture(&mgr));
        std::thread::sleep(Duration::from_millis(150));
    } // controller joined, store dropped

    // Second "session": fresh manager, same directory.
    let store = FileStore::new(temp.path());
    let snapshot = persistence::load(&store).expect("stored snapshot is usable");
    let mut restored = TabManager::new(WorkspaceConfig::default());
    restored.hydrate(snapshot);

    assert_eq!(paths_of(&restored), vec!["/", "/people/42", "/alarms"]);
    let person = restored.get_tab_by_path("/people/42").unwrap();
    assert_eq!(person.title, "Jane Doe");
    assert_eq!(person.scroll_position, 240.0);
    assert_eq!(restored.active_tab_id(), Some(person.id));
}

#[test]
fn burst_of_changes_produces_one_final_write() {
    let store = Arc::new(MemoryStore::new());
    let controller = PersistenceController::new(Arc::clone(&store), Duration::from_millis(30));

    let mut mgr = TabManager::new(WorkspaceConfig::default());
    mgr.open_tab("/");
    for i in 0..5 {
        mgr.open_tab(&format!("/people/{i}"));
        controller.schedule(WorkspaceSnapshot::capture(&mgr));
    }

    std::thread::sleep(Duration::from_millis(200));
    let raw = store.get(TABS_STORE_KEY).expect("debounced write landed");
    let written: WorkspaceSnapshot = serde_json::from_str(&raw).unwrap();
    assert_eq!(written.tabs.len(), 6, "only the final state is on disk");
}

#[test]
fn corrupt_store_falls_back_to_an_empty_session() {
    let temp = tempdir().expect("temp dir");
    let store = FileStore::new(temp.path());
    store.set(TABS_STORE_KEY, "{\"version\": 99, \"garbage\": true");

    assert!(
        persistence::load(&store).is_none(),
        "unusable payloads are discarded wholesale"
    );
}

#[test]
fn hydrated_duplicates_collapse_to_one_tab_per_path() {
    let mut mgr = TabManager::new(WorkspaceConfig::default());
    mgr.open_tab("/");
    mgr.open_tab("/people");

    let mut snapshot = WorkspaceSnapshot::capture(&mgr);
    // Simulate stale data written by two racing sessions.
    let mut dup = snapshot.tabs[1].clone();
    dup.id = uuid::Uuid::new_v4();
    snapshot.tabs.push(dup);

    let mut restored = TabManager::new(WorkspaceConfig::default());
    restored.hydrate(snapshot);
    assert_eq!(paths_of(&restored), vec!["/", "/people"]);
}

#[test]
fn teardown_inside_the_quiet_interval_loses_only_the_pending_write() {
    let store = Arc::new(MemoryStore::new());
    let mut mgr = TabManager::new(WorkspaceConfig::default());
    mgr.open_tab("/");

    let controller = PersistenceController::new(Arc::clone(&store), Duration::from_millis(20));
    controller.schedule(WorkspaceSnapshot::capture(&mgr));
    std::thread::sleep(Duration::from_millis(150));

    // A last change arrives right before shutdown.
    mgr.open_tab("/people");
    controller.schedule(WorkspaceSnapshot::capture(&mgr));
    drop(controller);

    let raw = store.get(TABS_STORE_KEY).expect("earlier flush persisted");
    let written: WorkspaceSnapshot = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        written.tabs.len(),
        1,
        "the in-flight snapshot is cancelled, the previous one stands"
    );
}
