//! Capture the live tab set into a saved workspace.

use super::{Workspace, WorkspaceTab};
use crate::tab::TabManager;
use chrono::Utc;
use uuid::Uuid;

/// Snapshot the current tabs (path, title, icon, order) under `name`.
///
/// The capture is detached from the live state: later tab changes do not
/// affect the saved workspace.
pub fn capture_workspace(name: &str, manager: &TabManager) -> Workspace {
    let tabs = manager
        .tabs()
        .iter()
        .map(|tab| WorkspaceTab {
            path: tab.path.clone(),
            title: tab.title.clone(),
            icon: tab.icon,
        })
        .collect();

    Workspace {
        id: Uuid::new_v4(),
        name: name.to_string(),
        saved_at: Utc::now().timestamp_millis(),
        tabs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkspaceConfig;

    #[test]
    fn capture_records_order_and_metadata() {
        let mut mgr = TabManager::new(WorkspaceConfig::default());
        mgr.open_tab("/");
        let id = mgr.open_tab("/people/9");
        mgr.update_tab_title(id, "Ada Kaya");

        let ws = capture_workspace("Intake", &mgr);
        assert_eq!(ws.name, "Intake");
        let paths: Vec<&str> = ws.tabs.iter().map(|t| t.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/people/9"]);
        assert_eq!(ws.tabs[1].title, "Ada Kaya");
    }

    #[test]
    fn capture_is_detached_from_live_state() {
        let mut mgr = TabManager::new(WorkspaceConfig::default());
        mgr.open_tab("/");
        mgr.open_tab("/alarms");

        let ws = capture_workspace("Before", &mgr);
        let alarms = mgr.get_tab_by_path("/alarms").unwrap().id;
        mgr.close_tab(alarms);

        assert_eq!(ws.tabs.len(), 2, "saved copy unaffected by later closes");
    }
}
