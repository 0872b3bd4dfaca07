//! Right-click context menu for the tab strip.
//!
//! `build_menu` produces the items (with enablement) for a given tab;
//! `apply_menu_action` dispatches the chosen action as thin calls into the
//! state machine and the saved-workspaces collection.

use crate::tab::{SplitOrientation, TabId, TabManager};
use crate::workspaces::{RestoreMode, WorkspaceId, WorkspaceManager, apply_workspace, capture_workspace};

/// Actions the context menu can trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    ReopenLastClosed,
    Pin(TabId),
    Unpin(TabId),
    CloseOthers(TabId),
    CloseToRight(TabId),
    /// Save the current tab set under a name.
    SaveWorkspace(String),
    LoadWorkspace(WorkspaceId, RestoreMode),
    ToggleSplit(TabId, SplitOrientation),
}

/// One context menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub enabled: bool,
    pub action: MenuAction,
}

impl MenuItem {
    fn new(label: impl Into<String>, enabled: bool, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            enabled,
            action,
        }
    }
}

/// Build the context menu for a right-clicked tab.
pub fn build_menu(
    manager: &TabManager,
    workspaces: &WorkspaceManager,
    tab_id: TabId,
) -> Vec<MenuItem> {
    let Some(tab) = manager.get_tab(tab_id) else {
        return Vec::new();
    };
    let is_home = manager
        .home_index()
        .map(|idx| manager.tabs()[idx].id == tab_id)
        .unwrap_or(false);
    let tab_idx = manager
        .tabs()
        .iter()
        .position(|t| t.id == tab_id)
        .unwrap_or(0);
    let closable_others = manager
        .tabs()
        .iter()
        .any(|t| t.id != tab_id && !t.pinned);
    let closable_right = manager
        .tabs()
        .iter()
        .enumerate()
        .any(|(idx, t)| idx > tab_idx && !t.pinned);

    let mut items = Vec::new();

    if tab.pinned {
        // The home tab is permanently pinned
        items.push(MenuItem::new("Unpin tab", !is_home, MenuAction::Unpin(tab_id)));
    } else {
        items.push(MenuItem::new("Pin tab", true, MenuAction::Pin(tab_id)));
    }

    items.push(MenuItem::new(
        "Close other tabs",
        closable_others,
        MenuAction::CloseOthers(tab_id),
    ));
    items.push(MenuItem::new(
        "Close tabs to the right",
        closable_right,
        MenuAction::CloseToRight(tab_id),
    ));
    items.push(MenuItem::new(
        "Reopen last closed tab",
        !manager.closed_history().is_empty(),
        MenuAction::ReopenLastClosed,
    ));
    items.push(MenuItem::new(
        "Save workspace",
        true,
        MenuAction::SaveWorkspace(format!("Workspace {}", workspaces.len() + 1)),
    ));
    for workspace in workspaces.ordered() {
        items.push(MenuItem::new(
            format!("Load workspace: {}", workspace.name),
            true,
            MenuAction::LoadWorkspace(workspace.id, RestoreMode::Replace),
        ));
    }
    items.push(MenuItem::new(
        "Split right",
        true,
        MenuAction::ToggleSplit(tab_id, SplitOrientation::Vertical),
    ));
    items.push(MenuItem::new(
        "Split down",
        true,
        MenuAction::ToggleSplit(tab_id, SplitOrientation::Horizontal),
    ));

    items
}

/// Execute a chosen menu action.
pub fn apply_menu_action(
    manager: &mut TabManager,
    workspaces: &mut WorkspaceManager,
    action: MenuAction,
) {
    match action {
        MenuAction::ReopenLastClosed => {
            manager.reopen_last_closed();
        }
        MenuAction::Pin(id) => manager.pin_tab(id),
        MenuAction::Unpin(id) => manager.unpin_tab(id),
        MenuAction::CloseOthers(id) => manager.close_other_tabs(id),
        MenuAction::CloseToRight(id) => manager.close_tabs_to_right(id),
        MenuAction::SaveWorkspace(name) => {
            let workspace = capture_workspace(&name, manager);
            workspaces.add(workspace);
        }
        MenuAction::LoadWorkspace(id, mode) => {
            if let Some(workspace) = workspaces.get(&id) {
                apply_workspace(manager, workspace, mode);
            } else {
                log::debug!("Ignoring load of deleted workspace {}", id);
            }
        }
        MenuAction::ToggleSplit(id, orientation) => manager.toggle_split(id, orientation),
    }
}
