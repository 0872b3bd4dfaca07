//! Load a saved workspace into the live tab state.

use super::Workspace;
use crate::tab::{OpenOptions, TabManager};

/// How a loaded workspace interacts with the current tab set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreMode {
    /// Close the current closable tabs first, then open the saved set.
    Replace,
    /// Open the saved tabs alongside whatever is already open. Existing
    /// tabs for the same paths are kept, never duplicated.
    Merge,
}

/// Apply a saved workspace to the live state. The stored workspace itself is
/// never mutated.
///
/// Tabs open in saved order; the first saved tab becomes active under
/// `Replace`, while `Merge` leaves the current active tab alone.
pub fn apply_workspace(manager: &mut TabManager, workspace: &Workspace, mode: RestoreMode) {
    log::info!(
        "Loading workspace '{}' ({} tabs, {:?})",
        workspace.name,
        workspace.tabs.len(),
        mode
    );

    if mode == RestoreMode::Replace {
        manager.close_all_tabs();
    }

    let mut first_opened = None;
    for tab in &workspace.tabs {
        let id = manager.open_tab_with(
            &tab.path,
            OpenOptions {
                background: true,
                title: Some(tab.title.clone()),
                icon: Some(tab.icon),
            },
        );
        first_opened.get_or_insert(id);
    }

    if mode == RestoreMode::Replace {
        if let Some(id) = first_opened {
            manager.set_active_tab(id);
        }
    }
}
