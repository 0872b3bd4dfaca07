//! Interaction layer: translates user gestures into state-machine actions.
//!
//! Rendering is out of scope; the host UI supplies tab geometry and input
//! events, and this module turns them into calls on [`TabManager`] (or on
//! the workspaces collection, for the context menu).
//!
//! ## Module layout
//!
//! - [`keys`]: keyboard shortcut table (close current, cycle, jump to N).
//! - [`drag_drop`]: drag-reorder controller with drop-target math.
//! - [`context_menu`]: right-click menu items and their dispatch.

pub mod context_menu;
pub mod drag_drop;
pub mod keys;

pub use context_menu::{MenuAction, MenuItem, build_menu};
pub use drag_drop::{DragController, TabSpan};
pub use keys::{Key, KeyCombo, StripCommand};

use crate::tab::{TabId, TabManager};

/// Pointer buttons the tab strip reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Activates the clicked tab.
    Primary,
    /// Closes the clicked tab; pinned tabs are immune.
    Middle,
}

/// Handle a pointer click on a tab.
pub fn handle_tab_click(manager: &mut TabManager, id: TabId, button: PointerButton) {
    match button {
        PointerButton::Primary => manager.set_active_tab(id),
        // close_tab already ignores pinned tabs and stale ids
        PointerButton::Middle => manager.close_tab(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkspaceConfig;

    #[test]
    fn primary_click_activates() {
        let mut mgr = TabManager::new(WorkspaceConfig::default());
        mgr.open_tab("/");
        let people = mgr.open_tab("/people");
        mgr.activate_index(1);

        handle_tab_click(&mut mgr, people, PointerButton::Primary);
        assert_eq!(mgr.active_tab_id(), Some(people));
    }

    #[test]
    fn middle_click_closes_but_pinned_survive() {
        let mut mgr = TabManager::new(WorkspaceConfig::default());
        let home = mgr.open_tab("/");
        let people = mgr.open_tab("/people");

        handle_tab_click(&mut mgr, home, PointerButton::Middle);
        assert_eq!(mgr.tab_count(), 2, "home is pinned");

        handle_tab_click(&mut mgr, people, PointerButton::Middle);
        assert_eq!(mgr.tab_count(), 1);
    }
}
