//! Router synchronizer: keeps the navigational address and the active tab
//! mutually consistent without feedback loops.
//!
//! Two explicit reconciliation passes replace the original's implicit
//! lifecycle hooks:
//!
//! - [`RouterSync::sync_from_address`] runs on every external address change
//!   (and once at startup): it opens a tab for an unknown path, or absorbs
//!   the navigation by activating the existing tab.
//! - [`RouterSync::sync_to_address`] runs after every state transition: when
//!   the active tab's path differs from the current address it issues a
//!   navigation. The very first pass is suppressed so the page does not
//!   re-navigate to the address it already loaded with.

use crate::tab::TabManager;

/// Current-address accessor and navigator. Implemented by the host shell;
/// `navigate` must not trigger a full reload.
pub trait Navigator {
    /// The current navigational path, if any.
    fn current_path(&self) -> Option<String>;
    /// Request a navigation to `path`.
    fn navigate(&mut self, path: &str);
}

/// Bidirectional glue between the tab state machine and the address bar.
#[derive(Debug, Default)]
pub struct RouterSync {
    initial_pass_done: bool,
}

impl RouterSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Startup rule: with zero tabs and a current address, open a tab for it.
    /// This guarantees at least one tab exists once the system is running,
    /// the home route included.
    pub fn initialize(&mut self, manager: &mut TabManager, navigator: &impl Navigator) {
        if manager.tab_count() == 0 {
            if let Some(path) = navigator.current_path() {
                log::info!("Deriving initial tab from current address {}", path);
                manager.open_tab(&path);
            }
        }
    }

    /// Absorb an external address change into the tab model: open a tab for
    /// a path with no matching tab, or activate the existing one. Never
    /// duplicates tabs.
    pub fn sync_from_address(&mut self, manager: &mut TabManager, path: &str) {
        match manager.get_tab_by_path(path).map(|t| t.id) {
            None => {
                log::debug!("External navigation to {}: opening tab", path);
                manager.open_tab(path);
            }
            Some(id) if manager.active_tab_id() != Some(id) => {
                log::debug!("External navigation to {}: activating existing tab", path);
                manager.set_active_tab(id);
            }
            Some(_) => {}
        }
    }

    /// Push the active tab's path to the address bar when they differ (the
    /// user switched tabs in the UI). Suppressed on the very first pass.
    pub fn sync_to_address(&mut self, manager: &TabManager, navigator: &mut dyn Navigator) {
        if !self.initial_pass_done {
            self.initial_pass_done = true;
            return;
        }
        let Some(tab) = manager.active_tab() else {
            return;
        };
        if navigator.current_path().as_deref() != Some(tab.path.as_str()) {
            log::debug!("Active tab changed: navigating to {}", tab.path);
            navigator.navigate(&tab.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkspaceConfig;

    /// Address bar stand-in recording issued navigations.
    #[derive(Debug, Default)]
    struct FakeNavigator {
        path: Option<String>,
        navigations: Vec<String>,
    }

    impl FakeNavigator {
        fn at(path: &str) -> Self {
            Self {
                path: Some(path.to_string()),
                navigations: Vec::new(),
            }
        }
    }

    impl Navigator for FakeNavigator {
        fn current_path(&self) -> Option<String> {
            self.path.clone()
        }

        fn navigate(&mut self, path: &str) {
            self.path = Some(path.to_string());
            self.navigations.push(path.to_string());
        }
    }

    fn manager() -> TabManager {
        TabManager::new(WorkspaceConfig::default())
    }

    #[test]
    fn startup_derives_tab_from_address() {
        let mut mgr = manager();
        let nav = FakeNavigator::at("/people/7");
        let mut sync = RouterSync::new();

        sync.initialize(&mut mgr, &nav);
        assert_eq!(mgr.tab_count(), 1);
        assert_eq!(mgr.active_tab().unwrap().path, "/people/7");
    }

    #[test]
    fn startup_with_existing_tabs_is_a_no_op() {
        let mut mgr = manager();
        mgr.open_tab("/");
        let nav = FakeNavigator::at("/people");
        let mut sync = RouterSync::new();

        sync.initialize(&mut mgr, &nav);
        assert_eq!(mgr.tab_count(), 1);
    }

    #[test]
    fn unknown_address_opens_a_tab() {
        let mut mgr = manager();
        mgr.open_tab("/");
        let mut sync = RouterSync::new();

        sync.sync_from_address(&mut mgr, "/vehicles/3");
        assert_eq!(mgr.tab_count(), 2);
        assert_eq!(mgr.active_tab().unwrap().path, "/vehicles/3");
    }

    #[test]
    fn known_address_activates_without_duplicating() {
        let mut mgr = manager();
        mgr.open_tab("/");
        mgr.open_tab("/people");
        let home = mgr.tabs()[0].id;
        assert_ne!(mgr.active_tab_id(), Some(home));

        let mut sync = RouterSync::new();
        sync.sync_from_address(&mut mgr, "/");
        assert_eq!(mgr.tab_count(), 2);
        assert_eq!(mgr.active_tab_id(), Some(home));
    }

    #[test]
    fn first_state_pass_is_suppressed() {
        let mut mgr = manager();
        mgr.open_tab("/people");
        let mut nav = FakeNavigator::at("/");
        let mut sync = RouterSync::new();

        sync.sync_to_address(&mgr, &mut nav);
        assert!(
            nav.navigations.is_empty(),
            "must not re-navigate on the first render"
        );

        sync.sync_to_address(&mgr, &mut nav);
        assert_eq!(nav.navigations, vec!["/people"]);
    }

    #[test]
    fn matching_address_issues_no_navigation() {
        let mut mgr = manager();
        mgr.open_tab("/people");
        let mut nav = FakeNavigator::at("/people");
        let mut sync = RouterSync::new();

        sync.sync_to_address(&mgr, &mut nav); // suppressed first pass
        sync.sync_to_address(&mgr, &mut nav);
        assert!(nav.navigations.is_empty());
    }

    #[test]
    fn no_feedback_loop_between_passes() {
        let mut mgr = manager();
        let mut nav = FakeNavigator::at("/");
        let mut sync = RouterSync::new();

        sync.initialize(&mut mgr, &nav);
        sync.sync_to_address(&mgr, &mut nav); // suppressed

        // User switches tabs in the UI.
        mgr.open_tab("/alarms");
        sync.sync_to_address(&mgr, &mut nav);
        assert_eq!(nav.navigations, vec!["/alarms"]);

        // The resulting address-change callback must settle, not re-open.
        let current = nav.current_path().unwrap();
        sync.sync_from_address(&mut mgr, &current);
        sync.sync_to_address(&mgr, &mut nav);
        assert_eq!(nav.navigations.len(), 1, "no further navigation issued");
        assert_eq!(mgr.tab_count(), 2);
    }
}
