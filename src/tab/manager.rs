//! The tab state machine.
//!
//! `TabManager` owns the canonical in-memory model (open tabs, active tab,
//! groups, closed-tab history, split view) and applies every transition
//! through [`TabManager::dispatch`] or the equivalent named methods. The
//! manager never returns errors: actions targeting a tab that no longer
//! exists are silent no-ops, because router events and stale UI callbacks
//! race against closes.
//!
//! Invariants held after every transition:
//! - at most one open tab per path
//! - the home tab, when present, is pinned and sits at index 0
//! - `active_tab_id` is `None` only while no tabs are open
//! - the tab count stays at the ceiling by evicting the least-recently-active
//!   unpinned tab (navigation is never blocked, so an all-pinned strip may
//!   exceed the ceiling)

use super::{
    ClosedTabHistory, ClosedTabSnapshot, GroupId, SplitOrientation, SplitView, Tab, TabAction,
    TabGroup, TabId,
};
use crate::config::WorkspaceConfig;
use crate::persistence::WorkspaceSnapshot;
use crate::routes::{self, TabIcon};
use uuid::Uuid;

/// Options for [`TabManager::open_tab_with`].
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    /// Open without activating the new (or existing) tab.
    pub background: bool,
    /// Explicit title; falls back to the route resolver.
    pub title: Option<String>,
    /// Explicit icon; falls back to the route resolver.
    pub icon: Option<TabIcon>,
}

/// Coordinates all open tabs in a workspace.
#[derive(Debug)]
pub struct TabManager {
    config: WorkspaceConfig,
    /// All open tabs, in display order. Order is user-controllable.
    tabs: Vec<Tab>,
    active_tab_id: Option<TabId>,
    groups: Vec<TabGroup>,
    closed: ClosedTabHistory,
    split: Option<SplitView>,
}

impl TabManager {
    pub fn new(config: WorkspaceConfig) -> Self {
        let closed = ClosedTabHistory::new(config.closed_history_limit);
        Self {
            config,
            tabs: Vec::new(),
            active_tab_id: None,
            groups: Vec::new(),
            closed,
            split: None,
        }
    }

    /// Apply one state transition. The match is exhaustive over the closed
    /// action set; every arm delegates to the correspondingly named method.
    pub fn dispatch(&mut self, action: TabAction) {
        match action {
            TabAction::Open { path, background } => {
                self.open_tab_with(
                    &path,
                    OpenOptions {
                        background,
                        ..OpenOptions::default()
                    },
                );
            }
            TabAction::Close(id) => self.close_tab(id),
            TabAction::CloseOthers(id) => self.close_other_tabs(id),
            TabAction::CloseToRight(id) => self.close_tabs_to_right(id),
            TabAction::CloseAll => self.close_all_tabs(),
            TabAction::SetActive(id) => self.set_active_tab(id),
            TabAction::UpdateTitle(id, title) => self.update_tab_title(id, &title),
            TabAction::UpdateIcon(id, icon) => self.update_tab_icon(id, icon),
            TabAction::UpdateScroll(id, position) => self.update_scroll_position(id, position),
            TabAction::Reorder { from, to } => {
                self.reorder_tabs(from, to);
            }
            TabAction::Pin(id) => self.pin_tab(id),
            TabAction::Unpin(id) => self.unpin_tab(id),
            TabAction::SetDirty(id, dirty) => self.set_dirty(id, dirty),
            TabAction::AssignGroup(id, group) => self.assign_to_group(id, group),
            TabAction::ReopenLastClosed => {
                self.reopen_last_closed();
            }
            TabAction::SetSplit {
                anchor,
                orientation,
            } => self.set_split(anchor, orientation),
            TabAction::ToggleSplit {
                anchor,
                orientation,
            } => self.toggle_split(anchor, orientation),
            TabAction::ClearSplit => self.clear_split(),
            TabAction::Hydrate(snapshot) => self.hydrate(snapshot),
        }
    }

    // --- open / close -------------------------------------------------------

    /// Open `path` in the foreground, creating or re-activating its tab.
    pub fn open_tab(&mut self, path: &str) -> TabId {
        self.open_tab_with(path, OpenOptions::default())
    }

    /// Open `path`, or re-activate the existing tab for it. Display metadata
    /// falls back to the route resolver when not supplied.
    pub fn open_tab_with(&mut self, path: &str, options: OpenOptions) -> TabId {
        if let Some(existing) = self.tabs.iter_mut().find(|t| t.path == path) {
            existing.touch();
            let id = existing.id;
            if !options.background {
                self.active_tab_id = Some(id);
            }
            log::debug!("Re-activated existing tab {} for {}", id, path);
            return id;
        }

        self.evict_for_new_tab();

        let title = options
            .title
            .unwrap_or_else(|| routes::title_for(path));
        let icon = options.icon.unwrap_or_else(|| routes::icon_for(path));
        let pinned = path == self.config.home_path;
        let tab = Tab::new(path, title, icon, pinned);
        let id = tab.id;

        // The home tab always occupies index 0.
        if pinned {
            self.tabs.insert(0, tab);
        } else {
            self.tabs.push(tab);
        }

        if !options.background || self.active_tab_id.is_none() {
            self.active_tab_id = Some(id);
        }

        log::info!("Opened tab {} for {} (total: {})", id, path, self.tabs.len());
        id
    }

    /// Close a tab. Pinned tabs and unknown ids are no-ops.
    pub fn close_tab(&mut self, id: TabId) {
        let Some(idx) = self.tabs.iter().position(|t| t.id == id) else {
            return;
        };
        if self.tabs[idx].pinned {
            log::debug!("Ignoring close of pinned tab {}", id);
            return;
        }

        let tab = self.remove_at(idx);
        self.closed.push(ClosedTabSnapshot::of(&tab));
        log::info!(
            "Closed tab {} ({}) (remaining: {})",
            id,
            tab.path,
            self.tabs.len()
        );
    }

    /// Close every closable tab except the target, then activate the target.
    /// Pinned tabs (the home tab included) survive.
    pub fn close_other_tabs(&mut self, id: TabId) {
        if !self.tabs.iter().any(|t| t.id == id) {
            return;
        }

        let mut kept = Vec::new();
        let mut removed = Vec::new();
        for tab in self.tabs.drain(..) {
            if tab.id == id || tab.pinned {
                kept.push(tab);
            } else {
                removed.push(tab);
            }
        }
        self.tabs = kept;
        for tab in &removed {
            self.closed.push(ClosedTabSnapshot::of(tab));
        }
        self.active_tab_id = Some(id);
        self.prune_split();
        log::info!("Closed {} other tabs, kept {}", removed.len(), id);
    }

    /// Close every closable tab after the target's position, keeping pinned
    /// tabs wherever they sit. If the active tab was removed, the target
    /// becomes active.
    pub fn close_tabs_to_right(&mut self, id: TabId) {
        let Some(target_idx) = self.tabs.iter().position(|t| t.id == id) else {
            return;
        };

        let mut kept = Vec::new();
        let mut removed = Vec::new();
        for (idx, tab) in self.tabs.drain(..).enumerate() {
            if idx <= target_idx || tab.pinned {
                kept.push(tab);
            } else {
                removed.push(tab);
            }
        }
        self.tabs = kept;
        for tab in &removed {
            self.closed.push(ClosedTabSnapshot::of(tab));
        }

        let active_survived = self
            .active_tab_id
            .map(|active| self.tabs.iter().any(|t| t.id == active))
            .unwrap_or(false);
        if !active_survived {
            self.active_tab_id = Some(id);
        }
        self.prune_split();
        log::info!("Closed {} tabs right of {}", removed.len(), id);
    }

    /// Close every closable tab. Pinned tabs survive; the home tab (when
    /// present) becomes active, otherwise the first survivor, otherwise the
    /// strip empties out.
    pub fn close_all_tabs(&mut self) {
        let mut kept = Vec::new();
        let mut removed = Vec::new();
        for tab in self.tabs.drain(..) {
            if tab.pinned {
                kept.push(tab);
            } else {
                removed.push(tab);
            }
        }
        self.tabs = kept;
        for tab in &removed {
            self.closed.push(ClosedTabSnapshot::of(tab));
        }
        self.active_tab_id = self.tabs.first().map(|t| t.id);
        self.prune_split();
        log::info!(
            "Closed all tabs ({} removed, {} pinned kept)",
            removed.len(),
            self.tabs.len()
        );
    }

    /// Reopen the most recently closed tab. A new id is assigned; if a tab
    /// with the recorded path is already open, it is activated instead.
    pub fn reopen_last_closed(&mut self) -> Option<TabId> {
        let snapshot = self.closed.pop()?;
        let id = self.open_tab_with(
            &snapshot.path,
            OpenOptions {
                background: false,
                title: Some(snapshot.title),
                icon: Some(snapshot.icon),
            },
        );
        Some(id)
    }

    // --- activation ---------------------------------------------------------

    /// Activate a tab and refresh its recency timestamp. Unknown ids are
    /// no-ops.
    pub fn set_active_tab(&mut self, id: TabId) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.touch();
            self.active_tab_id = Some(id);
            log::debug!("Switched to tab {}", id);
        }
    }

    /// Activate the next tab in strip order (wraps around).
    pub fn next_tab(&mut self) {
        self.cycle_tab(1);
    }

    /// Activate the previous tab in strip order (wraps around).
    pub fn prev_tab(&mut self) {
        self.cycle_tab(-1);
    }

    fn cycle_tab(&mut self, direction: isize) {
        if self.tabs.len() <= 1 {
            return;
        }
        let Some(active) = self.active_tab_id else {
            return;
        };
        let current = self
            .tabs
            .iter()
            .position(|t| t.id == active)
            .unwrap_or(0);
        let len = self.tabs.len() as isize;
        let next = (current as isize + direction).rem_euclid(len) as usize;
        let id = self.tabs[next].id;
        self.set_active_tab(id);
    }

    /// Activate the tab at a 1-based strip position (jump-to-tab-N shortcut).
    pub fn activate_index(&mut self, index: usize) {
        if index > 0 && index <= self.tabs.len() {
            let id = self.tabs[index - 1].id;
            self.set_active_tab(id);
        }
    }

    // --- display metadata ---------------------------------------------------

    /// Overwrite a tab's title. Ignored for pinned tabs, whose titles are
    /// not overwritable.
    pub fn update_tab_title(&mut self, id: TabId, title: &str) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            if tab.pinned {
                log::debug!("Ignoring title update for pinned tab {}", id);
                return;
            }
            tab.title = title.to_string();
        }
    }

    /// Rename the active tab. This is how underlying screens push a record's
    /// name into the strip once their data loads.
    pub fn rename_active_tab(&mut self, title: &str) {
        if let Some(id) = self.active_tab_id {
            self.update_tab_title(id, title);
        }
    }

    /// Overwrite a tab's icon. Allowed for pinned tabs too.
    pub fn update_tab_icon(&mut self, id: TabId, icon: TabIcon) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.icon = icon;
        }
    }

    /// Record the last known scroll offset, restored when the tab regains
    /// focus. Always allowed, pinned tabs included.
    pub fn update_scroll_position(&mut self, id: TabId, position: f32) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.scroll_position = position;
        }
    }

    /// Advisory unsaved-changes marker. Does not block closing.
    pub fn set_dirty(&mut self, id: TabId, dirty: bool) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.is_dirty = dirty;
        }
    }

    // --- ordering -----------------------------------------------------------

    /// Move the tab at `from` to `to`. Rejected when either index is out of
    /// range or when the move would displace the home tab from index 0. With
    /// no home tab open, index 0 participates in reorders normally.
    pub fn reorder_tabs(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tabs.len() || to >= self.tabs.len() || from == to {
            return false;
        }
        if self.home_index() == Some(0) && (from == 0 || to == 0) {
            log::debug!("Rejected reorder {} -> {}: home tab stays at index 0", from, to);
            return false;
        }
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        log::debug!("Moved tab from index {} to {}", from, to);
        true
    }

    // --- pinning ------------------------------------------------------------

    pub fn pin_tab(&mut self, id: TabId) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.pinned = true;
        }
    }

    /// Unpin a tab. The home tab is permanently pinned and ignores this.
    pub fn unpin_tab(&mut self, id: TabId) {
        let home = self.config.home_path.clone();
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            if tab.path == home {
                log::debug!("Ignoring unpin of home tab {}", id);
                return;
            }
            tab.pinned = false;
        }
    }

    // --- groups -------------------------------------------------------------

    /// Create a group label with the given color.
    pub fn create_group(&mut self, color: [u8; 3]) -> GroupId {
        let id = Uuid::new_v4();
        self.groups.push(TabGroup { id, color });
        id
    }

    /// Delete a group. Member tabs outlive it; their references are cleared.
    pub fn delete_group(&mut self, id: GroupId) {
        let before = self.groups.len();
        self.groups.retain(|g| g.id != id);
        if self.groups.len() != before {
            for tab in &mut self.tabs {
                if tab.group_id == Some(id) {
                    tab.group_id = None;
                }
            }
        }
    }

    /// Assign a tab to a group, or clear its membership with `None`.
    /// Unknown tab or group ids are no-ops.
    pub fn assign_to_group(&mut self, id: TabId, group: Option<GroupId>) {
        if let Some(group_id) = group {
            if !self.groups.iter().any(|g| g.id == group_id) {
                return;
            }
        }
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.group_id = group;
        }
    }

    // --- split view ---------------------------------------------------------

    /// Show a secondary pane anchored to `anchor`. Replaces any existing
    /// split; unknown anchors are no-ops.
    pub fn set_split(&mut self, anchor: TabId, orientation: SplitOrientation) {
        if !self.tabs.iter().any(|t| t.id == anchor) {
            return;
        }
        self.split = Some(SplitView {
            anchor_tab_id: anchor,
            orientation,
        });
    }

    /// Toggle the split: clears it when already anchored the same way,
    /// otherwise (re)establishes it.
    pub fn toggle_split(&mut self, anchor: TabId, orientation: SplitOrientation) {
        let current = SplitView {
            anchor_tab_id: anchor,
            orientation,
        };
        if self.split == Some(current) {
            self.split = None;
        } else {
            self.set_split(anchor, orientation);
        }
    }

    pub fn clear_split(&mut self) {
        self.split = None;
    }

    // --- hydration ----------------------------------------------------------

    /// Replace the entire state from a persisted snapshot. Duplicate paths in
    /// stale data are dropped, `last_active_at` is reconstituted from
    /// `opened_at` when absent, and the home tab's title and icon are forced
    /// back to their canonical resolver values.
    pub fn hydrate(&mut self, snapshot: WorkspaceSnapshot) {
        let mut tabs: Vec<Tab> = Vec::with_capacity(snapshot.tabs.len());
        for record in snapshot.tabs {
            if tabs.iter().any(|t| t.path == record.path) {
                log::warn!("Discarding duplicate persisted tab for {}", record.path);
                continue;
            }
            let pinned = record.path == self.config.home_path;
            tabs.push(Tab {
                id: record.id,
                title: if pinned {
                    routes::title_for(&record.path)
                } else {
                    record.title
                },
                icon: if pinned {
                    routes::icon_for(&record.path)
                } else {
                    record.icon
                },
                group_id: None,
                scroll_position: record.scroll_position,
                opened_at: record.opened_at,
                last_active_at: record.last_active_at.unwrap_or(record.opened_at),
                pinned,
                is_dirty: false,
                path: record.path,
            });
        }

        if let Some(home_idx) = tabs.iter().position(|t| t.path == self.config.home_path) {
            if home_idx != 0 {
                let home = tabs.remove(home_idx);
                tabs.insert(0, home);
            }
        }

        self.active_tab_id = snapshot
            .active_tab_id
            .filter(|id| tabs.iter().any(|t| t.id == *id))
            .or_else(|| tabs.first().map(|t| t.id));
        self.tabs = tabs;
        self.groups.clear();
        self.split = None;
        self.closed.clear();
        log::info!("Hydrated {} tabs from persisted snapshot", self.tabs.len());
    }

    // --- accessors ----------------------------------------------------------

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// All open tabs, in display order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active_tab_id
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .and_then(|id| self.tabs.iter().find(|t| t.id == id))
    }

    pub fn get_tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn get_tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn get_tab_by_path(&self, path: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.path == path)
    }

    pub fn groups(&self) -> &[TabGroup] {
        &self.groups
    }

    pub fn split(&self) -> Option<SplitView> {
        self.split
    }

    pub fn closed_history(&self) -> &ClosedTabHistory {
        &self.closed
    }

    /// Index of the home tab, if open.
    pub fn home_index(&self) -> Option<usize> {
        self.tabs
            .iter()
            .position(|t| t.path == self.config.home_path)
    }

    // --- internals ----------------------------------------------------------

    /// Make room for one more tab. Evicts the least-recently-active unpinned
    /// tab when the ceiling is reached; with no candidate the open proceeds
    /// past the ceiling rather than blocking navigation.
    fn evict_for_new_tab(&mut self) {
        while self.tabs.len() >= self.config.max_tabs {
            let candidate = self
                .tabs
                .iter()
                .enumerate()
                .filter(|(_, t)| !t.pinned)
                .min_by_key(|(_, t)| t.last_active_at)
                .map(|(idx, _)| idx);
            match candidate {
                Some(idx) => {
                    let tab = self.remove_at(idx);
                    log::info!(
                        "Evicted least-recently-active tab {} ({})",
                        tab.id,
                        tab.path
                    );
                    self.closed.push(ClosedTabSnapshot::of(&tab));
                }
                None => {
                    log::warn!(
                        "Tab ceiling {} reached with no evictable tab; opening anyway",
                        self.config.max_tabs
                    );
                    break;
                }
            }
        }
    }

    /// Remove the tab at `idx`, clearing a split anchored on it and selecting
    /// a replacement active tab: same index, then last, then none.
    fn remove_at(&mut self, idx: usize) -> Tab {
        let tab = self.tabs.remove(idx);
        if let Some(split) = self.split {
            if split.anchor_tab_id == tab.id {
                self.split = None;
            }
        }
        if self.active_tab_id == Some(tab.id) {
            self.active_tab_id = if self.tabs.is_empty() {
                None
            } else {
                let new_idx = idx.min(self.tabs.len() - 1);
                Some(self.tabs[new_idx].id)
            };
        }
        tab
    }

    /// Drop the split when its anchor no longer exists.
    fn prune_split(&mut self) {
        if let Some(split) = self.split {
            if !self.tabs.iter().any(|t| t.id == split.anchor_tab_id) {
                self.split = None;
            }
        }
    }
}
