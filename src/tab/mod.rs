//! Tab data model and state machine for the multi-tab workspace.
//!
//! This module provides the core tab infrastructure:
//! - `Tab`: one open workspace entry pointing at a navigational path
//! - `TabManager`: the state machine coordinating all open tabs
//! - `TabAction`: the closed set of transitions the manager applies
//! - `ClosedTabHistory`: bounded stack backing "reopen last closed tab"

pub mod history;
mod manager;

pub use history::ClosedTabHistory;
pub use manager::{OpenOptions, TabManager};

use crate::persistence::WorkspaceSnapshot;
use crate::routes::TabIcon;
use chrono::Utc;
use uuid::Uuid;

/// Unique identifier for a tab, stable for the tab's lifetime.
pub type TabId = Uuid;

/// Unique identifier for a tab group.
pub type GroupId = Uuid;

/// One open workspace entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub id: TabId,
    /// Navigational key identifying what the tab shows. At most one open tab
    /// per path exists at a time.
    pub path: String,
    /// Display title; the underlying screen may overwrite it once its record
    /// loads (except for pinned tabs).
    pub title: String,
    pub icon: TabIcon,
    /// Optional group label. Deleting a group clears this, never the tab.
    pub group_id: Option<GroupId>,
    /// Last known scroll offset, restored when the tab regains focus.
    pub scroll_position: f32,
    /// Unix milliseconds at open time.
    pub opened_at: i64,
    /// Unix milliseconds of the last activation; drives recency eviction.
    pub last_active_at: i64,
    /// A pinned tab cannot be closed, dragged, or have its title overwritten.
    /// The home tab is pinned at creation and cannot be unpinned.
    pub pinned: bool,
    /// Advisory unsaved-changes marker; does not block closing.
    pub is_dirty: bool,
}

impl Tab {
    /// Create a tab for `path` with explicit display metadata.
    pub fn new(path: &str, title: String, icon: TabIcon, pinned: bool) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            id: Uuid::new_v4(),
            path: path.to_string(),
            title,
            icon,
            group_id: None,
            scroll_position: 0.0,
            opened_at: now,
            last_active_at: now,
            pinned,
            is_dirty: false,
        }
    }

    /// Refresh the recency timestamp used by eviction.
    pub(crate) fn touch(&mut self) {
        self.last_active_at = Utc::now().timestamp_millis();
    }
}

/// A visual grouping label. Purely cosmetic; tabs outlive their group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    pub id: GroupId,
    /// RGB group color shown on member tabs.
    pub color: [u8; 3],
}

/// Lightweight record of a closed tab, enough to reopen it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedTabSnapshot {
    pub path: String,
    pub title: String,
    pub icon: TabIcon,
    /// Unix milliseconds at close time.
    pub closed_at: i64,
}

impl ClosedTabSnapshot {
    pub(crate) fn of(tab: &Tab) -> Self {
        Self {
            path: tab.path.clone(),
            title: tab.title.clone(),
            icon: tab.icon,
            closed_at: Utc::now().timestamp_millis(),
        }
    }
}

/// Orientation of the secondary split pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitOrientation {
    Horizontal,
    Vertical,
}

/// Descriptor of the secondary pane shown alongside the primary strip.
/// At most one split is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitView {
    pub anchor_tab_id: TabId,
    pub orientation: SplitOrientation,
}

/// The closed set of state transitions. Every variant is a pure
/// `(state, payload) -> state'` step; invalid target ids are no-ops because
/// router events and stale UI callbacks cannot guarantee the referenced tab
/// still exists.
#[derive(Debug, Clone, PartialEq)]
pub enum TabAction {
    /// Open `path`, or re-activate the existing tab for it.
    Open { path: String, background: bool },
    Close(TabId),
    CloseOthers(TabId),
    CloseToRight(TabId),
    CloseAll,
    SetActive(TabId),
    UpdateTitle(TabId, String),
    UpdateIcon(TabId, TabIcon),
    UpdateScroll(TabId, f32),
    /// Move the tab at `from` to `to`. Rejected when it would displace the
    /// home tab from index 0.
    Reorder { from: usize, to: usize },
    Pin(TabId),
    Unpin(TabId),
    SetDirty(TabId, bool),
    AssignGroup(TabId, Option<GroupId>),
    ReopenLastClosed,
    SetSplit { anchor: TabId, orientation: SplitOrientation },
    ToggleSplit { anchor: TabId, orientation: SplitOrientation },
    ClearSplit,
    /// Replace the entire state from a persisted snapshot.
    Hydrate(WorkspaceSnapshot),
}
