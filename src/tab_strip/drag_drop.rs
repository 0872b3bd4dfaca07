//! Drag-and-drop reordering for the tab strip.
//!
//! The controller tracks one drag at a time: the host UI reports the tab
//! layout (one span per tab, in strip order) and pointer positions, and the
//! controller computes the insertion point, suppresses no-op drops, and
//! converts the insertion index into the effective move on release.
//!
//! Dragging is disabled for pinned tabs, and while the home tab occupies
//! index 0 no drop may land there — derived from the home-at-index-0
//! invariant, not from a hardcoded index.

use crate::tab::{TabId, TabManager};

/// Horizontal extent of one rendered tab, in strip order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabSpan {
    pub id: TabId,
    pub start: f32,
    pub end: f32,
}

impl TabSpan {
    fn center(&self) -> f32 {
        (self.start + self.end) / 2.0
    }
}

/// State of an in-progress drag.
#[derive(Debug, Default)]
pub struct DragController {
    dragging: Option<TabId>,
    drop_target: Option<usize>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging a tab. Pinned tabs (the home tab included) and stale
    /// ids refuse the drag.
    pub fn begin_drag(&mut self, manager: &TabManager, id: TabId) -> bool {
        match manager.get_tab(id) {
            Some(tab) if !tab.pinned => {
                self.dragging = Some(id);
                self.drop_target = None;
                true
            }
            _ => false,
        }
    }

    /// Recompute the insertion point from the pointer position. Call on
    /// every pointer move while dragging.
    pub fn update(&mut self, manager: &TabManager, spans: &[TabSpan], pointer_x: f32) {
        let Some(dragging_id) = self.dragging else {
            return;
        };

        // Insertion index: before the first tab whose center is right of the
        // pointer, after the last tab otherwise.
        let mut insert_index = spans.len();
        for (idx, span) in spans.iter().enumerate() {
            if pointer_x < span.center() {
                insert_index = idx;
                break;
            }
        }

        // Nothing may displace the home tab from index 0.
        if manager.home_index() == Some(0) && insert_index == 0 {
            insert_index = 1;
        }

        // Dropping a tab onto its own slot is a no-op.
        let source = spans.iter().position(|s| s.id == dragging_id);
        let is_noop = source.is_some_and(|src| insert_index == src || insert_index == src + 1);

        self.drop_target = if is_noop { None } else { Some(insert_index) };
    }

    /// Release the drag, performing the reorder when a valid target exists.
    /// Returns true when the strip order changed.
    pub fn drop(&mut self, manager: &mut TabManager) -> bool {
        let dragging_id = self.dragging.take();
        let insert_index = self.drop_target.take();

        let (Some(id), Some(insert_idx)) = (dragging_id, insert_index) else {
            return false;
        };
        let Some(source_idx) = manager.tabs().iter().position(|t| t.id == id) else {
            return false;
        };

        // Convert insertion index to target index accounting for removal.
        let effective_target = if insert_idx > source_idx {
            insert_idx - 1
        } else {
            insert_idx
        };
        manager.reorder_tabs(source_idx, effective_target)
    }

    /// Abandon the drag without reordering (Escape, focus loss).
    pub fn cancel(&mut self) {
        self.dragging = None;
        self.drop_target = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    pub fn drop_target(&self) -> Option<usize> {
        self.drop_target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkspaceConfig;

    fn manager_with(paths: &[&str]) -> TabManager {
        let mut mgr = TabManager::new(WorkspaceConfig::default());
        for path in paths {
            mgr.open_tab(path);
        }
        mgr
    }

    /// 100px-wide tabs laid out left to right, matching manager order.
    fn spans_for(mgr: &TabManager) -> Vec<TabSpan> {
        mgr.tabs()
            .iter()
            .enumerate()
            .map(|(i, t)| TabSpan {
                id: t.id,
                start: i as f32 * 100.0,
                end: (i + 1) as f32 * 100.0,
            })
            .collect()
    }

    fn paths_of(mgr: &TabManager) -> Vec<&str> {
        mgr.tabs().iter().map(|t| t.path.as_str()).collect()
    }

    #[test]
    fn drag_moves_tab_right() {
        let mut mgr = manager_with(&["/", "/a", "/b", "/c"]);
        let a = mgr.get_tab_by_path("/a").unwrap().id;
        let spans = spans_for(&mgr);

        let mut drag = DragController::new();
        assert!(drag.begin_drag(&mgr, a));
        // Pointer past /c's center: insert after the last tab
        drag.update(&mgr, &spans, 390.0);
        assert!(drag.drop(&mut mgr));
        assert_eq!(paths_of(&mgr), vec!["/", "/b", "/c", "/a"]);
    }

    #[test]
    fn drag_moves_tab_left() {
        let mut mgr = manager_with(&["/", "/a", "/b", "/c"]);
        let c = mgr.get_tab_by_path("/c").unwrap().id;
        let spans = spans_for(&mgr);

        let mut drag = DragController::new();
        assert!(drag.begin_drag(&mgr, c));
        // Pointer over /a's left half: insert before /a
        drag.update(&mgr, &spans, 110.0);
        assert!(drag.drop(&mut mgr));
        assert_eq!(paths_of(&mgr), vec!["/", "/c", "/a", "/b"]);
    }

    #[test]
    fn dropping_on_own_slot_is_suppressed() {
        let mut mgr = manager_with(&["/", "/a", "/b"]);
        let a = mgr.get_tab_by_path("/a").unwrap().id;
        let spans = spans_for(&mgr);

        let mut drag = DragController::new();
        drag.begin_drag(&mgr, a);
        drag.update(&mgr, &spans, 150.0);
        assert_eq!(drag.drop_target(), None);
        assert!(!drag.drop(&mut mgr));
        assert_eq!(paths_of(&mgr), vec!["/", "/a", "/b"]);
    }

    #[test]
    fn home_tab_refuses_to_drag() {
        let mgr = manager_with(&["/", "/a"]);
        let home = mgr.tabs()[0].id;

        let mut drag = DragController::new();
        assert!(!drag.begin_drag(&mgr, home));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn drops_cannot_land_on_home_slot() {
        let mut mgr = manager_with(&["/", "/a", "/b"]);
        let b = mgr.get_tab_by_path("/b").unwrap().id;
        let spans = spans_for(&mgr);

        let mut drag = DragController::new();
        drag.begin_drag(&mgr, b);
        // Pointer left of home's center: insertion clamps to index 1
        drag.update(&mgr, &spans, 10.0);
        assert_eq!(drag.drop_target(), Some(1));
        assert!(drag.drop(&mut mgr));
        assert_eq!(paths_of(&mgr), vec!["/", "/b", "/a"]);
    }

    #[test]
    fn leftmost_slot_is_reachable_without_home() {
        let mut mgr = manager_with(&["/a", "/b", "/c"]);
        let c = mgr.get_tab_by_path("/c").unwrap().id;
        let spans = spans_for(&mgr);

        let mut drag = DragController::new();
        drag.begin_drag(&mgr, c);
        drag.update(&mgr, &spans, 0.0);
        assert!(drag.drop(&mut mgr));
        assert_eq!(paths_of(&mgr), vec!["/c", "/a", "/b"]);
    }

    #[test]
    fn cancel_leaves_order_untouched() {
        let mut mgr = manager_with(&["/", "/a", "/b"]);
        let a = mgr.get_tab_by_path("/a").unwrap().id;
        let spans = spans_for(&mgr);

        let mut drag = DragController::new();
        drag.begin_drag(&mgr, a);
        drag.update(&mgr, &spans, 250.0);
        drag.cancel();
        assert!(!drag.drop(&mut mgr));
        assert_eq!(paths_of(&mgr), vec!["/", "/a", "/b"]);
    }
}
