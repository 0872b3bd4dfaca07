//! Workspace configuration.
//!
//! Plain settings struct threaded into the tab state machine at construction
//! time. There is no ambient global configuration; the host application owns
//! one `WorkspaceConfig` per workspace manager instance.

use std::time::Duration;

/// Configuration for a tab workspace manager.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceConfig {
    /// Ceiling on simultaneously open tabs. Opening past the ceiling evicts
    /// the least-recently-active unpinned tab. The ceiling binds only while
    /// an eviction candidate exists; navigation is never blocked.
    pub max_tabs: usize,
    /// How many closed-tab snapshots to keep for "reopen last closed".
    /// Oldest entries drop silently once the limit is reached.
    pub closed_history_limit: usize,
    /// Quiet interval before a scheduled durable snapshot is written.
    /// Every new state change resets the timer (last write wins).
    pub persist_debounce: Duration,
    /// The home/root path. A tab on this path is implicitly and permanently
    /// pinned and always occupies index 0.
    pub home_path: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            max_tabs: 12,
            closed_history_limit: 10,
            persist_debounce: Duration::from_millis(500),
            home_path: "/".to_string(),
        }
    }
}

impl WorkspaceConfig {
    /// Convenience constructor used heavily by tests: defaults with a
    /// specific tab ceiling.
    pub fn with_max_tabs(max_tabs: usize) -> Self {
        Self {
            max_tabs,
            ..Self::default()
        }
    }
}
