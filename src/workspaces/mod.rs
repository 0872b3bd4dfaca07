//! Named saved workspaces: capture a tab set under a user-assigned name and
//! restore it later.
//!
//! A saved workspace has a lifetime independent of the live tab set —
//! loading one replaces or merges into the current state and never mutates
//! the stored copy.

pub mod capture;
pub mod restore;
pub mod storage;

pub use capture::capture_workspace;
pub use restore::{RestoreMode, apply_workspace};

use crate::routes::TabIcon;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a saved workspace.
pub type WorkspaceId = Uuid;

/// One tab inside a saved workspace, in saved order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceTab {
    pub path: String,
    pub title: String,
    #[serde(default)]
    pub icon: TabIcon,
}

/// A named snapshot of a tab set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    /// Unix milliseconds at capture time.
    pub saved_at: i64,
    pub tabs: Vec<WorkspaceTab>,
}

/// Collection of saved workspaces, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceManager {
    workspaces: Vec<Workspace>,
}

impl WorkspaceManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_workspaces(workspaces: Vec<Workspace>) -> Self {
        Self { workspaces }
    }

    pub fn add(&mut self, workspace: Workspace) {
        log::info!(
            "Saved workspace '{}' ({} tabs)",
            workspace.name,
            workspace.tabs.len()
        );
        self.workspaces.push(workspace);
    }

    /// Delete a workspace, returning it when found.
    pub fn remove(&mut self, id: &WorkspaceId) -> Option<Workspace> {
        let idx = self.workspaces.iter().position(|w| w.id == *id)?;
        Some(self.workspaces.remove(idx))
    }

    pub fn get(&self, id: &WorkspaceId) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.id == *id)
    }

    /// Case-insensitive name lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&Workspace> {
        self.workspaces
            .iter()
            .find(|w| w.name.eq_ignore_ascii_case(name))
    }

    pub fn rename(&mut self, id: &WorkspaceId, name: &str) {
        if let Some(workspace) = self.workspaces.iter_mut().find(|w| w.id == *id) {
            workspace.name = name.to_string();
        }
    }

    /// All workspaces, in insertion order.
    pub fn ordered(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }
}
