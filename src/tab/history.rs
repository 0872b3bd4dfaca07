//! Bounded last-in-first-out stack of recently closed tabs.

use super::ClosedTabSnapshot;

/// Recently closed tab snapshots, newest last. When the limit is reached the
/// oldest entry drops silently.
#[derive(Debug, Clone, Default)]
pub struct ClosedTabHistory {
    entries: Vec<ClosedTabSnapshot>,
    limit: usize,
}

impl ClosedTabHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    pub fn push(&mut self, snapshot: ClosedTabSnapshot) {
        self.entries.push(snapshot);
        while self.entries.len() > self.limit {
            self.entries.remove(0);
        }
    }

    /// Pop the most recently closed entry.
    pub fn pop(&mut self) -> Option<ClosedTabSnapshot> {
        self.entries.pop()
    }

    /// Peek at the most recently closed entry without removing it.
    pub fn last(&self) -> Option<&ClosedTabSnapshot> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
