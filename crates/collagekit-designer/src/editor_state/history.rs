//! Undo/redo functionality for editor state.

use std::collections::BTreeSet;

use collagekit_core::{Breakpoint, Template};

/// Template and sync flags at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub template: Template,
    pub customised: BTreeSet<Breakpoint>,
}

/// One recorded change.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub name: String,
    pub before: Snapshot,
    pub after: Snapshot,
}

/// Bounded undo and redo stacks.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Records a change, discarding the redo stack and the oldest entry past the limit.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);
        self.redo_stack.clear();
        if self.undo_stack.len() > self.limit {
            self.undo_stack.remove(0);
        }
    }

    /// Moves the latest change onto the redo stack and returns the state before it.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(entry);
        self.redo_stack.last().map(|e| &e.before)
    }

    /// Moves the latest undone change back and returns the state after it.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(entry);
        self.undo_stack.last().map(|e| &e.after)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Name of the change `undo` would revert.
    pub fn undo_name(&self) -> Option<&str> {
        self.undo_stack.last().map(|e| e.name.as_str())
    }

    pub fn redo_name(&self) -> Option<&str> {
        self.redo_stack.last().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(super::DEFAULT_HISTORY_LIMIT)
    }
}
