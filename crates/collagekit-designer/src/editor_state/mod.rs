//! Editor state manager for UI integration.
//! Holds the authoritative template and routes every layout change through one
//! place, which keeps untouched breakpoints in sync and records history.
//!
//! This module is split into submodules:
//! - `history`: Undo/redo functionality
//! - `items`: Item creation, deletion and property edits

mod history;
mod items;

pub use history::{History, HistoryEntry, Snapshot};

use std::collections::BTreeSet;

use collagekit_core::{Breakpoint, Item, Layout, Template};
use tracing::{debug, warn};

use crate::canvas::LayoutSink;
use crate::reconcile::{get_layout, plan_rows, PlacedItem};

/// Undo depth used when none is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// A breakpoint whose boxes are all within this many pixels of the scaled
/// desktop layout is treated as not customised.
pub const PROJECTION_TOLERANCE: f64 = 0.5;

/// Editor state for UI integration
#[derive(Debug, Clone)]
pub struct EditorState {
    template: Template,
    active: Breakpoint,
    /// Breakpoints edited on their own. Desktop is always listed.
    customised: BTreeSet<Breakpoint>,
    history: History,
    pub is_modified: bool,
}

impl EditorState {
    /// Creates editor state for `template`, editing desktop.
    ///
    /// Tablet and mobile count as customised unless they are a proportional
    /// projection of desktop.
    pub fn new(template: Template) -> Self {
        let customised = Breakpoint::ALL
            .into_iter()
            .filter(|bp| {
                *bp == Breakpoint::Desktop
                    || !is_projection(&template.desktop, template.layout(*bp))
            })
            .collect();
        Self {
            template,
            active: Breakpoint::Desktop,
            customised,
            history: History::default(),
            is_modified: false,
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = History::new(limit);
        self
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn active(&self) -> Breakpoint {
        self.active
    }

    pub fn set_active(&mut self, breakpoint: Breakpoint) {
        self.active = breakpoint;
    }

    /// Layout of the active breakpoint.
    pub fn layout(&self) -> &Layout {
        self.template.layout(self.active)
    }

    pub fn is_customised(&self, breakpoint: Breakpoint) -> bool {
        self.customised.contains(&breakpoint)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            template: self.template.clone(),
            customised: self.customised.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.template = snapshot.template;
        self.customised = snapshot.customised;
    }

    /// Replaces the active breakpoint's layout.
    ///
    /// This is the single place layouts change: the active breakpoint becomes
    /// customised, every breakpoint that is not customised is re-projected from
    /// desktop, and the change is recorded for undo. Returns `false` when
    /// `next` equals the current layout.
    pub fn replace_layout(&mut self, name: &str, next: Layout) -> bool {
        if *self.layout() == next {
            return false;
        }
        let before = self.snapshot();

        self.customised.insert(self.active);
        let mut template = self.template.with_layout(self.active, next);
        let desktop = template.desktop.clone();
        for bp in Breakpoint::ALL {
            if self.customised.contains(&bp) {
                continue;
            }
            match desktop.scaled_to_width(template.layout(bp).width) {
                Ok(projected) => template = template.with_layout(bp, projected),
                Err(e) => warn!(breakpoint = %bp, "Failed to sync breakpoint: {}", e),
            }
        }
        self.template = template;

        self.history.push(HistoryEntry {
            name: name.to_string(),
            before,
            after: self.snapshot(),
        });
        self.is_modified = true;
        debug!(name, breakpoint = %self.active, "layout replaced");
        true
    }

    /// Re-projects `breakpoint` from desktop and stops treating it as customised.
    pub fn reset_breakpoint(&mut self, breakpoint: Breakpoint) -> crate::Result<()> {
        if breakpoint == Breakpoint::Desktop {
            return Ok(());
        }
        let width = self.template.layout(breakpoint).width;
        let projected = self.template.desktop.scaled_to_width(width)?;
        let before = self.snapshot();
        self.customised.remove(&breakpoint);
        self.template = self.template.with_layout(breakpoint, projected);
        self.history.push(HistoryEntry {
            name: format!("Reset {}", breakpoint),
            before,
            after: self.snapshot(),
        });
        self.is_modified = true;
        Ok(())
    }

    /// Undo last change
    pub fn undo(&mut self) -> bool {
        match self.history.undo().cloned() {
            Some(snapshot) => {
                self.restore(snapshot);
                self.is_modified = true;
                debug!("undo");
                true
            }
            None => false,
        }
    }

    /// Redo last undo
    pub fn redo(&mut self) -> bool {
        match self.history.redo().cloned() {
            Some(snapshot) => {
                self.restore(snapshot);
                self.is_modified = true;
                debug!("redo");
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Clear history stacks
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Unified row order across the three breakpoints.
    pub fn unified_rows(&self) -> Vec<Vec<Item>> {
        get_layout(&self.template)
    }

    /// Unified rows with per-item breakpoint visibility.
    pub fn plan(&self) -> Vec<Vec<PlacedItem>> {
        plan_rows(&self.template)
    }
}

impl LayoutSink for EditorState {
    fn set_layout(&mut self, update: &dyn Fn(&Layout) -> Layout) {
        let next = update(self.layout());
        self.replace_layout("Edit layout", next);
    }
}

/// True when `other` is `desktop` scaled to `other`'s width, item for item.
fn is_projection(desktop: &Layout, other: &Layout) -> bool {
    let Ok(scaled) = desktop.scaled_to_width(other.width) else {
        return false;
    };
    scaled.items.len() == other.items.len()
        && scaled.items.iter().zip(&other.items).all(|(a, b)| {
            a.id == b.id
                && (a.x - b.x).abs() <= PROJECTION_TOLERANCE
                && (a.y - b.y).abs() <= PROJECTION_TOLERANCE
                && (a.w - b.w).abs() <= PROJECTION_TOLERANCE
                && (a.h - b.h).abs() <= PROJECTION_TOLERANCE
        })
}
