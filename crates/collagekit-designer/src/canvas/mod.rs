//! Editing surface for moving, resizing and cropping items.
//!
//! [`Interaction`] turns pointer drags into layout updates. A drag start freezes
//! a [`DragSubject`]; every later event is applied to that frozen subject; a drag
//! end writes the result back exactly once through a [`LayoutSink`]. The surface
//! never mutates layout state any other way.

mod operations;
mod types;

pub use types::{
    Corner, DragEvent, DragKind, DragOutcome, DragState, DragSubject, DropTarget, Edge, Handle,
    InteractionConfig,
};

use collagekit_core::{Item, Layout, Rect};
use tracing::debug;

use crate::error::{DesignerError, Result};
use crate::snapping::{snap_lines, GuideLine};

/// Receiver of committed layout replacements.
///
/// `update` maps the authoritative current layout to its replacement. It must be
/// applied to whatever the sink holds at call time, not to an earlier snapshot.
pub trait LayoutSink {
    fn set_layout(&mut self, update: &dyn Fn(&Layout) -> Layout);
}

impl LayoutSink for Layout {
    fn set_layout(&mut self, update: &dyn Fn(&Layout) -> Layout) {
        *self = update(self);
    }
}

/// Replaces the items of `current` that are still present with their updated records.
fn apply_updates(current: &Layout, updates: &[Item]) -> Layout {
    let present: Vec<Item> = updates
        .iter()
        .filter(|u| current.contains(&u.id))
        .cloned()
        .collect();
    current
        .with_items(&present)
        .unwrap_or_else(|_| current.clone())
}

/// Drag state machine for one editing surface.
#[derive(Debug, Clone)]
pub struct Interaction {
    state: DragState,
    config: InteractionConfig,
}

impl Interaction {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            state: DragState::Idle,
            config,
        }
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: InteractionConfig) {
        self.config = config;
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    /// Items as the active drag would leave them.
    pub fn preview(&self) -> Option<&[Item]> {
        match &self.state {
            DragState::Dragging { preview, .. } => Some(preview),
            _ => None,
        }
    }

    /// Alignment guides for the active move preview.
    pub fn guides(&self) -> Vec<GuideLine> {
        match &self.state {
            DragState::Dragging { subject, preview } => {
                let bounds = preview
                    .iter()
                    .map(Item::rect)
                    .reduce(|a, b| a.union(&b));
                match bounds {
                    Some(b) => snap_lines(&b, &subject.neighbours, self.config.guide_tolerance),
                    None => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    /// Abandons the active drag without writing anything.
    pub fn cancel(&mut self) {
        if let Some(kind) = self.state.kind() {
            debug!(kind = kind.name(), "drag abandoned");
        }
        self.state = DragState::Idle;
    }

    pub fn on_move_start(&mut self, layout: &Layout, id: &str) -> Result<()> {
        self.start(DragKind::Move, layout, &[id.to_string()])
    }

    pub fn on_move(&mut self, event: DragEvent) -> Result<&[Item]> {
        self.update("move", event)
    }

    pub fn on_move_end(
        &mut self,
        target: DropTarget,
        sink: &mut dyn LayoutSink,
    ) -> Result<DragOutcome> {
        self.end("move", target, sink)
    }

    pub fn on_resize_start(&mut self, layout: &Layout, id: &str, handle: Handle) -> Result<()> {
        self.start(DragKind::Resize(handle), layout, &[id.to_string()])
    }

    pub fn on_resize(&mut self, event: DragEvent) -> Result<&[Item]> {
        self.update("resize", event)
    }

    pub fn on_resize_end(
        &mut self,
        target: DropTarget,
        sink: &mut dyn LayoutSink,
    ) -> Result<DragOutcome> {
        self.end("resize", target, sink)
    }

    pub fn on_crop_start(&mut self, layout: &Layout, id: &str, handle: Handle) -> Result<()> {
        self.start(DragKind::Crop(handle), layout, &[id.to_string()])
    }

    pub fn on_crop(&mut self, event: DragEvent) -> Result<&[Item]> {
        self.update("crop", event)
    }

    pub fn on_crop_end(
        &mut self,
        target: DropTarget,
        sink: &mut dyn LayoutSink,
    ) -> Result<DragOutcome> {
        self.end("crop", target, sink)
    }

    /// Starts moving every listed item as one block.
    pub fn on_group_move_start(&mut self, layout: &Layout, ids: &[String]) -> Result<()> {
        if ids.is_empty() {
            return Err(DesignerError::EmptySelection);
        }
        self.start(DragKind::GroupMove, layout, ids)
    }

    pub fn on_group_move(&mut self, event: DragEvent) -> Result<&[Item]> {
        self.update("group move", event)
    }

    pub fn on_group_move_end(
        &mut self,
        target: DropTarget,
        sink: &mut dyn LayoutSink,
    ) -> Result<DragOutcome> {
        self.end("group move", target, sink)
    }

    fn start(&mut self, kind: DragKind, layout: &Layout, ids: &[String]) -> Result<()> {
        if let Some(active) = self.state.kind() {
            return Err(DesignerError::AlreadyDragging {
                active: active.name(),
            });
        }

        let items = ids
            .iter()
            .map(|id| layout.require(id).cloned())
            .collect::<collagekit_core::Result<Vec<Item>>>()?;
        let Some(bounds) = layout.bounds_of(ids) else {
            return Err(DesignerError::EmptySelection);
        };
        let image = match kind {
            DragKind::Crop(_) => items.first().map(Item::image_box).transpose()?,
            _ => None,
        };
        // The surface extends one selection height below the lowest item so a
        // drag can push items past the current bottom.
        let container = Rect::new(0.0, 0.0, layout.width, layout.height() + bounds.h);
        container.validate_container()?;

        let subject = DragSubject {
            kind,
            items: items.clone(),
            bounds,
            container,
            neighbours: layout.neighbours_of(ids),
            image,
        };
        debug!(kind = kind.name(), items = items.len(), "drag started");
        self.state = DragState::Dragging {
            subject,
            preview: items,
        };
        Ok(())
    }

    fn update(&mut self, expected: &'static str, event: DragEvent) -> Result<&[Item]> {
        let config = self.config;
        match &mut self.state {
            DragState::Dragging { subject, preview } if subject.kind.name() == expected => {
                *preview = operations::preview(subject, event, &config)?;
                Ok(preview.as_slice())
            }
            DragState::Idle => Err(DesignerError::NotDragging),
            DragState::Dragging { subject, .. } | DragState::Committing { subject } => {
                Err(DesignerError::WrongDrag {
                    expected,
                    active: subject.kind.name(),
                })
            }
        }
    }

    fn end(
        &mut self,
        expected: &'static str,
        target: DropTarget,
        sink: &mut dyn LayoutSink,
    ) -> Result<DragOutcome> {
        let (subject, preview) = match std::mem::take(&mut self.state) {
            DragState::Dragging { subject, preview } if subject.kind.name() == expected => {
                (subject, preview)
            }
            DragState::Idle => return Err(DesignerError::NotDragging),
            other => {
                let active = other.kind().map_or("unknown", |k| k.name());
                self.state = other;
                return Err(DesignerError::WrongDrag { expected, active });
            }
        };

        if target == DropTarget::Outside {
            debug!(kind = expected, "drag cancelled outside drop target");
            return Ok(DragOutcome::Cancelled);
        }
        if preview == subject.items {
            debug!(kind = expected, "drag without displacement treated as click");
            return Ok(DragOutcome::Click);
        }

        self.state = DragState::Committing { subject };
        sink.set_layout(&|current: &Layout| apply_updates(current, &preview));
        self.state = DragState::Idle;
        debug!(kind = expected, items = preview.len(), "drag committed");
        Ok(DragOutcome::Committed)
    }
}
