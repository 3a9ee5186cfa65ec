//! Canvas type definitions: Handle, DragKind, DragEvent, DragSubject, DragState.

use collagekit_core::{Extent, Item, Point, Rect};

/// Corner handles, clockwise from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// Edge handles, clockwise from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// A resize or crop handle on an item's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Corner(Corner),
    Edge(Edge),
}

impl Handle {
    pub const CORNERS: [Handle; 4] = [
        Handle::Corner(Corner::TopLeft),
        Handle::Corner(Corner::TopRight),
        Handle::Corner(Corner::BottomRight),
        Handle::Corner(Corner::BottomLeft),
    ];

    pub const EDGES: [Handle; 4] = [
        Handle::Edge(Edge::Top),
        Handle::Edge(Edge::Right),
        Handle::Edge(Edge::Bottom),
        Handle::Edge(Edge::Left),
    ];

    /// Position of the handle on `rect`.
    pub fn position(&self, rect: &Rect) -> Point {
        match *self {
            Handle::Corner(c) => rect.corner_points()[c as usize],
            Handle::Edge(e) => rect.edge_midpoints()[e as usize],
        }
    }

    /// The point held fixed while this handle is dragged: the opposite corner or
    /// the midpoint of the opposite edge.
    pub fn anchor(&self, rect: &Rect) -> Point {
        match *self {
            Handle::Corner(c) => rect.corner_points()[(c as usize + 2) % 4],
            Handle::Edge(e) => rect.edge_midpoints()[(e as usize + 2) % 4],
        }
    }

    /// Sign of growth per axis when the handle moves by a positive delta.
    /// Zero on the axis an edge handle does not control.
    pub fn direction(&self) -> (f64, f64) {
        match *self {
            Handle::Corner(Corner::TopLeft) => (-1.0, -1.0),
            Handle::Corner(Corner::TopRight) => (1.0, -1.0),
            Handle::Corner(Corner::BottomRight) => (1.0, 1.0),
            Handle::Corner(Corner::BottomLeft) => (-1.0, 1.0),
            Handle::Edge(Edge::Top) => (0.0, -1.0),
            Handle::Edge(Edge::Right) => (1.0, 0.0),
            Handle::Edge(Edge::Bottom) => (0.0, 1.0),
            Handle::Edge(Edge::Left) => (-1.0, 0.0),
        }
    }

    /// Per-axis factors for a pointer displacement, `1` on uncontrolled axes.
    pub fn axis_factors(&self, rect: &Rect, dx: f64, dy: f64) -> (f64, f64) {
        let (gx, gy) = self.direction();
        let factor = |g: f64, len: f64, d: f64| {
            if g == 0.0 {
                1.0
            } else {
                ((len + g * d) / len).max(MIN_FACTOR)
            }
        };
        (factor(gx, rect.w, dx), factor(gy, rect.h, dy))
    }

    /// Uniform scale for a pointer displacement: the mean of both axis factors
    /// for a corner, the controlled axis factor for an edge.
    pub fn uniform_scale(&self, rect: &Rect, dx: f64, dy: f64) -> f64 {
        let (fx, fy) = self.axis_factors(rect, dx, dy);
        match *self {
            Handle::Corner(_) => ((fx + fy) / 2.0).max(MIN_FACTOR),
            Handle::Edge(Edge::Left | Edge::Right) => fx,
            Handle::Edge(Edge::Top | Edge::Bottom) => fy,
        }
    }
}

/// Floor for handle factors so a drag past the anchor never flips the box.
const MIN_FACTOR: f64 = 1e-6;

/// What a drag manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Move,
    Resize(Handle),
    Crop(Handle),
    GroupMove,
}

impl DragKind {
    pub fn name(&self) -> &'static str {
        match self {
            DragKind::Move => "move",
            DragKind::Resize(_) => "resize",
            DragKind::Crop(_) => "crop",
            DragKind::GroupMove => "group move",
        }
    }
}

/// Pointer displacement since the drag started.
///
/// Deltas are cumulative, never incremental, so many small events cannot
/// compound rounding error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragEvent {
    pub dx: f64,
    pub dy: f64,
}

impl DragEvent {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Geometry frozen at drag start.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSubject {
    pub kind: DragKind,
    /// The dragged items as they were when the drag started.
    pub items: Vec<Item>,
    /// Bounding box of `items`.
    pub bounds: Rect,
    /// Surface the items are kept inside.
    pub container: Rect,
    /// Boxes of every other item, used as snap candidates.
    pub neighbours: Vec<Rect>,
    /// Full placed photo for crop drags.
    pub image: Option<Rect>,
}

impl DragSubject {
    pub fn position_extent(&self) -> Extent {
        Extent::from_rect(&self.container)
    }
}

/// Lifecycle of one drag.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is down; `preview` is the subject transformed by the latest event.
    Dragging {
        subject: DragSubject,
        preview: Vec<Item>,
    },
    /// The drop is being written through the layout sink.
    Committing { subject: DragSubject },
}

impl DragState {
    pub fn kind(&self) -> Option<DragKind> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { subject, .. } | DragState::Committing { subject } => {
                Some(subject.kind)
            }
        }
    }
}

/// Where the pointer was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Inside,
    Outside,
}

/// Result of a drag end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The layout was replaced once.
    Committed,
    /// No net displacement; treat as a selection click.
    Click,
    /// Released outside a drop target; the layout is untouched.
    Cancelled,
}

/// Explicit parameters for the drag pipelines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    /// Snap distance in layout pixels.
    pub snap_threshold: f64,
    /// Tolerance for reporting alignment guides.
    pub guide_tolerance: f64,
    /// Width and height bounds for resized and cropped items.
    pub size_extent: Extent,
}

impl InteractionConfig {
    pub fn new(snap_threshold: f64, guide_tolerance: f64, size_extent: Extent) -> Self {
        Self {
            snap_threshold,
            guide_tolerance,
            size_extent,
        }
    }
}
