//! # CollageKit Designer
//!
//! Box manipulation and cross-breakpoint reconciliation for photo-collage
//! layouts. Everything here is synchronous; the geometry functions are pure and
//! take every bound and threshold as an argument.
//!
//! ## Core Components
//!
//! ### Geometry Operations
//! - **Resize**: anchor-preserving uniform scaling within size and position bounds
//! - **Crop**: per-axis resizing of the visible window over a fixed photo
//! - **Snapping**: alignment of a moving box to its neighbours and the surface
//!
//! ### Layout Structure
//! - **Rows**: grouping of items whose vertical extents transitively overlap
//! - **Reconciliation**: one row order shared by desktop, tablet and mobile
//!
//! ### Editing
//! - **Canvas**: drag state machine for move, resize, crop and group move
//! - **Selection**: click, Shift+click and rubber-band selection
//! - **Editor State**: authoritative template, breakpoint sync and undo/redo
//!
//! ## Architecture
//!
//! ```text
//! Interaction (drag start / move / end)
//!   ├── resize, crop, snapping (pure geometry)
//!   └── LayoutSink::set_layout (single commit per drag)
//!         └── EditorState (breakpoint sync, history)
//!
//! get_layout (desktop + tablet + mobile rows)
//!   └── group_by_row (per breakpoint)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use collagekit_designer::{DragEvent, DropTarget, EditorState, Interaction};
//!
//! let mut editor = EditorState::new(template);
//! let mut surface = Interaction::new(config);
//!
//! surface.on_move_start(editor.layout(), "photo-1")?;
//! surface.on_move(DragEvent::new(40.0, 12.0))?;
//! surface.on_move_end(DropTarget::Inside, &mut editor)?;
//!
//! let rows = editor.unified_rows();
//! ```

pub mod canvas;
pub mod crop;
pub mod editor_state;
pub mod error;
pub mod reconcile;
pub mod resize;
pub mod rows;
pub mod selection_manager;
pub mod snapping;

pub use canvas::{
    Corner, DragEvent, DragKind, DragOutcome, DragState, DragSubject, DropTarget, Edge, Handle,
    Interaction, InteractionConfig, LayoutSink,
};
pub use crop::crop;
pub use editor_state::{EditorState, History, HistoryEntry, Snapshot};
pub use error::{DesignerError, Result};
pub use reconcile::{get_layout, plan_rows, row_visibility, PlacedItem};
pub use resize::resize;
pub use rows::{group_by_row, row_ids};
pub use selection_manager::SelectionManager;
pub use snapping::{snap, snap_in_container, snap_lines, GuideLine, Orientation};
