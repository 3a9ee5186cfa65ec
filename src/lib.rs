//! # CollageKit
//!
//! Layout core for a responsive photo-collage editor:
//! - Box algebra for resizing and cropping photos within size and position bounds
//! - Snapping of moving boxes to their neighbours and the surface edges
//! - Row grouping per breakpoint and one row order reconciled across
//!   desktop, tablet and mobile
//! - A drag state machine and editor state with breakpoint sync and undo/redo
//!
//! ## Architecture
//!
//! CollageKit is organized as a workspace with multiple crates:
//!
//! 1. **collagekit-core** - Geometry primitives, data model, errors
//! 2. **collagekit-designer** - Resize, crop, snapping, rows, reconciliation, editing surface
//! 3. **collagekit-settings** - Editor configuration and persistence
//! 4. **collagekit** - This crate, which wires configuration into the designer

pub use collagekit_core::{
    Asset, AssetStore, Breakpoint, Error, Extent, Item, Layout, Point, Rect, Result, Span,
    Template,
};

pub use collagekit_designer::{
    get_layout, group_by_row, plan_rows, row_visibility, DesignerError, DragEvent, DragKind,
    DragOutcome, DropTarget, EditorState, Handle, Interaction, InteractionConfig, LayoutSink,
    PlacedItem, SelectionManager,
};

pub use collagekit_settings::{default_config_path, EditorConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Interaction settings for dragging on `breakpoint`'s surface.
pub fn interaction_config(config: &EditorConfig, breakpoint: Breakpoint) -> InteractionConfig {
    let width = config.breakpoints.width(breakpoint);
    InteractionConfig::new(
        config.snap_threshold(),
        config.snapping.guide_tolerance,
        config.size_extent(width),
    )
}

/// Editor state for `template` with the configured undo depth.
pub fn open_editor(template: Template, config: &EditorConfig) -> EditorState {
    EditorState::new(template).with_history_limit(config.history_limit)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for command results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
