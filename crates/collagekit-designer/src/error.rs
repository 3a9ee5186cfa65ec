//! Error types for the designer crate.
//!
//! Geometry and lookup failures come from `collagekit-core`; this module adds
//! the drag lifecycle violations that only the editing surface can detect.

use thiserror::Error;

/// Errors raised by the editing surface and editor state.
#[derive(Error, Debug)]
pub enum DesignerError {
    /// A core geometry, asset or layout error.
    #[error(transparent)]
    Core(#[from] collagekit_core::Error),

    /// A move/update/end event arrived while no drag was active.
    #[error("No drag in progress")]
    NotDragging,

    /// A drag start arrived while another drag was still active.
    #[error("A {active} drag is already in progress")]
    AlreadyDragging {
        /// Kind of the drag that is active.
        active: &'static str,
    },

    /// An event for one handle arrived while a different handle was dragging.
    #[error("Expected a {expected} drag but a {active} drag is in progress")]
    WrongDrag {
        /// Kind the event was meant for.
        expected: &'static str,
        /// Kind of the drag that is active.
        active: &'static str,
    },

    /// A group drag was started with nothing selected.
    #[error("Selection is empty")]
    EmptySelection,
}

impl From<collagekit_core::GeometryError> for DesignerError {
    fn from(err: collagekit_core::GeometryError) -> Self {
        DesignerError::Core(err.into())
    }
}

impl From<collagekit_core::AssetError> for DesignerError {
    fn from(err: collagekit_core::AssetError) -> Self {
        DesignerError::Core(err.into())
    }
}

impl From<collagekit_core::LayoutError> for DesignerError {
    fn from(err: collagekit_core::LayoutError) -> Self {
        DesignerError::Core(err.into())
    }
}

/// Result type using DesignerError
pub type Result<T> = std::result::Result<T, DesignerError>;
