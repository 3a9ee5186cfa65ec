//! Error handling for CollageKit
//!
//! Provides error types for the layout core:
//! - Geometry errors (degenerate boxes, containers, scale factors, NaN input)
//! - Asset errors (missing or zero-sized assets)
//! - Layout errors (unknown item ids, broken crop windows)
//!
//! All error types use `thiserror` for ergonomic error handling. Geometry
//! precondition violations fail fast instead of producing NaN boxes that
//! would end up in persisted layout state.

use thiserror::Error;

/// Geometry error type
///
/// Represents precondition violations in the box algebra.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Container has zero or negative size on some axis
    #[error("Invalid container {width}x{height}: dimensions must be positive")]
    InvalidContainer {
        /// Container width.
        width: f64,
        /// Container height.
        height: f64,
    },

    /// Box has zero size where a ratio against its size is required
    #[error("Degenerate box {width}x{height}: cannot scale a box with zero extent")]
    DegenerateBox {
        /// Box width.
        width: f64,
        /// Box height.
        height: f64,
    },

    /// Scale factor is zero, negative or not finite
    #[error("Invalid scale factor {scale}")]
    InvalidScale {
        /// The rejected scale factor.
        scale: f64,
    },

    /// An input coordinate was NaN or infinite
    #[error("Non-finite value for {field}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },

    /// An extent interval has min > max
    #[error("Invalid extent [{min}, {max}] for {axis}")]
    InvalidExtent {
        /// Axis name.
        axis: &'static str,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}

/// Asset error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    /// No asset registered for the id referenced by an item
    #[error("Asset not found: {id}")]
    NotFound {
        /// The missing asset id.
        id: String,
    },

    /// Asset reports zero pixel dimensions
    #[error("Asset {id} has invalid dimensions {width}x{height}")]
    InvalidDimensions {
        /// The asset id.
        id: String,
        /// Natural pixel width.
        width: u32,
        /// Natural pixel height.
        height: u32,
    },
}

/// Layout error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// No item with this id in the layout
    #[error("Item not found: {id}")]
    UnknownItem {
        /// The missing item id.
        id: String,
    },

    /// Crop window has a zero-size axis, so the backing image box is undefined
    #[error("Item {id} has an empty crop window")]
    EmptyCropWindow {
        /// The item id.
        id: String,
    },
}

/// Main error type for CollageKit
///
/// A unified error type that can represent any error from the core.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Asset error
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Template (de)serialization error
    #[error("Template format error: {0}")]
    Format(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a geometry precondition violation
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is an asset lookup error
    pub fn is_asset_error(&self) -> bool {
        matches!(self, Error::Asset(_))
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
