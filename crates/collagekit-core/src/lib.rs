//! # CollageKit Core
//!
//! Core types and utilities for CollageKit.
//! Provides the geometry primitives, the collage data model and the
//! error taxonomy shared by the designer and settings crates.

pub mod data;
pub mod error;
pub mod geometry;

pub use data::{Asset, AssetStore, Breakpoint, Item, Layout, Template};

pub use error::{AssetError, Error, GeometryError, LayoutError, Result};

pub use geometry::{clamp_into_container, ensure_finite, Extent, Point, Rect, Span};
