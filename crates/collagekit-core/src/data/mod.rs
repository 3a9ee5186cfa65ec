//! Data model for collage layouts.
//!
//! - [`Item`]: one placed, croppable photo
//! - [`Layout`]: the items of one breakpoint
//! - [`Template`]: desktop, tablet and mobile layouts of the same content
//! - [`Asset`] / [`AssetStore`]: read-only image metadata

pub mod asset;
pub mod item;
pub mod layout;

pub use asset::{Asset, AssetStore};
pub use item::Item;
pub use layout::{Breakpoint, Layout, Template};
