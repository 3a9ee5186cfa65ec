//! Placed photo instances.

use serde::{Deserialize, Serialize};

use super::asset::Asset;
use crate::error::{LayoutError, Result};
use crate::geometry::{ensure_finite, Point, Rect};

/// One placed, croppable photo inside a single breakpoint's layout.
///
/// The placement box is `(x, y, w, h)` in layout pixels. The crop window
/// `(sx, sy, sw, sh)` is normalised against the source asset: `sw` is the
/// fraction of the asset width that is visible, and the window never leaves
/// the asset (`sx + sw <= 1`, `sy + sh <= 1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    /// Asset id backing this item.
    pub src: String,
    #[serde(default)]
    pub z: i32,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default)]
    pub sx: f64,
    #[serde(default)]
    pub sy: f64,
    #[serde(default = "full_window")]
    pub sw: f64,
    #[serde(default = "full_window")]
    pub sh: f64,
    /// Opaque visual-transition tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
}

fn full_window() -> f64 {
    1.0
}

impl Item {
    /// Creates an item showing the whole asset.
    pub fn new(id: impl Into<String>, src: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            z: 0,
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            sx: 0.0,
            sy: 0.0,
            sw: 1.0,
            sh: 1.0,
            effect: None,
        }
    }

    /// Creates the item produced by dropping `asset` on a layout of `layout_width`.
    ///
    /// The box is a square one third of the layout width, centred on `drop` and
    /// kept inside the layout horizontally and below the top edge. The crop window
    /// is the largest centred window matching the box aspect.
    pub fn from_asset(asset: &Asset, layout_width: f64, drop: Point, z: i32) -> Result<Self> {
        let area = Rect::new(0.0, 0.0, ensure_finite(layout_width, "layout width")?, 1.0);
        area.validate_container()?;
        ensure_finite(drop.x, "drop x")?;
        ensure_finite(drop.y, "drop y")?;

        let side = layout_width / 3.0;
        let x = (drop.x - side / 2.0).clamp(0.0, layout_width - side);
        let y = (drop.y - side / 2.0).max(0.0);

        let id = uuid::Uuid::new_v4().to_string();
        let item = Self {
            z,
            ..Self::new(id, asset.id.clone(), Rect::new(x, y, side, side))
        };
        item.with_centered_crop(asset)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Returns a copy placed at `rect`, keeping the crop window.
    pub fn with_rect(&self, rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            ..self.clone()
        }
    }

    /// Normalised crop window as a rectangle in asset-fraction space.
    pub fn crop_window(&self) -> Rect {
        Rect::new(self.sx, self.sy, self.sw, self.sh)
    }

    /// Returns a copy with the crop window clamped into the unit square.
    pub fn with_crop_window(&self, window: Rect) -> Self {
        let sx = window.x.clamp(0.0, 1.0);
        let sy = window.y.clamp(0.0, 1.0);
        Self {
            sx,
            sy,
            sw: window.w.clamp(0.0, 1.0 - sx),
            sh: window.h.clamp(0.0, 1.0 - sy),
            ..self.clone()
        }
    }

    /// Returns a copy with the largest centred crop window matching this item's aspect.
    pub fn with_centered_crop(&self, asset: &Asset) -> Result<Self> {
        let asset_aspect = asset.aspect_ratio()?;
        if self.w <= 0.0 || self.h <= 0.0 {
            return Ok(self.with_crop_window(Rect::new(0.0, 0.0, 1.0, 1.0)));
        }
        let box_aspect = self.w / self.h;
        let (sw, sh) = if asset_aspect > box_aspect {
            (box_aspect / asset_aspect, 1.0)
        } else {
            (1.0, asset_aspect / box_aspect)
        };
        Ok(self.with_crop_window(Rect::new((1.0 - sw) / 2.0, (1.0 - sh) / 2.0, sw, sh)))
    }

    pub fn with_effect(&self, effect: Option<String>) -> Self {
        Self {
            effect,
            ..self.clone()
        }
    }

    /// The full asset as it would be placed behind this item at the current zoom.
    ///
    /// Cropping grows the item box inside this rectangle.
    pub fn image_box(&self) -> Result<Rect> {
        if self.sw <= 0.0 || self.sh <= 0.0 {
            return Err(LayoutError::EmptyCropWindow {
                id: self.id.clone(),
            }
            .into());
        }
        let w = self.w / self.sw;
        let h = self.h / self.sh;
        Ok(Rect::new(self.x - self.sx * w, self.y - self.sy * h, w, h))
    }

    /// True when the crop window stays inside the asset.
    pub fn has_valid_crop_window(&self) -> bool {
        self.sx >= 0.0
            && self.sy >= 0.0
            && self.sw >= 0.0
            && self.sh >= 0.0
            && self.sx + self.sw <= 1.0 + 1e-9
            && self.sy + self.sh <= 1.0 + 1e-9
    }
}
