//! Geometry primitives: points, axis-aligned boxes and extents.
//!
//! Everything here is pure and allocation free. Boxes never carry a negative
//! width or height; constructors clamp to zero.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

/// A point in layout pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Creates a rectangle, clamping negative sizes to zero.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    /// Creates the rectangle spanning two opposite corners in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (a.x - b.x).abs(),
            (a.y - b.y).abs(),
        )
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Corner points clockwise from the top-left.
    pub fn corner_points(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }

    /// Edge midpoints in top, right, bottom, left order.
    pub fn edge_midpoints(&self) -> [Point; 4] {
        let c = self.center();
        [
            Point::new(c.x, self.y),
            Point::new(self.right(), c.y),
            Point::new(c.x, self.bottom()),
            Point::new(self.x, c.y),
        ]
    }

    /// Inclusive point containment.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// True when `other` lies entirely inside this rectangle (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True when the interiors overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Vertical extent overlap, interiors only. Boxes that merely touch do not overlap.
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.y < other.bottom() && other.y < self.bottom()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }

    /// Rejects NaN and infinite coordinates.
    pub fn validate(&self) -> Result<()> {
        if !self.is_finite() {
            return Err(GeometryError::NonFinite { field: "rect" }.into());
        }
        Ok(())
    }

    /// Rejects rectangles that cannot act as a container.
    pub fn validate_container(&self) -> Result<()> {
        self.validate()?;
        if self.w <= 0.0 || self.h <= 0.0 {
            return Err(GeometryError::InvalidContainer {
                width: self.w,
                height: self.h,
            }
            .into());
        }
        Ok(())
    }
}

/// Returns `item` translated by the minimal delta that fits it inside `container`,
/// per axis. An item larger than the container on an axis is centred on that axis
/// rather than shrunk. Clamping an already contained box is a no-op.
pub fn clamp_into_container(container: &Rect, item: &Rect) -> Result<Rect> {
    container.validate_container()?;
    item.validate()?;
    Ok(Rect::new(
        clamp_axis(item.x, item.w, container.x, container.right()),
        clamp_axis(item.y, item.h, container.y, container.bottom()),
        item.w,
        item.h,
    ))
}

fn clamp_axis(pos: f64, size: f64, min: f64, max: f64) -> f64 {
    let room = max - min;
    if size > room {
        min + (room - size) / 2.0
    } else {
        pos.clamp(min, max - size)
    }
}

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Unbounded above.
    pub fn at_least(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    pub fn len(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_empty(&self) -> bool {
        self.max <= self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, axis: &'static str) -> Result<()> {
        if self.min.is_nan() || self.max.is_nan() || self.min > self.max {
            return Err(GeometryError::InvalidExtent {
                axis,
                min: self.min,
                max: self.max,
            }
            .into());
        }
        Ok(())
    }
}

/// A pair of closed intervals, one per axis.
///
/// Used both for size bounds (`[[w_min, w_max], [h_min, h_max]]`) and for position
/// bounds (`[[x_min, x_max], [y_min, y_max]]`, i.e. a container).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub horizontal: Span,
    pub vertical: Span,
}

impl Extent {
    pub fn new(horizontal: Span, vertical: Span) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Builds an extent from `[[a_min, a_max], [b_min, b_max]]`.
    pub fn from_pairs(horizontal: [f64; 2], vertical: [f64; 2]) -> Self {
        Self::new(
            Span::new(horizontal[0], horizontal[1]),
            Span::new(vertical[0], vertical[1]),
        )
    }

    /// Position extent covering a container rectangle.
    pub fn from_rect(rect: &Rect) -> Self {
        Self::from_pairs([rect.x, rect.right()], [rect.y, rect.bottom()])
    }

    /// Reads a position extent back as a container rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.horizontal.min,
            self.vertical.min,
            self.horizontal.len(),
            self.vertical.len(),
        )
    }

    pub fn validate(&self) -> Result<()> {
        self.horizontal.validate("horizontal")?;
        self.vertical.validate("vertical")
    }
}

/// Rejects NaN and infinite scalar inputs.
pub fn ensure_finite(value: f64, field: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { field }.into())
    }
}
