//! Crop handles: resize the visible window of a photo without rescaling the photo.
//!
//! Cropping changes the item's placement box and its crop window together. The
//! photo itself stays put (its placed full-size box is `image`), so growing the
//! box reveals more of the photo and can never reach past the photo's edges.

use collagekit_core::{
    clamp_into_container, ensure_finite, Extent, GeometryError, Item, Point, Rect, Result, Span,
};

use crate::resize::{axis_room, effective_scale, scale_about};

/// Scales `item`'s box by `dx` horizontally and `dy` vertically around `anchor`.
///
/// Each axis is clamped separately: below by the size extent, above by the
/// size extent and by the room left before the box would leave `image` or `pos`
/// in the anchor's growth direction. A bound only limits growth while the box
/// and the anchor lie inside it. The new box is finally clamped into `pos`, and
/// the returned item carries it with the crop window it shows, relative to `image`.
pub fn crop(
    size: &Extent,
    pos: &Extent,
    anchor: Point,
    dx: f64,
    dy: f64,
    image: &Rect,
    item: &Item,
) -> Result<Item> {
    for (value, field) in [(dx, "crop dx"), (dy, "crop dy")] {
        ensure_finite(value, field)?;
        if value <= 0.0 {
            return Err(GeometryError::InvalidScale { scale: value }.into());
        }
    }
    if dx == 1.0 && dy == 1.0 {
        return Ok(item.clone());
    }

    size.validate()?;
    pos.validate()?;
    ensure_finite(anchor.x, "anchor x")?;
    ensure_finite(anchor.y, "anchor y")?;
    image.validate_container()?;
    let container = pos.to_rect();
    container.validate_container()?;

    let rect = item.rect();
    rect.validate()?;
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return Err(GeometryError::DegenerateBox {
            width: rect.w,
            height: rect.h,
        }
        .into());
    }

    let fx = axis_factor(
        dx,
        (rect.x, rect.right()),
        anchor.x,
        size.horizontal,
        &[
            Span::new(image.x, image.right()),
            Span::new(container.x, container.right()),
        ],
    );
    let fy = axis_factor(
        dy,
        (rect.y, rect.bottom()),
        anchor.y,
        size.vertical,
        &[
            Span::new(image.y, image.bottom()),
            Span::new(container.y, container.bottom()),
        ],
    );

    tracing::trace!(dx, dy, fx, fy, "crop");

    let next = clamp_into_container(&container, &scale_about(&rect, anchor, fx, fy))?;
    let window = Rect::new(
        (next.x - image.x) / image.w,
        (next.y - image.y) / image.h,
        next.w / image.w,
        next.h / image.h,
    );
    Ok(item.with_rect(next).with_crop_window(window))
}

fn axis_factor(requested: f64, segment: (f64, f64), anchor: f64, size: Span, bounds: &[Span]) -> f64 {
    if requested == 1.0 {
        return 1.0;
    }
    let (start, end) = segment;
    let len = end - start;
    let mut upper = size.max / len;
    for span in bounds {
        if span.contains(start) && span.contains(end) && span.contains(anchor) {
            upper = upper.min(axis_room(start, end, anchor, span.min, span.max));
        }
    }
    effective_scale(requested, size.min / len, upper)
}
