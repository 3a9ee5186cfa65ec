//! Anchor-preserving uniform resize.

use collagekit_core::{
    clamp_into_container, ensure_finite, Extent, GeometryError, Point, Rect, Result,
};

/// Uniformly scales `rect` by `scale` around `anchor`.
///
/// The effective scale is clamped so the result stays within `size` and, when
/// the box and anchor start inside `pos`, so the scaled box does not cross `pos`
/// either; that keeps the anchor in place. The result is finally clamped into
/// `pos`. A scale of exactly 1 returns the box unchanged.
pub fn resize(size: &Extent, pos: &Extent, anchor: Point, scale: f64, rect: &Rect) -> Result<Rect> {
    ensure_finite(scale, "scale")?;
    if scale <= 0.0 {
        return Err(GeometryError::InvalidScale { scale }.into());
    }
    if scale == 1.0 {
        return Ok(*rect);
    }

    size.validate()?;
    pos.validate()?;
    rect.validate()?;
    ensure_finite(anchor.x, "anchor x")?;
    ensure_finite(anchor.y, "anchor y")?;
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return Err(GeometryError::DegenerateBox {
            width: rect.w,
            height: rect.h,
        }
        .into());
    }
    let container = pos.to_rect();
    container.validate_container()?;

    let lower = (size.horizontal.min / rect.w).max(size.vertical.min / rect.h);
    let upper = (size.horizontal.max / rect.w)
        .min(size.vertical.max / rect.h)
        .min(room_around_anchor(&container, anchor, rect));
    let effective = effective_scale(scale, lower, upper);

    tracing::trace!(scale, effective, lower, upper, "resize");

    clamp_into_container(&container, &scale_about(rect, anchor, effective, effective))
}

/// `clamp(lower, upper, scale)`; when the bounds cross, the upper bound wins so the
/// box never outgrows its maximum.
pub(crate) fn effective_scale(scale: f64, lower: f64, upper: f64) -> f64 {
    scale.max(lower).min(upper)
}

/// Scales `rect` around `anchor` independently on each axis.
pub(crate) fn scale_about(rect: &Rect, anchor: Point, fx: f64, fy: f64) -> Rect {
    Rect::new(
        anchor.x + (rect.x - anchor.x) * fx,
        anchor.y + (rect.y - anchor.y) * fy,
        rect.w * fx,
        rect.h * fy,
    )
}

/// Largest uniform scale about `anchor` that keeps `rect` inside `container`.
/// Unbounded when the box or anchor already lie outside the container.
fn room_around_anchor(container: &Rect, anchor: Point, rect: &Rect) -> f64 {
    if !container.contains_rect(rect) || !container.contains_point(anchor.x, anchor.y) {
        return f64::INFINITY;
    }
    axis_room(rect.x, rect.right(), anchor.x, container.x, container.right()).min(axis_room(
        rect.y,
        rect.bottom(),
        anchor.y,
        container.y,
        container.bottom(),
    ))
}

/// Room along one axis for a segment `[start, end]` growing away from `anchor`
/// inside `[min, max]`.
pub(crate) fn axis_room(start: f64, end: f64, anchor: f64, min: f64, max: f64) -> f64 {
    const EPS: f64 = 1e-9;
    let mut limit = f64::INFINITY;
    let before = anchor - start;
    if before > EPS {
        limit = limit.min((anchor - min) / before);
    }
    let after = end - anchor;
    if after > EPS {
        limit = limit.min((max - anchor) / after);
    }
    limit
}
