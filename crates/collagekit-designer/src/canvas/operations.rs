//! Drag pipelines: the subject plus one cumulative event in, preview items out.

use collagekit_core::{clamp_into_container, ensure_finite, Item, Result};

use super::types::{DragEvent, DragKind, DragSubject, InteractionConfig};
use crate::crop::crop;
use crate::resize::resize;
use crate::snapping::snap_in_container;

/// Items of `subject` transformed by `event`.
pub(crate) fn preview(
    subject: &DragSubject,
    event: DragEvent,
    config: &InteractionConfig,
) -> Result<Vec<Item>> {
    ensure_finite(event.dx, "drag dx")?;
    ensure_finite(event.dy, "drag dy")?;
    if event.is_zero() {
        return Ok(subject.items.clone());
    }
    match subject.kind {
        DragKind::Move | DragKind::GroupMove => translate_items(subject, event, config),
        DragKind::Resize(handle) => {
            let Some(item) = subject.items.first() else {
                return Ok(Vec::new());
            };
            let rect = item.rect();
            let scale = handle.uniform_scale(&rect, event.dx, event.dy);
            let next = resize(
                &config.size_extent,
                &subject.position_extent(),
                handle.anchor(&rect),
                scale,
                &rect,
            )?;
            Ok(vec![item.with_rect(next)])
        }
        DragKind::Crop(handle) => {
            let Some(item) = subject.items.first() else {
                return Ok(Vec::new());
            };
            let rect = item.rect();
            let image = match subject.image {
                Some(image) => image,
                None => item.image_box()?,
            };
            let (fx, fy) = handle.axis_factors(&rect, event.dx, event.dy);
            let next = crop(
                &config.size_extent,
                &subject.position_extent(),
                handle.anchor(&rect),
                fx,
                fy,
                &image,
                item,
            )?;
            Ok(vec![next])
        }
    }
}

/// Moves the subject's bounding box, clamps it, snaps it, clamps again, and
/// shifts every item by the resulting delta.
fn translate_items(
    subject: &DragSubject,
    event: DragEvent,
    config: &InteractionConfig,
) -> Result<Vec<Item>> {
    let start = subject.bounds;
    let moved = clamp_into_container(&subject.container, &start.translate(event.dx, event.dy))?;
    let (sx, sy) = snap_in_container(
        config.snap_threshold,
        &moved,
        &subject.container,
        &subject.neighbours,
    );
    let snapped = clamp_into_container(&subject.container, &moved.translate(sx, sy))?;

    let (dx, dy) = (snapped.x - start.x, snapped.y - start.y);
    tracing::trace!(dx, dy, sx, sy, "move preview");
    Ok(subject
        .items
        .iter()
        .map(|i| i.with_rect(i.rect().translate(dx, dy)))
        .collect())
}
