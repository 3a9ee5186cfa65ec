//! Alignment snapping between a moving box and its neighbours.
//!
//! Each box exposes three alignment lines per axis: left / centre / right on x
//! and top / middle / bottom on y. Any line of the moving box may align with
//! any line of a candidate, so abutting boxes snap together as well as boxes
//! whose edges or centres line up.

use serde::{Deserialize, Serialize};

use collagekit_core::{Point, Rect};

/// Orientation of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Drawn for an x-alignment.
    Vertical,
    /// Drawn for a y-alignment.
    Horizontal,
}

/// A guide segment to render while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub orientation: Orientation,
    pub from: Point,
    pub to: Point,
}

fn x_lines(rect: &Rect) -> [f64; 3] {
    [rect.x, rect.x + rect.w / 2.0, rect.right()]
}

fn y_lines(rect: &Rect) -> [f64; 3] {
    [rect.y, rect.y + rect.h / 2.0, rect.bottom()]
}

/// Smallest signed offset moving one of `own` onto one of `others`.
fn nearest_offset<I>(own: [f64; 3], others: I) -> Option<f64>
where
    I: IntoIterator<Item = [f64; 3]>,
{
    let mut best: Option<f64> = None;
    for lines in others {
        for target in lines {
            for line in own {
                let offset = target - line;
                if best.is_none_or(|b| offset.abs() < b.abs()) {
                    best = Some(offset);
                }
            }
        }
    }
    best
}

fn within(offset: Option<f64>, threshold: f64) -> f64 {
    match offset {
        Some(o) if o.abs() <= threshold => o,
        _ => 0.0,
    }
}

/// Offset `(dx, dy)` that aligns `rect` with the nearest candidate line per axis.
///
/// Corresponding lines align (left with left, centre with centre, right with
/// right, and likewise top / middle / bottom). Edges also snap to a candidate's
/// opposite edge and centre, so boxes placed side by side abut. An axis whose
/// nearest alignment is further than `threshold` gets a zero offset.
pub fn snap(threshold: f64, rect: &Rect, candidates: &[Rect]) -> (f64, f64) {
    let dx = nearest_offset(x_lines(rect), candidates.iter().map(x_lines));
    let dy = nearest_offset(y_lines(rect), candidates.iter().map(y_lines));
    (within(dx, threshold), within(dy, threshold))
}

/// [`snap`] with the container treated as one more candidate.
pub fn snap_in_container(
    threshold: f64,
    rect: &Rect,
    container: &Rect,
    neighbours: &[Rect],
) -> (f64, f64) {
    let mut candidates = Vec::with_capacity(neighbours.len() + 1);
    candidates.push(*container);
    candidates.extend_from_slice(neighbours);
    snap(threshold, rect, &candidates)
}

/// Guide lines for every alignment between `rect` and the candidates.
///
/// An x-alignment yields a vertical segment at the shared x joining the two
/// boxes' centre heights; a y-alignment yields a horizontal segment at the shared
/// y joining their centre widths. Segments with identical endpoints are reported
/// once.
pub fn snap_lines(rect: &Rect, candidates: &[Rect], tolerance: f64) -> Vec<GuideLine> {
    let own = rect.center();
    let mut lines: Vec<GuideLine> = Vec::new();
    let mut push = |line: GuideLine| {
        if !lines.contains(&line) {
            lines.push(line);
        }
    };

    for candidate in candidates {
        let other = candidate.center();
        for x in x_lines(candidate) {
            if x_lines(rect).iter().any(|l| (l - x).abs() <= tolerance) {
                push(GuideLine {
                    orientation: Orientation::Vertical,
                    from: Point::new(x, own.y.min(other.y)),
                    to: Point::new(x, own.y.max(other.y)),
                });
            }
        }
        for y in y_lines(candidate) {
            if y_lines(rect).iter().any(|l| (l - y).abs() <= tolerance) {
                push(GuideLine {
                    orientation: Orientation::Horizontal,
                    from: Point::new(own.x.min(other.x), y),
                    to: Point::new(own.x.max(other.x), y),
                });
            }
        }
    }
    lines
}
