use crate::core::handles::{HorizontalEdge, ResizeDirection, VerticalEdge};
use crate::core::types::ElementRect;

/// Computes the candidate box for a resize gesture.
///
/// `origin` is the element's box captured at gesture start and
/// `pointer_x`/`pointer_y` the current pointer position, both in
/// surface-local coordinates. Each axis is resolved independently from the
/// direction's horizontal/vertical components, so all eight directions run
/// through one formula.
///
/// When a dimension floors at `min_dimension`, the paired position is
/// derived from the clamped dimension, keeping the opposite edge anchored
/// instead of letting it drift past the minimum-size boundary.
#[must_use]
pub fn resized_rect(
    origin: ElementRect,
    pointer_x: f64,
    pointer_y: f64,
    direction: ResizeDirection,
    min_dimension: f64,
) -> ElementRect {
    let mut rect = origin;

    match direction.horizontal() {
        Some(HorizontalEdge::East) => {
            rect.width = (pointer_x - origin.x).max(min_dimension);
        }
        Some(HorizontalEdge::West) => {
            rect.width = (origin.right() - pointer_x).max(min_dimension);
            rect.x = origin.right() - rect.width;
        }
        None => {}
    }

    match direction.vertical() {
        Some(VerticalEdge::South) => {
            rect.height = (pointer_y - origin.y).max(min_dimension);
        }
        Some(VerticalEdge::North) => {
            rect.height = (origin.bottom() - pointer_y).max(min_dimension);
            rect.y = origin.bottom() - rect.height;
        }
        None => {}
    }

    rect
}
