use crate::core::types::{ElementRect, SurfaceFrame};

/// Constrains a proposed box into the surface frame.
///
/// Order matters: position is clamped into `[0, frame − size]` using the
/// proposed size, then size is clamped down so the box still fits from the
/// clamped position, then the minimum-size gate is re-asserted as the final
/// invariant. The size clamp is a safety net for resize growth that pushed
/// the box out; for ordinary drags it is a no-op.
#[must_use]
pub fn clamp_to_frame(proposed: ElementRect, frame: SurfaceFrame, min_dimension: f64) -> ElementRect {
    let x = proposed.x.min(frame.width - proposed.width).max(0.0);
    let y = proposed.y.min(frame.height - proposed.height).max(0.0);

    let width = proposed.width.min(frame.width - x).max(min_dimension);
    let height = proposed.height.min(frame.height - y).max(min_dimension);

    ElementRect {
        x,
        y,
        width,
        height,
    }
}
