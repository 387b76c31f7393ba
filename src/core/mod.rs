pub mod clamp;
pub mod handles;
pub mod resize;
pub mod types;

pub use clamp::clamp_to_frame;
pub use handles::{HorizontalEdge, ResizeDirection, VerticalEdge, resize_direction_at};
pub use resize::resized_rect;
pub use types::{
    DEFAULT_EDGE_TOLERANCE, DEFAULT_MIN_DIMENSION, ElementId, ElementRect, SurfaceFrame,
};
