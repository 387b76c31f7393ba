//! Pointer normalization for mouse and touch input sources.
//!
//! Both device families collapse into one [`PointerEvent`] so the gesture
//! machine never branches on device kind. Touch events contribute only
//! their first active touch point; extra simultaneous touches are ignored.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Lifecycle phase of a normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Input device family a pointer event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Uniform pointer record consumed by the gesture machine.
///
/// Coordinates are in the client space of the input device; the engine
/// translates them into surface-local space against the live
/// [`SurfaceFrame`](crate::core::SurfaceFrame).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub phase: PointerPhase,
    pub source: PointerSource,
}

/// Raw mouse event payload supplied by the host. Always exactly one pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseInput {
    pub client_x: f64,
    pub client_y: f64,
}

impl MouseInput {
    #[must_use]
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// One active touch contact point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    #[must_use]
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Raw touch event payload: the host's current active touch list.
///
/// Touch-end events legitimately carry zero points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchInput {
    pub touches: SmallVec<[TouchPoint; 2]>,
}

impl TouchInput {
    #[must_use]
    pub fn single(client_x: f64, client_y: f64) -> Self {
        let mut touches = SmallVec::new();
        touches.push(TouchPoint::new(client_x, client_y));
        Self { touches }
    }

    /// First active touch point, the only one the engine tracks.
    #[must_use]
    pub fn primary(&self) -> Option<TouchPoint> {
        self.touches.first().copied()
    }
}

impl PointerEvent {
    #[must_use]
    pub fn from_mouse(input: MouseInput, phase: PointerPhase) -> Self {
        Self {
            client_x: input.client_x,
            client_y: input.client_y,
            phase,
            source: PointerSource::Mouse,
        }
    }

    /// Normalizes a touch event from its primary touch point.
    ///
    /// Returns `None` when the touch list is empty; such events carry no
    /// position and are dropped by the engine.
    #[must_use]
    pub fn from_touch(input: &TouchInput, phase: PointerPhase) -> Option<Self> {
        let primary = input.primary()?;
        Some(Self {
            client_x: primary.client_x,
            client_y: primary.client_y,
            phase,
            source: PointerSource::Touch,
        })
    }
}
