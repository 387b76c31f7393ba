use serde::{Deserialize, Serialize};

use crate::error::{SurfaceError, SurfaceResult};

/// Default minimum element width/height, in surface units.
pub const DEFAULT_MIN_DIMENSION: f64 = 5.0;

/// Default resize-handle edge tolerance, in surface units.
pub const DEFAULT_EDGE_TOLERANCE: f64 = 8.0;

/// Opaque stable identifier for a manipulable element.
///
/// The engine never mints ids; hosts assign them when they create elements
/// and the engine only keys its collection by them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Element geometry in surface-local coordinates.
///
/// `x`/`y` locate the top-left corner relative to the surface origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

/// Live bounding box of the surface, sampled from the host layout.
///
/// `left`/`top` are the surface origin in the input device's client
/// coordinate space; `width`/`height` bound every element. Hosts query this
/// fresh on each gesture update so layout reflow between events is honored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFrame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceFrame {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Frame anchored at the client origin, for hosts whose surface is not offset.
    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Result-typed validation for hosts that measure layout themselves.
    ///
    /// Gesture routing drops events against degenerate frames silently;
    /// this entry point lets a host fail fast on a bad measurement instead.
    pub fn ensure_valid(self) -> SurfaceResult<()> {
        if self.is_valid() {
            return Ok(());
        }
        Err(SurfaceError::InvalidSurface {
            width: self.width,
            height: self.height,
        })
    }

    /// Converts a client-space pointer position into surface-local coordinates.
    #[must_use]
    pub fn to_surface(self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }
}
