use serde::{Deserialize, Serialize};

use crate::input::PointerSource;

/// Host-configurable interaction input gates.
///
/// Disabled paths are silent no-ops, never validation errors. With
/// `handle_resize` off, a pointer-down in a handle zone falls through to a
/// body drag; with `handle_drag` off, body pointer-downs are ignored while
/// handle resizing still works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionInputBehavior {
    /// Master enable for body-drag gestures.
    pub handle_drag: bool,
    /// Master enable for handle-resize gestures.
    pub handle_resize: bool,
    /// Enables gestures originating from mouse events.
    pub drag_mouse: bool,
    /// Enables gestures originating from touch events.
    pub drag_touch: bool,
}

impl Default for InteractionInputBehavior {
    fn default() -> Self {
        Self {
            handle_drag: true,
            handle_resize: true,
            drag_mouse: true,
            drag_touch: true,
        }
    }
}

impl InteractionInputBehavior {
    #[must_use]
    pub(crate) fn source_enabled(self, source: PointerSource) -> bool {
        match source {
            PointerSource::Mouse => self.drag_mouse,
            PointerSource::Touch => self.drag_touch,
        }
    }

    #[must_use]
    pub(crate) fn allows_drag(self, source: PointerSource) -> bool {
        self.handle_drag && self.source_enabled(source)
    }

    #[must_use]
    pub(crate) fn allows_resize(self, source: PointerSource) -> bool {
        self.handle_resize && self.source_enabled(source)
    }
}
