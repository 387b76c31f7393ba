//! Gesture state machine for drag and resize interactions.
//!
//! Legal transitions are `idle → dragging → idle` and
//! `idle → resizing → idle` only. A start while a gesture is armed is
//! ignored, so at most one element is manipulated at a time, and gesture
//! end is unconditional regardless of how the gesture terminated.

use serde::{Deserialize, Serialize};

use crate::core::{ElementId, ElementRect, ResizeDirection};

/// Public gesture mode, mirrored into host styling and observer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureMode {
    Idle,
    Dragging,
    Resizing,
}

/// Pointer position relative to the grabbed element's top-left corner,
/// captured once at gesture start so the grabbed point stays under the
/// pointer for the whole drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrabOffset {
    pub x: f64,
    pub y: f64,
}

/// Cosmetic affordance hint for hover without an active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverHint {
    Move,
    Resize(ResizeDirection),
}

impl HoverHint {
    /// CSS-style cursor name hosts can map onto their platform cursor set.
    #[must_use]
    pub fn cursor_name(self) -> String {
        match self {
            Self::Move => "grab".to_owned(),
            Self::Resize(direction) => format!("{}-resize", direction.as_compass()),
        }
    }
}

/// Transient interaction session. Exists only while a gesture is in
/// progress and resets to `Idle` on every gesture end.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,

    Dragging {
        element: ElementId,
        grab_offset: GrabOffset,
    },

    Resizing {
        element: ElementId,
        direction: ResizeDirection,
        /// Element box at gesture start; every resize proposal is computed
        /// from this box, not from the last committed one.
        origin: ElementRect,
    },
}

impl Gesture {
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        match self {
            Self::Idle => GestureMode::Idle,
            Self::Dragging { .. } => GestureMode::Dragging,
            Self::Resizing { .. } => GestureMode::Resizing,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn active_element(&self) -> Option<&ElementId> {
        match self {
            Self::Idle => None,
            Self::Dragging { element, .. } | Self::Resizing { element, .. } => Some(element),
        }
    }

    #[must_use]
    pub fn resize_direction(&self) -> Option<ResizeDirection> {
        match self {
            Self::Resizing { direction, .. } => Some(*direction),
            _ => None,
        }
    }

    /// Arms a drag. Ignored unless idle.
    pub fn start_dragging(&mut self, element: ElementId, grab_offset: GrabOffset) {
        if self.is_armed() {
            return;
        }
        *self = Self::Dragging {
            element,
            grab_offset,
        };
    }

    /// Arms a resize. Ignored unless idle.
    pub fn start_resizing(
        &mut self,
        element: ElementId,
        direction: ResizeDirection,
        origin: ElementRect,
    ) {
        if self.is_armed() {
            return;
        }
        *self = Self::Resizing {
            element,
            direction,
            origin,
        };
    }

    /// Unconditional return to idle. Safe to call when already idle.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }
}
