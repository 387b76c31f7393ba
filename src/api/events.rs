use crate::core::{ElementId, ElementRect};
use crate::interaction::GestureMode;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverContext {
    pub elements_len: usize,
    pub gesture_mode: GestureMode,
}

/// Event stream exposed to observers.
///
/// `GeometryCommitted` fires exactly once per committed move/resize and is
/// the only notification of persisted geometry changes; hosts mirror it
/// into their own element store.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    GestureStarted {
        element: ElementId,
        mode: GestureMode,
    },
    GeometryCommitted {
        element: ElementId,
        rect: ElementRect,
    },
    GestureEnded {
        element: ElementId,
    },
}

/// Extension hook interface for bounded custom logic.
///
/// Observers can watch events and read engine context without mutating
/// engine internals directly.
pub trait EngineObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &EngineEvent, context: ObserverContext);
}
