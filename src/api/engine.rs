use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::core::{
    ElementId, ElementRect, SurfaceFrame, clamp_to_frame, resize_direction_at, resized_rect,
};
use crate::error::{SurfaceError, SurfaceResult};
use crate::input::{MouseInput, PointerEvent, PointerPhase, PointerSource, TouchInput};
use crate::interaction::{Gesture, GestureMode, GrabOffset, HoverHint};

use super::{
    EngineEvent, EngineObserver, InteractionInputBehavior, ObserverContext, SurfaceEngineConfig,
};

/// Geometry written back to the element collection by one commit.
#[derive(Debug, Clone, PartialEq)]
pub struct CommittedGeometry {
    pub element: ElementId,
    pub rect: ElementRect,
}

/// Outcome of routing one pointer-move through the engine.
///
/// `suppress_default` asks the host to cancel the platform's default
/// scroll/pan handling; it is set exactly for touch moves that arrive
/// during an active gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerDispatch {
    pub committed: Option<CommittedGeometry>,
    pub suppress_default: bool,
}

/// Main orchestration facade consumed by host applications.
///
/// `SurfaceEngine` owns the element collection, the gesture state machine
/// and the pointer-source latch, and routes normalized pointer events into
/// clamped geometry commits. Hosts bind the `down` entry points per
/// element and the `move`/`up`/`cancel` entry points at the top-level
/// input surface, so a pointer released anywhere still ends the gesture.
pub struct SurfaceEngine {
    config: SurfaceEngineConfig,
    elements: IndexMap<ElementId, ElementRect>,
    gesture: Gesture,
    /// Set while a touch gesture is active; mouse events are ignored until
    /// the touch sequence ends, shielding against synthetic mouse events
    /// some platforms emit after touch.
    touch_latched: bool,
    observers: Vec<Box<dyn EngineObserver>>,
}

impl core::fmt::Debug for SurfaceEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SurfaceEngine")
            .field("config", &self.config)
            .field("elements", &self.elements)
            .field("gesture", &self.gesture)
            .field("touch_latched", &self.touch_latched)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SurfaceEngine {
    pub fn new(config: SurfaceEngineConfig) -> SurfaceResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            elements: IndexMap::new(),
            gesture: Gesture::Idle,
            touch_latched: false,
            observers: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> SurfaceEngineConfig {
        self.config
    }

    #[must_use]
    pub fn interaction_input_behavior(&self) -> InteractionInputBehavior {
        self.config.input_behavior
    }

    pub fn set_interaction_input_behavior(&mut self, behavior: InteractionInputBehavior) {
        self.config.input_behavior = behavior;
    }

    /// Replaces the element collection from the host's store.
    ///
    /// Ends the current gesture when its element is no longer present.
    pub fn set_elements(&mut self, elements: impl IntoIterator<Item = (ElementId, ElementRect)>) {
        self.elements = elements.into_iter().collect();
        let active_is_gone = match self.gesture.active_element() {
            Some(active) => !self.elements.contains_key(active),
            None => false,
        };
        if active_is_gone {
            self.end_gesture();
        }
    }

    pub fn upsert_element(&mut self, id: ElementId, rect: ElementRect) {
        self.elements.insert(id, rect);
    }

    /// Removes an element. Returns `true` when removed; ends the current
    /// gesture when the removed element was its target.
    pub fn remove_element(&mut self, id: &ElementId) -> bool {
        if self.elements.shift_remove(id).is_none() {
            return false;
        }
        if self.gesture.active_element() == Some(id) {
            self.end_gesture();
        }
        true
    }

    #[must_use]
    pub fn elements(&self) -> &IndexMap<ElementId, ElementRect> {
        &self.elements
    }

    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<ElementRect> {
        self.elements.get(id).copied()
    }

    /// Element currently being manipulated, for host selection styling.
    #[must_use]
    pub fn active_element_id(&self) -> Option<&ElementId> {
        self.gesture.active_element()
    }

    #[must_use]
    pub fn gesture_mode(&self) -> GestureMode {
        self.gesture.mode()
    }

    /// Mouse pointer-down on an element's surface.
    ///
    /// Hosts route downs on excluded sub-controls (e.g. a settings
    /// affordance inside the element) to their own handlers instead of
    /// calling this.
    pub fn on_mouse_down(&mut self, id: &ElementId, input: MouseInput, frame: SurfaceFrame) {
        self.pointer_down(id, PointerEvent::from_mouse(input, PointerPhase::Down), frame);
    }

    /// Touch-start on an element's surface. Zero-touch events are dropped.
    pub fn on_touch_start(&mut self, id: &ElementId, input: &TouchInput, frame: SurfaceFrame) {
        let Some(event) = PointerEvent::from_touch(input, PointerPhase::Down) else {
            trace!(element = %id, "dropping touch start without touch points");
            return;
        };
        self.pointer_down(id, event, frame);
    }

    /// Mouse move bound at the top-level input surface.
    pub fn on_mouse_move(&mut self, input: MouseInput, frame: SurfaceFrame) -> PointerDispatch {
        self.pointer_move(PointerEvent::from_mouse(input, PointerPhase::Move), frame)
    }

    /// Touch move bound at the top-level input surface.
    pub fn on_touch_move(&mut self, input: &TouchInput, frame: SurfaceFrame) -> PointerDispatch {
        let Some(event) = PointerEvent::from_touch(input, PointerPhase::Move) else {
            trace!("dropping touch move without touch points");
            return PointerDispatch::default();
        };
        self.pointer_move(event, frame)
    }

    /// Mouse release anywhere. Ignored while a touch gesture holds the latch.
    pub fn on_mouse_up(&mut self) {
        if self.touch_latched {
            trace!("ignoring mouse up while touch gesture is latched");
            return;
        }
        self.end_gesture();
    }

    /// Touch sequence end. Releases the touch latch and ends the gesture.
    pub fn on_touch_end(&mut self) {
        self.touch_latched = false;
        self.end_gesture();
    }

    /// Pointer cancellation from any source (e.g. window blur or a
    /// platform-level touch cancel). Unconditionally returns to idle.
    pub fn on_pointer_cancel(&mut self) {
        self.touch_latched = false;
        self.end_gesture();
    }

    /// Cosmetic affordance hint for hovering over an element (mouse only).
    ///
    /// Returns `None` while a gesture is armed or the element is unknown;
    /// never mutates geometry and never starts a gesture.
    #[must_use]
    pub fn hover_hint(
        &self,
        id: &ElementId,
        input: MouseInput,
        frame: SurfaceFrame,
    ) -> Option<HoverHint> {
        if self.gesture.is_armed() || !frame.is_valid() {
            return None;
        }
        let rect = self.elements.get(id).copied()?;
        let (surface_x, surface_y) = frame.to_surface(input.client_x, input.client_y);
        let direction = resize_direction_at(
            surface_x - rect.x,
            surface_y - rect.y,
            rect.width,
            rect.height,
            self.config.edge_tolerance,
        );
        match direction {
            Some(direction) if self.config.input_behavior.handle_resize => {
                Some(HoverHint::Resize(direction))
            }
            _ => Some(HoverHint::Move),
        }
    }

    fn pointer_down(&mut self, id: &ElementId, event: PointerEvent, frame: SurfaceFrame) {
        if self.gesture.is_armed() {
            trace!(element = %id, "ignoring gesture start while a gesture is armed");
            return;
        }
        if self.touch_latched && event.source == PointerSource::Mouse {
            trace!(element = %id, "ignoring mouse down while touch gesture is latched");
            return;
        }
        if !frame.is_valid() {
            warn!(
                width = frame.width,
                height = frame.height,
                "dropping gesture start against a degenerate surface frame"
            );
            return;
        }
        let Some(rect) = self.elements.get(id).copied() else {
            debug!(element = %id, "dropping gesture start for unknown element");
            return;
        };

        let behavior = self.config.input_behavior;
        let (surface_x, surface_y) = frame.to_surface(event.client_x, event.client_y);
        let local_x = surface_x - rect.x;
        let local_y = surface_y - rect.y;
        let direction = resize_direction_at(
            local_x,
            local_y,
            rect.width,
            rect.height,
            self.config.edge_tolerance,
        );

        match direction {
            Some(direction) if behavior.allows_resize(event.source) => {
                self.gesture.start_resizing(id.clone(), direction, rect);
            }
            _ => {
                if !behavior.allows_drag(event.source) {
                    return;
                }
                self.gesture.start_dragging(
                    id.clone(),
                    GrabOffset {
                        x: local_x,
                        y: local_y,
                    },
                );
            }
        }

        if event.source == PointerSource::Touch {
            self.touch_latched = true;
        }
        debug!(element = %id, mode = ?self.gesture.mode(), "gesture started");
        self.emit_event(EngineEvent::GestureStarted {
            element: id.clone(),
            mode: self.gesture.mode(),
        });
    }

    fn pointer_move(&mut self, event: PointerEvent, frame: SurfaceFrame) -> PointerDispatch {
        let mut dispatch = PointerDispatch::default();
        if !self.gesture.is_armed() {
            return dispatch;
        }
        if self.touch_latched && event.source == PointerSource::Mouse {
            trace!("ignoring mouse move while touch gesture is latched");
            return dispatch;
        }
        dispatch.suppress_default = event.source == PointerSource::Touch;
        if !frame.is_valid() {
            warn!(
                width = frame.width,
                height = frame.height,
                "dropping gesture update against a degenerate surface frame"
            );
            return dispatch;
        }
        let Some(active) = self.gesture.active_element().cloned() else {
            return dispatch;
        };
        let Some(current) = self.elements.get(&active).copied() else {
            trace!(element = %active, "dropping gesture update for missing element");
            return dispatch;
        };

        let (surface_x, surface_y) = frame.to_surface(event.client_x, event.client_y);
        let proposed = match &self.gesture {
            Gesture::Dragging { grab_offset, .. } => ElementRect::new(
                surface_x - grab_offset.x,
                surface_y - grab_offset.y,
                current.width,
                current.height,
            ),
            Gesture::Resizing {
                direction, origin, ..
            } => resized_rect(
                *origin,
                surface_x,
                surface_y,
                *direction,
                self.config.min_dimension,
            ),
            Gesture::Idle => return dispatch,
        };

        let rect = clamp_to_frame(proposed, frame, self.config.min_dimension);
        self.elements.insert(active.clone(), rect);
        trace!(
            element = %active,
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "geometry committed"
        );
        self.emit_event(EngineEvent::GeometryCommitted {
            element: active.clone(),
            rect,
        });
        dispatch.committed = Some(CommittedGeometry {
            element: active,
            rect,
        });
        dispatch
    }

    fn end_gesture(&mut self) {
        let Some(element) = self.gesture.active_element().cloned() else {
            self.gesture.end();
            return;
        };
        self.gesture.end();
        debug!(element = %element, "gesture ended");
        self.emit_event(EngineEvent::GestureEnded { element });
    }

    /// Registers an observer with unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn EngineObserver>) -> SurfaceResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(SurfaceError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.observers.iter().any(|entry| entry.id() == observer_id) {
            return Err(SurfaceError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers.iter().any(|entry| entry.id() == observer_id)
    }

    fn emit_event(&mut self, event: EngineEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = ObserverContext {
            elements_len: self.elements.len(),
            gesture_mode: self.gesture.mode(),
        };
        for observer in &mut self.observers {
            observer.on_event(&event, context);
        }
    }
}
