use std::cell::RefCell;
use std::rc::Rc;

use surface_rs::api::{
    EngineEvent, EngineObserver, ObserverContext, SurfaceEngine, SurfaceEngineConfig,
};
use surface_rs::core::{ElementId, ElementRect, SurfaceFrame};
use surface_rs::input::MouseInput;
use surface_rs::interaction::GestureMode;

fn frame() -> SurfaceFrame {
    SurfaceFrame::from_size(800.0, 600.0)
}

struct RecordingObserver {
    id: String,
    events: Rc<RefCell<Vec<EngineEvent>>>,
}

impl EngineObserver for RecordingObserver {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &EngineEvent, _context: ObserverContext) {
        self.events.borrow_mut().push(event.clone());
    }
}

fn build_engine_with_observer() -> (SurfaceEngine, ElementId, Rc<RefCell<Vec<EngineEvent>>>) {
    let mut engine = SurfaceEngine::new(SurfaceEngineConfig::default()).expect("engine init");
    let id = ElementId::from("a");
    engine.upsert_element(id.clone(), ElementRect::new(100.0, 100.0, 100.0, 100.0));

    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_observer(Box::new(RecordingObserver {
            id: "recorder".to_owned(),
            events: Rc::clone(&events),
        }))
        .expect("register observer");
    (engine, id, events)
}

#[test]
fn observer_registration_rejects_empty_and_duplicate_ids() {
    let (mut engine, _, events) = build_engine_with_observer();

    let empty = RecordingObserver {
        id: String::new(),
        events: Rc::clone(&events),
    };
    engine
        .register_observer(Box::new(empty))
        .expect_err("empty id must fail");

    let duplicate = RecordingObserver {
        id: "recorder".to_owned(),
        events: Rc::clone(&events),
    };
    engine
        .register_observer(Box::new(duplicate))
        .expect_err("duplicate id must fail");

    assert_eq!(engine.observer_count(), 1);
    assert!(engine.has_observer("recorder"));
    assert!(engine.unregister_observer("recorder"));
    assert!(!engine.unregister_observer("recorder"));
    assert_eq!(engine.observer_count(), 0);
}

#[test]
fn one_gesture_produces_started_committed_and_ended_events() {
    let (mut engine, id, events) = build_engine_with_observer();

    engine.on_mouse_down(&id, MouseInput::new(150.0, 150.0), frame());
    engine.on_mouse_move(MouseInput::new(160.0, 170.0), frame());
    engine.on_mouse_up();

    let events = events.borrow();
    assert_eq!(
        events.as_slice(),
        &[
            EngineEvent::GestureStarted {
                element: id.clone(),
                mode: GestureMode::Dragging,
            },
            EngineEvent::GeometryCommitted {
                element: id.clone(),
                rect: ElementRect::new(110.0, 120.0, 100.0, 100.0),
            },
            EngineEvent::GestureEnded { element: id },
        ]
    );
}

#[test]
fn geometry_committed_fires_once_per_move_update() {
    let (mut engine, id, events) = build_engine_with_observer();

    engine.on_mouse_down(&id, MouseInput::new(150.0, 150.0), frame());
    for step in 1..=5 {
        let x = 150.0 + f64::from(step);
        engine.on_mouse_move(MouseInput::new(x, 150.0), frame());
    }
    engine.on_mouse_up();

    let committed = events
        .borrow()
        .iter()
        .filter(|event| matches!(event, EngineEvent::GeometryCommitted { .. }))
        .count();
    assert_eq!(committed, 5);
}

#[test]
fn gesture_end_without_an_active_gesture_emits_nothing() {
    let (mut engine, _, events) = build_engine_with_observer();
    engine.on_mouse_up();
    engine.on_pointer_cancel();
    engine.on_touch_end();
    assert!(events.borrow().is_empty());
}

#[test]
fn removing_the_active_element_ends_the_gesture() {
    let (mut engine, id, events) = build_engine_with_observer();

    engine.on_mouse_down(&id, MouseInput::new(150.0, 150.0), frame());
    assert!(engine.remove_element(&id));
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);

    // The follow-up move is a silent no-op.
    let dispatch = engine.on_mouse_move(MouseInput::new(400.0, 400.0), frame());
    assert_eq!(dispatch.committed, None);

    assert_eq!(
        events.borrow().last(),
        Some(&EngineEvent::GestureEnded { element: id })
    );
}

#[test]
fn replacing_elements_without_the_active_one_ends_the_gesture() {
    let (mut engine, id, _) = build_engine_with_observer();

    engine.on_mouse_down(&id, MouseInput::new(150.0, 150.0), frame());
    engine.set_elements([(
        ElementId::from("other"),
        ElementRect::new(0.0, 0.0, 40.0, 40.0),
    )]);
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
    assert_eq!(engine.active_element_id(), None);
}

#[test]
fn replacing_elements_keeping_the_active_one_preserves_the_gesture() {
    let (mut engine, id, _) = build_engine_with_observer();

    engine.on_mouse_down(&id, MouseInput::new(150.0, 150.0), frame());
    engine.set_elements([
        (id.clone(), ElementRect::new(100.0, 100.0, 100.0, 100.0)),
        (
            ElementId::from("other"),
            ElementRect::new(0.0, 0.0, 40.0, 40.0),
        ),
    ]);
    assert_eq!(engine.gesture_mode(), GestureMode::Dragging);
    assert_eq!(engine.active_element_id(), Some(&id));
}
