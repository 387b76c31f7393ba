use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use surface_rs::api::{SurfaceEngine, SurfaceEngineConfig};
use surface_rs::core::{
    ElementId, ElementRect, ResizeDirection, SurfaceFrame, clamp_to_frame, resize_direction_at,
    resized_rect,
};
use surface_rs::input::MouseInput;

fn bench_handle_hit_test(c: &mut Criterion) {
    c.bench_function("handle_hit_test", |b| {
        b.iter(|| {
            let _ = resize_direction_at(
                black_box(97.0),
                black_box(3.0),
                black_box(100.0),
                black_box(80.0),
                black_box(8.0),
            );
        })
    });
}

fn bench_resize_and_clamp(c: &mut Criterion) {
    let frame = SurfaceFrame::from_size(1920.0, 1080.0);
    let origin = ElementRect::new(400.0, 300.0, 200.0, 150.0);

    c.bench_function("resize_and_clamp", |b| {
        b.iter(|| {
            let proposed = resized_rect(
                black_box(origin),
                black_box(1900.0),
                black_box(-50.0),
                black_box(ResizeDirection::NorthEast),
                black_box(5.0),
            );
            let _ = clamp_to_frame(proposed, black_box(frame), black_box(5.0));
        })
    });
}

fn bench_engine_drag_dispatch_1k(c: &mut Criterion) {
    let frame = SurfaceFrame::from_size(1920.0, 1080.0);
    let mut engine = SurfaceEngine::new(SurfaceEngineConfig::default()).expect("engine init");
    let id = ElementId::from("bench");
    engine.upsert_element(id.clone(), ElementRect::new(100.0, 100.0, 200.0, 150.0));
    engine.on_mouse_down(&id, MouseInput::new(200.0, 175.0), frame);

    c.bench_function("engine_drag_dispatch_1k", |b| {
        b.iter(|| {
            for step in 0..1_000 {
                let x = 200.0 + f64::from(step % 500);
                let _ = engine.on_mouse_move(black_box(MouseInput::new(x, 400.0)), frame);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_handle_hit_test,
    bench_resize_and_clamp,
    bench_engine_drag_dispatch_1k
);
criterion_main!(benches);
