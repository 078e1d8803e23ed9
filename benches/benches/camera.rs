// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use cartoview_camera::Camera;
use cartoview_motion::{Momentum, Navigator};
use kurbo::{Point, Size, Vec2};

fn camera() -> Camera {
    let mut camera = Camera::new(Size::new(1280.0, 720.0));
    camera.load_content(8192, 8192);
    camera
}

fn bench_camera(c: &mut Criterion) {
    c.bench_function("camera_wheel_zoom_sweep", |b| {
        let mut camera = camera();
        b.iter(|| {
            let anchor = Point::new(300.0, 200.0);
            for _ in 0..16 {
                camera.set_zoom(camera.zoom() * 1.25, anchor);
            }
            for _ in 0..16 {
                camera.set_zoom(camera.zoom() / 1.25, anchor);
            }
            black_box(camera.visible_rect())
        });
    });

    c.bench_function("camera_drag_pan", |b| {
        let mut camera = camera();
        b.iter(|| {
            for i in 0..64 {
                let dir = if i < 32 { 1.0 } else { -1.0 };
                black_box(camera.pan_by(Vec2::new(dir * 37.0, dir * -23.0)));
            }
        });
    });

    c.bench_function("camera_screen_to_content", |b| {
        let camera = camera();
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..256 {
                let pt = Point::new(f64::from(i) * 5.0, f64::from(i) * 2.8);
                if let Some(content) = camera.screen_to_content(black_box(pt)) {
                    acc += content.x + content.y;
                }
            }
            black_box(acc)
        });
    });
}

fn bench_motion(c: &mut Criterion) {
    c.bench_function("momentum_run_to_idle", |b| {
        b.iter_batched(
            || {
                let mut momentum = Momentum::new();
                momentum.release(Point::new(0.0, 0.0), Point::new(-60.0, -45.0));
                (camera(), momentum)
            },
            |(mut camera, mut momentum)| {
                while momentum.is_active() {
                    black_box(momentum.tick(&mut camera));
                }
                camera
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("navigator_full_flight", |b| {
        b.iter_batched(
            || {
                let camera = camera();
                let mut navigator = Navigator::new();
                navigator.start(&camera, Point::new(8000.0, 100.0), true);
                (camera, navigator)
            },
            |(mut camera, mut navigator)| {
                while navigator.is_active() {
                    black_box(navigator.tick(&mut camera));
                }
                camera
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_camera, bench_motion);
criterion_main!(benches);
