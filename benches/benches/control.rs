// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use cartoview_control::{
    AllocationError, Compositor, MapControl, PointerButton, QualityMode, ViewerConfig,
};
use cartoview_regions::Layer;
use kurbo::{Point, Rect, Size};

/// Compositor that only counts frames.
#[derive(Default)]
struct NullCompositor {
    frames: u64,
}

impl Compositor for NullCompositor {
    fn draw_background(&mut self, _dest: Rect) {}

    fn draw_composited(&mut self, _src: Rect, _dest: Rect, _quality: QualityMode) {
        self.frames += 1;
    }

    fn draw_empty(&mut self, _viewport: Rect) {}

    fn render_overlay(&mut self, _content_size: Size) -> Result<(), AllocationError> {
        Ok(())
    }
}

const CONFIG_JSON: &str = r#"{
    "tick_interval_ms": 16,
    "max_zoom": 6.0,
    "click_slop": 2.0
}"#;

fn map() -> MapControl<NullCompositor, u32> {
    let config: ViewerConfig = serde_json::from_str(CONFIG_JSON).unwrap();
    let mut map = MapControl::new(Size::new(1280.0, 720.0), config, NullCompositor::default())
        .unwrap();
    map.load_content(8192, 8192);
    for i in 0..512_u32 {
        let x = i32::try_from(i % 32).unwrap() * 256 + 128;
        let y = i32::try_from(i / 32).unwrap() * 512 + 256;
        map.regions_mut()
            .layer_mut(Layer::Markers)
            .add_region((x, y), 12, i);
    }
    map
}

fn bench_control(c: &mut Criterion) {
    c.bench_function("control_config_from_json", |b| {
        b.iter(|| {
            let config: ViewerConfig = serde_json::from_str(black_box(CONFIG_JSON)).unwrap();
            black_box(config.validate().is_ok())
        });
    });

    c.bench_function("control_hover", |b| {
        let mut map = map();
        b.iter(|| {
            for i in 0..128 {
                map.pointer_move(Point::new(f64::from(i) * 10.0, f64::from(i) * 5.0));
            }
            black_box(map.drain_notifications().count())
        });
    });

    c.bench_function("control_flick_and_settle", |b| {
        b.iter_batched(
            map,
            |mut map| {
                map.pointer_down(Point::new(640.0, 360.0), PointerButton::Primary);
                for i in 1..=20 {
                    map.pointer_move(Point::new(640.0 - f64::from(i) * 12.0, 360.0));
                }
                map.pointer_up(Point::new(400.0, 360.0), PointerButton::Primary);
                while map.is_scrolling() {
                    map.tick(16);
                }
                map.tick(250);
                black_box(map.compositor().frames)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_control);
criterion_main!(benches);
