// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use understory_image_zoom::{ImageViewport, ViewportInput, ZoomConfig};

fn loaded_viewport() -> ImageViewport {
    let mut vp = ImageViewport::new(Size::new(1280.0, 720.0), ZoomConfig::default())
        .expect("valid container");
    vp.on_image_loaded(Size::new(6000.0, 4000.0));
    vp
}

fn bench_wheel_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_zoom/wheel");

    // One wheel notch per frame, alternating direction so the scale never
    // saturates and every call does the full anchor computation.
    for notches in [16_usize, 256, 4_096] {
        group.bench_with_input(BenchmarkId::new("zoom_at", notches), &notches, |b, &n| {
            b.iter_batched(
                loaded_viewport,
                |mut vp| {
                    for i in 0..n {
                        let delta = if i % 2 == 0 { 0.25 } else { -0.2 };
                        let anchor = Point::new((i % 1280) as f64, (i % 720) as f64);
                        vp.zoom_at(anchor, delta);
                    }
                    black_box(vp);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_zoom/gestures");

    group.bench_function("pinch_frames_256", |b| {
        b.iter_batched(
            loaded_viewport,
            |mut vp| {
                let mut input = ViewportInput::default();
                let center = Point::new(640.0, 360.0);
                input.touch_start(
                    &mut vp,
                    &[center - Vec2::new(50.0, 0.0), center + Vec2::new(50.0, 0.0)],
                );
                for i in 0..256 {
                    let half = 50.0 + f64::from(i % 64) * 4.0;
                    input.touch_move(
                        &mut vp,
                        &[center - Vec2::new(half, 0.0), center + Vec2::new(half, 0.0)],
                    );
                }
                input.touch_end(&mut vp, &[]);
                black_box(vp);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("drag_frames_256", |b| {
        b.iter_batched(
            || {
                let mut vp = loaded_viewport();
                vp.zoom_at(Point::new(640.0, 360.0), 1.0);
                vp
            },
            |mut vp| {
                let mut input = ViewportInput::default();
                input.touch_start(&mut vp, &[Point::new(600.0, 300.0)]);
                for i in 0..256 {
                    let x = 600.0 + f64::from(i % 32) * 3.0;
                    input.touch_move(&mut vp, &[Point::new(x, 300.0)]);
                }
                input.touch_end(&mut vp, &[]);
                black_box(vp);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_wheel_zoom, bench_gestures);
criterion_main!(benches);
