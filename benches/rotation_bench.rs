//! Benchmarks for rotation conversions, gesture handlers and the transform
//! pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{DVec2, DVec3};
use orbitrig::camera::{CameraParameters, Projection, Rotation, Transforms};
use orbitrig::host::Viewport;
use orbitrig::interaction::handlers::{drag_arcball, drag_turntable};
use orbitrig::math::{
    axis_angle_from_turntable, closest_turntable_from_axis_angle, AxisAngle,
    Turntable,
};

fn conversion_benchmark(c: &mut Criterion) {
    let turntable = Turntable::new(0.7, 1.2);
    let axis_angle = AxisAngle::new(DVec3::new(0.3, -0.5, 0.8), 2.1)
        .unwrap_or(AxisAngle::IDENTITY);

    let mut group = c.benchmark_group("conversion");
    group.bench_function("turntable_to_axis_angle", |b| {
        b.iter(|| black_box(axis_angle_from_turntable(black_box(turntable))))
    });
    group.bench_function("closest_turntable", |b| {
        b.iter(|| {
            black_box(closest_turntable_from_axis_angle(black_box(axis_angle)))
        })
    });
    group.finish();
}

fn handler_benchmark(c: &mut Criterion) {
    let viewport = Viewport::new(1280.0, 720.0);
    c.bench_function("arcball_drag", |b| {
        b.iter(|| {
            black_box(drag_arcball(
                black_box(AxisAngle::IDENTITY),
                DVec2::new(640.0, 360.0),
                DVec2::new(652.0, 355.0),
                viewport,
                1.0,
            ))
        })
    });
    c.bench_function("turntable_drag", |b| {
        b.iter(|| {
            black_box(drag_turntable(
                black_box(Turntable::new(0.2, 1.0)),
                DVec2::new(3.0, -2.0),
                0.25f64.to_radians(),
                true,
            ))
        })
    });
}

fn pipeline_benchmark(c: &mut Criterion) {
    let params = CameraParameters::new(
        DVec3::new(1.0, 2.0, 3.0),
        12.0,
        0.8,
        Rotation::Turntable(Turntable::new(0.4, 1.1)),
    )
    .unwrap_or_default();
    let projection = Projection::default();
    let viewport = Some(Viewport::new(1920.0, 1080.0));

    c.bench_function("transforms_compute", |b| {
        b.iter(|| {
            black_box(Transforms::compute(
                black_box(&params),
                &projection,
                viewport,
            ))
        })
    });
}

criterion_group!(
    benches,
    conversion_benchmark,
    handler_benchmark,
    pipeline_benchmark
);
criterion_main!(benches);
