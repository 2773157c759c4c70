#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use tactical_camera::camera::{EulerAngles, OrbitCameraController, OrbitRig};
use tactical_camera::input::RotateDirection;
use tactical_camera::options::CameraOptions;
use tactical_camera::scene::SubjectRegistry;
use tactical_camera::util::easing::ease;
use tactical_camera::CameraPose;

fn easing_benchmark(c: &mut Criterion) {
    c.bench_function("ease_in_out_cubic", |b| {
        b.iter(|| black_box(ease(black_box(1.3))))
    });
}

fn orbit_offset_benchmark(c: &mut Criterion) {
    let rig = OrbitRig::new(1500.0, 1000.0, -35.0);
    c.bench_function("orbit_offset", |b| {
        b.iter(|| black_box(rig.offset(black_box(47.0))))
    });
}

fn rotator_interp_benchmark(c: &mut Criterion) {
    let from = EulerAngles::new(-35.0, 10.0, 0.0);
    let to = EulerAngles::new(-35.0, 100.0, 0.0);
    c.bench_function("rotator_interp_to", |b| {
        b.iter(|| black_box(from.interp_to(black_box(to), 1.0 / 60.0, 2.5)))
    });
}

fn advance_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for subjects in [1_u32, 16, 256] {
        let mut registry = SubjectRegistry::new();
        let mut last = None;
        for i in 0..subjects {
            last = Some(registry.spawn(format!("s{i}"), Vec3::splat(i as f32)));
        }
        let Some(followed) = last else { continue };

        let mut sink = CameraPose::default();
        let Ok(mut camera) =
            OrbitCameraController::new(&CameraOptions::default())
        else {
            continue;
        };
        let Ok(_) = camera.initialize(followed, 0.0, &registry, &mut sink)
        else {
            continue;
        };

        group.bench_function(format!("{subjects}_subjects"), |b| {
            b.iter(|| {
                let _ = camera.rotate(RotateDirection::CounterClockwise);
                black_box(camera.advance(1.0 / 60.0, &registry, &mut sink))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    orbit_offset_benchmark,
    rotator_interp_benchmark,
    advance_benchmark
);
criterion_main!(benches);
