use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::{Matrix4, UnitQuaternion};
use vector3d::Vector3d;

fn bench_geometry(c: &mut Criterion) {
    let a = Vector3d::new(1.25, -2.5, 3.75);
    let b = Vector3d::new(-4.0, 5.5, 0.125);

    c.bench_function("cross", |bench| {
        bench.iter(|| black_box(a).cross(&black_box(b)))
    });
    c.bench_function("normalize", |bench| bench.iter(|| black_box(a).normalize()));
    c.bench_function("lerp", |bench| {
        bench.iter(|| black_box(a).lerp(&black_box(b), black_box(0.3)))
    });
}

fn bench_transform(c: &mut Criterion) {
    let v = Vector3d::new(1.0, 2.0, 3.0);
    let rotation = UnitQuaternion::from_euler_angles(0.3f32, 0.6, 0.9);
    let matrix: Matrix4<f32> = rotation.to_homogeneous().transpose();

    c.bench_function("transform_matrix", |bench| {
        bench.iter(|| black_box(v).transform(black_box(&matrix)))
    });
    c.bench_function("rotate_quaternion", |bench| {
        bench.iter(|| black_box(v).rotate(black_box(&rotation)))
    });
}

criterion_group!(benches, bench_geometry, bench_transform);
criterion_main!(benches);
