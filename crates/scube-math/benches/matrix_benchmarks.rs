use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scube_math::*;

fn overview_pipeline() -> Vec<Mat4> {
    vec![
        Mat4::translate(Vec3::new(256.0, 256.0, 0.0)),
        Mat4::scale(Vec3::new(256.0, 256.0, 1.0)),
        Mat4::perspective(&Frustum::symmetric(0.25, 1.0, 10.0)).unwrap(),
        Mat4::translate(Vec3::new(0.0, 0.0, -5.0)),
        Mat4::rotate_x((-10.0f64).to_radians()),
        Mat4::rotate_y(25.0f64.to_radians()),
    ]
}

fn bench_multiply(c: &mut Criterion) {
    let a = black_box(Mat4::rotate_x(0.3));
    let b = black_box(Mat4::translate(Vec3::new(1.0, 2.0, 3.0)));
    c.bench_function("mat4_multiply", |bencher| {
        bencher.iter(|| black_box(a.multiply(&b)))
    });
}

fn bench_compose(c: &mut Criterion) {
    let pipeline = black_box(overview_pipeline());
    c.bench_function("mat4_compose_view", |bencher| {
        bencher.iter(|| black_box(Mat4::compose(&pipeline)))
    });
}

fn bench_transform_point(c: &mut Criterion) {
    let m = Mat4::compose(&overview_pipeline());
    let p = black_box(Vec3::new(0.3, -0.4, 0.86));
    c.bench_function("mat4_transform_point", |bencher| {
        bencher.iter(|| black_box(m.transform_point(p)))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let v = black_box(Vec3::new(-1.0, -1.0, 1.0));
    c.bench_function("vec3_normalize", |bencher| {
        bencher.iter(|| black_box(v.normalize()))
    });
}

fn bench_cross_product(c: &mut Criterion) {
    let a = black_box(Vec3::new(1.0, 2.0, 3.0));
    let b = black_box(Vec3::new(4.0, 5.0, 6.0));
    c.bench_function("vec3_cross", |bencher| {
        bencher.iter(|| black_box(a.cross(b)))
    });
}

criterion_group!(
    benches,
    bench_multiply,
    bench_compose,
    bench_transform_point,
    bench_normalize,
    bench_cross_product
);
criterion_main!(benches);
