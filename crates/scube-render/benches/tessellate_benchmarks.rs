use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use scube_config::CameraConfig;
use scube_cubesphere::CubeMap;
use scube_render::*;

fn bench_tessellate_depth(c: &mut Criterion) {
    let view = ViewTransform::from_camera(&CameraConfig::cube_overview()).unwrap();
    let mut group = c.benchmark_group("tessellate_cube");
    for depth in 0..=4u32 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(tessellate_cube(&view, depth).unwrap()))
        });
    }
    group.finish();
}

fn bench_face_grid(c: &mut Criterion) {
    let view = ViewTransform::from_camera(&CameraConfig::face_view()).unwrap();
    c.bench_function("face_grid_spherical_16", |b| {
        b.iter(|| black_box(face_grid(&view, CubeMap::Spherical, 16).unwrap()))
    });
}

fn bench_svg_render(c: &mut Criterion) {
    let view = ViewTransform::from_camera(&CameraConfig::cube_overview()).unwrap();
    let polygons = tessellate_cube(&view, 4).unwrap();
    let mut doc = SvgDocument::new(512, 512);
    doc.group("black").extend(&polygons);
    c.bench_function("svg_render_depth_4", |b| {
        b.iter(|| black_box(doc.to_svg_string()))
    });
}

criterion_group!(benches, bench_tessellate_depth, bench_face_grid, bench_svg_render);
criterion_main!(benches);
