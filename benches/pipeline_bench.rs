use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use rect_mesh::algs::boundary::order_boundary;
use rect_mesh::algs::edges::extract_edges;
use rect_mesh::algs::triangulate::TriangulationKind;
use rect_mesh::mesh_generation::RectDomain;
use rect_mesh::pipeline::{MeshOptions, MeshPipeline};

fn domain(n: usize) -> RectDomain {
    let h = 1.0 / (n as f64 + 0.5);
    RectDomain::new(0.0, 1.0, 0.0, 1.0, h, h)
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for &n in &[32usize, 128usize] {
        group.bench_with_input(BenchmarkId::new("delaunay", n), &n, |b, &n| {
            let pipeline = MeshPipeline::new(domain(n));
            b.iter(|| black_box(pipeline.run().expect("mesh")))
        });
        group.bench_with_input(BenchmarkId::new("structured", n), &n, |b, &n| {
            let pipeline = MeshPipeline::new(domain(n)).with_options(MeshOptions {
                triangulation: TriangulationKind::Structured,
                ..MeshOptions::default()
            });
            b.iter(|| black_box(pipeline.run().expect("mesh")))
        });
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let mesh = MeshPipeline::new(domain(128)).run().expect("mesh");

    group.bench_function("extract_edges", |b| {
        b.iter(|| black_box(extract_edges(&mesh.triangles).expect("edges")))
    });
    group.bench_function("order_boundary", |b| {
        b.iter(|| black_box(order_boundary(&mesh.points, &mesh.boundary_edges).expect("loop")))
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_stages);
criterion_main!(benches);
