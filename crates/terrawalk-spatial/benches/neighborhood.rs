use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use terrawalk_geom::{Aabb, Rgb, Vec3};
use terrawalk_spatial::{Owner, Shape, SpatialIndex, SurfaceObject};

// Scatters blocks over a 1000x1000 area on a fixed lattice.
fn populated(count: usize) -> SpatialIndex {
    let mut idx = SpatialIndex::new(25.0);
    let side = (count as f64).sqrt().ceil() as usize;
    let step = 1000.0 / side as f64;
    for i in 0..count {
        let p = Vec3::new((i % side) as f64 * step, 1.0, (i / side) as f64 * step);
        let shape = Shape::Box(Aabb::from_center_size(p, Vec3::new(2.0, 2.0, 2.0)));
        idx.insert(SurfaceObject::new(p, shape, Owner::Player, "foundation", Rgb::from_hex(0xa9a9a9)));
    }
    idx
}

fn bench_neighborhood(c: &mut Criterion) {
    let idx = populated(20_000);
    c.bench_function("neighborhood_ring1", |b| {
        b.iter(|| black_box(idx.neighborhood(black_box(500.0), black_box(500.0), 1).count()))
    });
    c.bench_function("highest_surface_below", |b| {
        b.iter(|| black_box(idx.highest_surface_below(black_box(500.0), 10.0, black_box(500.0), 0.6)))
    });
    c.bench_function("is_occupied", |b| {
        b.iter(|| black_box(idx.is_occupied(black_box(Vec3::new(500.0, 1.0, 500.0)), 0.1)))
    });
}

criterion_group!(benches, bench_neighborhood);
criterion_main!(benches);
