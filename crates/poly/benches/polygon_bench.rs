//! Benchmarks for monotone polygon construction and queries.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rectigon_core::halton::Vdcorput;
use rectigon_core::Point;
use rectigon_poly::{
    create_ymono_polygon, create_ymono_rpolygon, point_in_polygon, Polygon, RPolygon,
};

fn halton_points(n: usize) -> Vec<Point<i64, i64>> {
    let mut gen_x = Vdcorput::new(3, 7);
    let mut gen_y = Vdcorput::new(2, 11);
    (0..n)
        .map(|_| Point::new(gen_x.pop() as i64, gen_y.pop() as i64))
        .collect()
}

fn bench_create_ymono(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_ymono");

    for &n in &[100usize, 1000, 10000] {
        let points = halton_points(n);

        group.bench_with_input(BenchmarkId::new("polygon", n), &points, |b, points| {
            b.iter(|| {
                let mut set = points.clone();
                create_ymono_polygon(black_box(&mut set));
                Polygon::new(&set).signed_area_x2()
            });
        });

        group.bench_with_input(BenchmarkId::new("rpolygon", n), &points, |b, points| {
            b.iter(|| {
                let mut set = points.clone();
                create_ymono_rpolygon(black_box(&mut set));
                RPolygon::new(&set).signed_area()
            });
        });
    }
    group.finish();
}

fn bench_point_in_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_in_polygon");

    for &n in &[100usize, 1000, 10000] {
        let mut points = halton_points(n);
        create_ymono_polygon(&mut points);
        let query = Point::new(1093i64, 1024);

        group.bench_with_input(BenchmarkId::new("crossing", n), &points, |b, points| {
            b.iter(|| point_in_polygon(black_box(points), black_box(&query)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_create_ymono, bench_point_in_polygon);
criterion_main!(benches);
