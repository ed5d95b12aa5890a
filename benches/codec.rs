//! Benchmarks for 3CPF encoding and decoding.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use cpf3d::{CoordinateOrder, Frame, Point, PointFrames, decode};
use glam::Vec3;

fn build(points: usize, frames: usize) -> PointFrames {
    let mut pf = PointFrames::new();
    for i in 0..points {
        pf.add_point(Point::new(i as u8, (i * 7) as u8, (i * 13) as u8), None)
            .unwrap();
    }
    for f in 0..frames {
        let t = f as f32 * 0.1;
        let frame: Frame = (0..points)
            .map(|i| {
                let a = i as f32 * 0.01 + t;
                Vec3::new(a.cos(), a.sin(), t)
            })
            .collect();
        pf.add_frame(frame).unwrap();
    }
    pf
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for (points, frames) in [(600, 60), (5_000, 120), (20_000, 240)] {
        let pf = build(points, frames);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", points, frames)),
            &pf,
            |b, pf| {
                b.iter(|| black_box(pf.to_bytes().unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for order in ["xyz", "zyx"] {
        let order: CoordinateOrder = order.parse().unwrap();
        let bytes = build(5_000, 120).to_bytes().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(order), &bytes, |b, bytes| {
            b.iter(|| black_box(decode(black_box(bytes), order).unwrap()));
        });
    }

    group.finish();
}

fn bench_rotation(c: &mut Criterion) {
    let mut pf = build(5_000, 120);
    c.bench_function("apply_rotation_5000x120", |b| {
        b.iter(|| {
            pf.apply_rotation(black_box(1.0), black_box(2.0), black_box(3.0));
        });
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_rotation);
criterion_main!(benches);
