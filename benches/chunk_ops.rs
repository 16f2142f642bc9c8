/// Benchmark suite for chunk writes and quad extraction
/// Covers the coherent fast paths and the fragmented worst cases
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use span_voxel::{Chunk, Point, AIR, CHUNK_SIZE};

const MAX: u8 = (CHUNK_SIZE - 1) as u8;

fn filled_chunk(id: u16) -> Chunk {
    let mut chunk = Chunk::new();
    chunk.set_block_span(Point::MIN, Point::MAX, id);
    chunk
}

/// Chunk fragmented by scattered erases, for read/mesh benchmarks that
/// should not hit the single-span fast path.
fn fragmented_chunk() -> Chunk {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut chunk = filled_chunk(1);
    for _ in 0..64 {
        let p = Point::new(
            rng.gen_range(0..=MAX),
            rng.gen_range(0..=MAX),
            rng.gen_range(0..=MAX),
        );
        chunk.remove_block(p);
    }
    chunk
}

fn bench_fill_full(c: &mut Criterion) {
    c.bench_function("fill_full", |b| {
        b.iter(|| {
            let mut chunk = Chunk::new();
            chunk.set_block_span(black_box(Point::MIN), black_box(Point::MAX), black_box(1));
            chunk
        });
    });
}

fn bench_carve_center(c: &mut Criterion) {
    c.bench_function("carve_center", |b| {
        b.iter_batched(
            || filled_chunk(1),
            |mut chunk| {
                chunk.set_block(black_box(Point::new(7, 7, 7)), AIR);
                chunk
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_carve_and_restore(c: &mut Criterion) {
    c.bench_function("carve_and_restore", |b| {
        b.iter_batched(
            || filled_chunk(1),
            |mut chunk| {
                chunk.set_block(Point::new(7, 7, 7), AIR);
                chunk.set_block(Point::new(7, 7, 7), 1);
                chunk
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_scattered_point_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scattered_point_writes");

    for count in [64, 256, 1024].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let mut rng = ChaCha8Rng::seed_from_u64(12345);
            let points: Vec<Point> = (0..count)
                .map(|_| {
                    Point::new(
                        rng.gen_range(0..=MAX),
                        rng.gen_range(0..=MAX),
                        rng.gen_range(0..=MAX),
                    )
                })
                .collect();

            b.iter(|| {
                let mut chunk = Chunk::new();
                for &p in &points {
                    chunk.set_block(p, 1);
                }
                chunk
            });
        });
    }
    group.finish();
}

fn bench_read_sweep(c: &mut Criterion) {
    c.bench_function("read_sweep_fragmented", |b| {
        let chunk = fragmented_chunk();
        b.iter(|| {
            let mut acc = 0u32;
            for x in 0..=MAX {
                for y in 0..=MAX {
                    for z in 0..=MAX {
                        acc += chunk.get_block(black_box(Point::new(x, y, z))) as u32;
                    }
                }
            }
            acc
        });
    });
}

fn bench_generate_quads(c: &mut Criterion) {
    c.bench_function("generate_quads_full", |b| {
        let chunk = filled_chunk(1);
        b.iter(|| black_box(&chunk).generate_quads());
    });

    c.bench_function("generate_quads_fragmented", |b| {
        let chunk = fragmented_chunk();
        b.iter(|| black_box(&chunk).generate_quads());
    });
}

fn bench_clone(c: &mut Criterion) {
    c.bench_function("clone_fragmented", |b| {
        let chunk = fragmented_chunk();
        b.iter(|| black_box(&chunk).clone());
    });
}

criterion_group!(
    benches,
    bench_fill_full,
    bench_carve_center,
    bench_carve_and_restore,
    bench_scattered_point_writes,
    bench_read_sweep,
    bench_generate_quads,
    bench_clone
);
criterion_main!(benches);
