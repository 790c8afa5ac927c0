//! Base hash and probe generation benchmarks
//!
//! Every add or contains call hashes its input twice (FNV-1a and CRC-32)
//! and then derives k positions by double hashing. These benchmarks split
//! that cost into its parts.
use bloomlite::hash::{crc32_ieee, fnv1a_32, DoubleHashing, FnvCrc32};
use bloomlite::BaseHasher;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

mod common;
use common::*;

fn bench_base_hashes(c: &mut Criterion) {
    let mut group = c.benchmark_group("base_hashes");

    for &len in KEY_LENGTHS {
        let input = generate_bytes(1, len).remove(0);
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("fnv1a_32", len), &input, |b, input| {
            b.iter(|| fnv1a_32(black_box(input)));
        });

        group.bench_with_input(BenchmarkId::new("crc32_ieee", len), &input, |b, input| {
            b.iter(|| crc32_ieee(black_box(input)));
        });

        group.bench_with_input(BenchmarkId::new("hash_pair", len), &input, |b, input| {
            b.iter(|| FnvCrc32.hash_pair(black_box(input)));
        });
    }

    group.finish();
}

fn bench_probe_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe_generation");
    let (h1, h2) = FnvCrc32.hash_pair(b"probe-benchmark");

    for &k in &[3u32, 7, 10, 14, 20] {
        group.throughput(Throughput::Elements(u64::from(k)));
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| {
                DoubleHashing
                    .positions(black_box(h1), black_box(h2), k, 1_000_003)
                    .fold(0u32, |acc, pos| acc ^ pos)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_base_hashes, bench_probe_generation);
criterion_main!(benches);
