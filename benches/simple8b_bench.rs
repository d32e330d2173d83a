// In benches/simple8b_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simple8b::kernels::{delta, simple8b as s8b, zigzag};
use simple8b::{compress, decompress, CodecConfig};

// --- Mock data generation ---

/// Small values with occasional zero runs, typical of delta-encoded counters.
fn generate_narrow_values(size: usize, rng: &mut StdRng) -> Vec<u64> {
    (0..size)
        .map(|i| if (i / 500) % 4 == 0 { 0 } else { rng.random_range(0..64) })
        .collect()
}

/// Values spread across every selector width.
fn generate_mixed_width_values(size: usize, rng: &mut StdRng) -> Vec<u64> {
    (0..size)
        .map(|_| {
            let bits = rng.random_range(0..=60u32);
            if bits == 0 {
                0
            } else {
                rng.random_range(0..(1u64 << bits))
            }
        })
        .collect()
}

/// Jittered timestamps for the full delta + zigzag + pack path.
fn generate_timestamps(size: usize, rng: &mut StdRng) -> Vec<i64> {
    let mut ts = 1_700_000_000i64;
    (0..size)
        .map(|_| {
            ts += 300 + rng.random_range(-5..=5);
            ts
        })
        .collect()
}

// --- Benchmark Suite ---

const BENCH_DATA_SIZE: usize = 65536;

fn bench_simple8b_kernels(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let narrow = generate_narrow_values(BENCH_DATA_SIZE, &mut rng);
    let mixed = generate_mixed_width_values(BENCH_DATA_SIZE, &mut rng);

    let mut narrow_words = Vec::new();
    s8b::encode(&narrow, &mut narrow_words).unwrap();
    let mut mixed_words = Vec::new();
    s8b::encode(&mixed, &mut mixed_words).unwrap();

    let mut group = c.benchmark_group("Simple8b Kernels");
    group.throughput(criterion::Throughput::Elements(BENCH_DATA_SIZE as u64));

    group.bench_function("Encode (Narrow)", |b| {
        let mut out = Vec::with_capacity(BENCH_DATA_SIZE);
        b.iter(|| s8b::encode(black_box(&narrow), &mut out).unwrap())
    });
    group.bench_function("Encode (Mixed Width)", |b| {
        let mut out = Vec::with_capacity(BENCH_DATA_SIZE);
        b.iter(|| s8b::encode(black_box(&mixed), &mut out).unwrap())
    });
    group.bench_function("Decode (Narrow)", |b| {
        let mut out: Vec<u64> = Vec::with_capacity(BENCH_DATA_SIZE);
        b.iter(|| s8b::decode(black_box(&narrow_words), BENCH_DATA_SIZE, &mut out).unwrap())
    });
    group.bench_function("Decode (Mixed Width)", |b| {
        let mut out: Vec<u64> = Vec::with_capacity(BENCH_DATA_SIZE);
        b.iter(|| s8b::decode(black_box(&mixed_words), BENCH_DATA_SIZE, &mut out).unwrap())
    });
    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x7E57);
    let timestamps = generate_timestamps(BENCH_DATA_SIZE, &mut rng);
    let config = CodecConfig::default();
    let column = compress(&timestamps, &config).unwrap();

    let mut group = c.benchmark_group("Transforms");
    group.throughput(criterion::Throughput::Elements(BENCH_DATA_SIZE as u64));

    group.bench_function("Delta + ZigZag In-Place", |b| {
        b.iter(|| {
            let mut buffer = timestamps.clone();
            delta::encode_inplace(&mut buffer);
            zigzag::encode_inplace(&mut buffer);
            black_box(buffer)
        })
    });
    group.bench_function("Compress Column", |b| {
        b.iter(|| compress(black_box(&timestamps), &config).unwrap())
    });
    group.bench_function("Decompress Column", |b| {
        b.iter(|| decompress(black_box(&column)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_simple8b_kernels, bench_transforms);
criterion_main!(benches);
