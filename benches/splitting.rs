use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use vec64::{
    ALPHABET, SplitOptions, exact_probabilities, pair_decode, pair_encode, split, split_with,
    vectorize,
};

const SIZES: [usize; 4] = [64, 256, 1024, 4096];

/// Base64-looking text with a punctuation symbol every so often.
fn sample_text(size: usize) -> Vec<u8> {
    (0..size)
        .map(|i| ALPHABET[(i * 37 + i / 11) % ALPHABET.len()])
        .collect()
}

fn bench_vectorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectorize");

    for size in SIZES {
        let text = sample_text(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| vectorize(black_box(text)));
        });
    }
    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    for size in SIZES {
        let symbols = vectorize(sample_text(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("punct", size), &symbols, |b, symbols| {
            b.iter(|| split(black_box(symbols)).unwrap());
        });

        let options = SplitOptions::default().with_sep(None);
        group.bench_with_input(BenchmarkId::new("no_sep", size), &symbols, |b, symbols| {
            b.iter(|| split_with(black_box(symbols), &options).unwrap());
        });
    }
    group.finish();
}

fn bench_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairs");

    for size in SIZES {
        let symbols = vectorize(sample_text(size));
        let codes = pair_encode(&symbols, 0).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &symbols, |b, symbols| {
            b.iter(|| pair_encode(black_box(symbols), 0).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &codes, |b, codes| {
            b.iter(|| pair_decode(black_box(codes)).unwrap());
        });
    }
    group.finish();
}

fn bench_probabilities(c: &mut Criterion) {
    c.bench_function("exact_probabilities", |b| {
        b.iter(|| exact_probabilities(black_box(40)));
    });
}

criterion_group!(benches, bench_vectorize, bench_split, bench_pairs, bench_probabilities);
criterion_main!(benches);
