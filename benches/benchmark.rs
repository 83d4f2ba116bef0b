// Performance benchmarks for the local scorers
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use simscan_core::{edit_similarity, frequency_similarity, frequency_vector, ScoreParts};

const WORDS: &[&str] = &[
    "wolves", "rivers", "frozen", "winter", "migration", "forest", "northern", "herds",
    "hunting", "territory", "tundra", "valley", "ridge", "snowfall", "daylight", "tracks",
];

fn generate_document(words: usize, rng: &mut impl Rng) -> String {
    (0..words)
        .map(|_| WORDS[rng.random_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn benchmark_edit_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_similarity");
    let mut rng = rand::rng();

    for chars in [100usize, 500, 2000].iter() {
        // Word counts chosen so the documents land near the target length.
        let words = chars / 7;
        let a = generate_document(words, &mut rng);
        let b = generate_document(words, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(chars), chars, |bench, _| {
            bench.iter(|| edit_similarity(black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

fn benchmark_frequency_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency_similarity");
    let mut rng = rand::rng();

    for words in [100usize, 1000, 5000].iter() {
        let a = generate_document(*words, &mut rng);
        let b = generate_document(*words, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(words), words, |bench, _| {
            bench.iter(|| frequency_similarity(black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

fn benchmark_tokenization(c: &mut Criterion) {
    let mut rng = rand::rng();
    let doc = generate_document(2000, &mut rng);

    c.bench_function("frequency_vector_2000_words", |b| {
        b.iter(|| frequency_vector(black_box(&doc)));
    });
}

fn benchmark_blend(c: &mut Criterion) {
    c.bench_function("blend_full", |b| {
        b.iter(|| {
            let parts = ScoreParts::Full {
                edit: black_box(81.5),
                freq: black_box(64.2),
                semantic: black_box(77.0),
            };
            parts.blend()
        });
    });
}

criterion_group!(
    benches,
    benchmark_edit_similarity,
    benchmark_frequency_similarity,
    benchmark_tokenization,
    benchmark_blend
);
criterion_main!(benches);
