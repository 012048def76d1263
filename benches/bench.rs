//! Criterion benchmarks for LexTrie.
//!
//! Covers trie construction, exact lookup, and nearest-word lookup compared
//! against scanning the whole word list with the reference distance.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lextrie::spelling::levenshtein::nearest_by_scan;
use lextrie::trie::{FuzzyConfig, SearchBound, Traversal, Trie};
use std::hint::black_box;

/// Generate a word list with many shared prefixes.
fn generate_words(count: usize) -> Vec<String> {
    let stems = [
        "search", "engine", "text", "index", "query", "document", "field", "term", "phrase",
        "vector", "score", "token", "stem", "cluster", "learn", "data", "struct", "memory",
    ];
    let suffixes = ["", "s", "ed", "ing", "er", "ers", "able", "ation", "ly", "ness"];

    let mut words = Vec::with_capacity(count);
    let mut i = 0;
    while words.len() < count {
        let stem = stems[i % stems.len()];
        let suffix = suffixes[(i / stems.len()) % suffixes.len()];
        let round = i / (stems.len() * suffixes.len());
        if round == 0 {
            words.push(format!("{stem}{suffix}"));
        } else {
            words.push(format!("{stem}{suffix}{round}"));
        }
        i += 1;
    }
    words
}

fn misspellings() -> Vec<&'static str> {
    vec![
        "serach", "engnie", "txet", "indx", "qeury", "documnet", "feild", "phrsae", "vectro",
        "scoer",
    ]
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for size in [1_000, 10_000] {
        let words = generate_words(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &words, |b, words| {
            b.iter(|| {
                let trie: Trie = words.iter().collect();
                black_box(trie)
            })
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let words = generate_words(10_000);
    let trie: Trie = words.iter().collect();

    let mut group = c.benchmark_group("contains");
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("all_words", |b| {
        b.iter(|| {
            for word in &words {
                black_box(trie.contains(black_box(word)));
            }
        })
    });
    group.finish();
}

fn bench_fuzzy(c: &mut Criterion) {
    let words = generate_words(10_000);
    let trie: Trie = words.iter().collect();
    let queries = misspellings();

    let mut group = c.benchmark_group("fuzzy_lookup");
    group.sample_size(20);
    group.throughput(Throughput::Elements(queries.len() as u64));

    let configs = [
        ("iterative_pruned", FuzzyConfig::new()),
        ("iterative_full", FuzzyConfig::new().with_prune(false)),
        (
            "recursive_pruned",
            FuzzyConfig::new().with_traversal(Traversal::Recursive),
        ),
    ];
    for (name, config) in &configs {
        group.bench_function(*name, |b| {
            b.iter(|| {
                for query in &queries {
                    black_box(trie.nearest_with(black_box(query), config));
                }
            })
        });
    }

    group.bench_function("linear_scan", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(nearest_by_scan(&words, black_box(query), SearchBound::QueryLength));
            }
        })
    });

    group.bench_function("batch_parallel", |b| {
        b.iter(|| black_box(trie.batch_lookup(&queries, &FuzzyConfig::new())))
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_contains, bench_fuzzy);
criterion_main!(benches);
