//! Criterion benchmarks for Fumble.
//!
//! Covers the typo transform (direct and through the analysis pipeline)
//! and corpus statistics.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use fumble::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use fumble::analysis::token::join_tokens;
use fumble::analysis::token_filter::typo::TypoFilter;
use fumble::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use fumble::augment::config::TypoConfig;
use fumble::augment::typo::Perturber;
use fumble::corpus::encoder::ByteEncoder;
use fumble::corpus::loader::ParallelCorpus;
use fumble::corpus::stats::{compute_raw_stats, compute_tokenized_stats};

/// Generate test sentences for benchmarking.
fn generate_test_sentences(count: usize) -> Vec<String> {
    let words = [
        "the", "movie", "was", "Absolutely", "wonderful", "and", "I", "would", "watch", "it",
        "again", "but", "ending", "felt", "rushed", "2/10", "acting", "Great", "plot", "twist",
    ];

    let mut sentences = Vec::with_capacity(count);
    for i in 0..count {
        let len = 8 + (i % 24); // Variable length sentences
        let sentence: Vec<&str> = (0..len)
            .map(|j| words[(i * 7 + j * 13) % words.len()]) // Pseudo-random distribution
            .collect();
        sentences.push(sentence.join(" "));
    }

    sentences
}

/// Benchmark typo injection.
fn bench_perturb(c: &mut Criterion) {
    let mut group = c.benchmark_group("perturb");
    let sentences = generate_test_sentences(1000);

    group.throughput(Throughput::Elements(sentences.len() as u64));
    group.bench_function("perturber_default", |b| {
        let mut perturber = Perturber::seeded(TypoConfig::default(), 0);
        b.iter(|| {
            for s in &sentences {
                black_box(perturber.perturb(black_box(s)));
            }
        })
    });

    group.bench_function("perturber_every_char", |b| {
        let mut perturber = Perturber::seeded(TypoConfig::new(1.0, 1.0).unwrap(), 0);
        b.iter(|| {
            for s in &sentences {
                black_box(perturber.perturb(black_box(s)));
            }
        })
    });

    group.bench_function("pipeline_typo_filter", |b| {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(TypoFilter::seeded(TypoConfig::default(), 0)));
        b.iter(|| {
            for s in &sentences {
                black_box(join_tokens(analyzer.analyze(black_box(s)).unwrap()));
            }
        })
    });

    group.finish();
}

/// Benchmark corpus statistics.
fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_stats");
    let corpus = ParallelCorpus {
        nl: generate_test_sentences(5000),
        sql: generate_test_sentences(5000),
    };

    group.bench_function("raw", |b| b.iter(|| black_box(compute_raw_stats(&corpus))));
    group.bench_function("tokenized_bytes", |b| {
        let encoder = ByteEncoder::new();
        b.iter(|| black_box(compute_tokenized_stats(&corpus, &encoder).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_perturb, bench_stats);
criterion_main!(benches);
