//! Benchmarks for index construction and suggestion latency.
//!
//! Simulates realistic corpus sizes:
//! - small:  ~200 sentences   (one RFC)
//! - medium: ~2,000 sentences (a directory of drafts)
//! - large:  ~20,000 sentences (an archive)
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use typeahead::{IndexBuilder, ScoringConfig, SentenceId, SuggestIndex};

/// Corpus size configurations
struct CorpusSize {
    name: &'static str,
    sentences: usize,
}

const CORPUS_SIZES: &[CorpusSize] = &[
    CorpusSize {
        name: "small",
        sentences: 200,
    },
    CorpusSize {
        name: "medium",
        sentences: 2_000,
    },
    CorpusSize {
        name: "large",
        sentences: 20_000,
    },
];

/// Technical vocabulary for realistic sentence content
const TECHNICAL_WORDS: &[&str] = &[
    "network", "protocol", "design", "buffer", "encoding", "stream", "socket",
    "datagram", "header", "payload", "checksum", "routing", "gateway", "session",
    "transport", "segment", "window", "congestion", "retransmission", "handshake",
    "latency", "throughput", "fragmentation", "encapsulation", "multiplexing",
];

/// Deterministic pseudo-random sentence generator (no rand dependency).
fn generate_sentences(count: usize) -> Vec<String> {
    let mut state: u64 = 0x5eed_cafe;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };

    (0..count)
        .map(|_| {
            let len = 4 + next() % 8;
            (0..len)
                .map(|_| TECHNICAL_WORDS[next() % TECHNICAL_WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn build_index(sentences: &[String]) -> SuggestIndex {
    let mut builder = IndexBuilder::new();
    for (i, text) in sentences.iter().enumerate() {
        builder
            .add_sentence(SentenceId(i as u32 + 1), text, "bench.txt")
            .unwrap();
    }
    builder.finalize()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for size in CORPUS_SIZES {
        let sentences = generate_sentences(size.sentences);
        group.bench_with_input(
            BenchmarkId::from_parameter(size.name),
            &sentences,
            |b, sentences| b.iter(|| build_index(black_box(sentences))),
        );
    }
    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");
    let config = ScoringConfig::default();

    for size in CORPUS_SIZES {
        let index = build_index(&generate_sentences(size.sentences));

        group.bench_with_input(
            BenchmarkId::new("exact", size.name),
            &index,
            |b, index| b.iter(|| index.suggest(black_box("network protocol "), &config)),
        );
        group.bench_with_input(
            BenchmarkId::new("typo", size.name),
            &index,
            |b, index| b.iter(|| index.suggest(black_box("netwrk protocl"), &config)),
        );
        group.bench_with_input(
            BenchmarkId::new("live_typing", size.name),
            &index,
            |b, index| b.iter(|| index.suggest(black_box("network proto"), &config)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_suggest);
criterion_main!(benches);
