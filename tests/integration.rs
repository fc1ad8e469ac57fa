// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests: corpus directory on disk → index → ranked suggestions.

use std::fs::{self, File};
use std::io::Write;

use typeahead::{load_directory, IndexBuilder, ScoringConfig, SentenceId, SuggestIndex};

/// Write a small RFC-flavored corpus and index it.
fn index_fixture_corpus() -> SuggestIndex {
    let dir = tempfile::tempdir().unwrap();

    let mut rfc = File::create(dir.path().join("rfc.txt")).unwrap();
    writeln!(rfc, "network protocol design").unwrap();
    writeln!(rfc, "network byte order conventions").unwrap();
    writeln!(rfc, "== decorative separator ==").unwrap();
    writeln!(rfc, "--------").unwrap();

    let sub = dir.path().join("drafts");
    fs::create_dir(&sub).unwrap();
    let mut draft = File::create(sub.join("proto.txt")).unwrap();
    writeln!(draft, "protocol buffer encoding").unwrap();

    let mut builder = IndexBuilder::new();
    let summary = load_directory(dir.path(), &mut builder).unwrap();
    assert_eq!(summary.files, 2);
    assert_eq!(summary.sentences, 4); // separator line still has words

    builder.finalize()
}

#[test]
fn end_to_end_typo_query() {
    let index = index_fixture_corpus();
    let results = index
        .suggest("network protocl", &ScoringConfig::default())
        .unwrap();

    assert!(!results.is_empty());
    assert_eq!(results[0].text, "network protocol design");
    assert_eq!(results[0].source_label, "rfc.txt");
    // The fuzzy match cost something: below a two-word exact score.
    let config = ScoringConfig::default();
    let full_exact = config.exact_match_bonus * ("network".len() + "protocol".len()) as f64;
    assert!(results[0].score < full_exact);
}

#[test]
fn end_to_end_live_typing() {
    let index = index_fixture_corpus();
    let config = ScoringConfig::default();

    // Progressive fragments of "protocol" keep suggesting its sentences.
    for fragment in ["pro", "proto", "protoco"] {
        let results = index.suggest(fragment, &config).unwrap();
        assert!(
            results.iter().any(|s| s.text.contains("protocol")),
            "fragment {:?} lost the protocol sentences",
            fragment
        );
    }
}

#[test]
fn end_to_end_provenance_passthrough() {
    let index = index_fixture_corpus();
    let results = index
        .suggest("buffer encoding", &ScoringConfig::default())
        .unwrap();
    assert_eq!(results[0].source_label, "proto.txt");
}

#[test]
fn end_to_end_ids_are_stable_and_sorted() {
    // Sorted path order: drafts/proto.txt sorts before rfc.txt.
    let index = index_fixture_corpus();
    assert_eq!(
        index.sentence(SentenceId(1)).unwrap().text,
        "protocol buffer encoding"
    );
    assert_eq!(
        index.sentence(SentenceId(2)).unwrap().text,
        "network protocol design"
    );
}

#[test]
fn config_file_overrides_subset_of_weights() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    fs::write(&path, r#"{"substitution": 1.0, "max_results": 2}"#).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let config: ScoringConfig = serde_json::from_str(&raw).unwrap();
    assert_eq!(config.substitution, 1.0);
    assert_eq!(config.max_results, 2);
    assert_eq!(config.miss_penalty, ScoringConfig::default().miss_penalty);
    config.validate().unwrap();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let parsed: Result<ScoringConfig, _> =
        serde_json::from_str(r#"{"typo_weight": 3.0}"#);
    assert!(parsed.is_err());
}
