//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index::{IndexBuilder, SuggestIndex};
use crate::types::SentenceId;

/// Build a finalized index from `(id, text, source_label)` triples.
///
/// This is the canonical constructor used across all tests.
pub fn build_index(records: &[(u32, &str, &str)]) -> SuggestIndex {
    let mut builder = IndexBuilder::new();
    for &(id, text, source_label) in records {
        builder
            .add_sentence(SentenceId(id), text, source_label)
            .expect("test records are well-formed");
    }
    builder.finalize()
}

/// Corpus lines used by a handful of ranking tests.
pub fn rfc_corpus() -> Vec<(u32, &'static str, &'static str)> {
    vec![
        (1, "network protocol design", "rfc.txt"),
        (2, "protocol buffer encoding", "proto.txt"),
        (3, "network byte order conventions", "rfc.txt"),
        (4, "streaming compression for archives", "zip.txt"),
    ]
}
