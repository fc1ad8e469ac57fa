// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trie-backed sentence suggestions with typo tolerance.
//!
//! This crate indexes a corpus of sentences by word and answers typed
//! fragments with ranked, typo-tolerant sentence suggestions. Exact and
//! prefix lookups walk the trie directly; fuzzy lookup runs a bounded
//! Levenshtein DFS over it; the scorer turns word-level matches into a
//! sentence-level ranking.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│   index.rs   │────▶│  search.rs   │
//! │ (load files │     │ (IndexBuilder│     │  (suggest)   │
//! │  as records)│     │ →SuggestIndex│     │              │
//! └─────────────┘     └──────┬───────┘     └──────┬───────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌────────────┐      ┌──────────────┐
//!                     │  trie.rs   │      │  scoring.rs  │
//!                     │ (exact /   │      │ (weights,    │
//!                     │  prefix /  │      │  ranking)    │
//!                     │  fuzzy)    │      │              │
//!                     └────────────┘      └──────────────┘
//! ```
//!
//! # Lifecycle
//!
//! Build once, query many: [`IndexBuilder`] is the only mutable phase, and
//! [`IndexBuilder::finalize`] trades it for an immutable [`SuggestIndex`]
//! that any number of threads can query concurrently without locking.
//!
//! # Usage
//!
//! ```
//! use typeahead::{IndexBuilder, ScoringConfig, SentenceId};
//!
//! let mut builder = IndexBuilder::new();
//! builder.add_sentence(SentenceId(1), "network protocol design", "rfc.txt").unwrap();
//! builder.add_sentence(SentenceId(2), "protocol buffer encoding", "proto.txt").unwrap();
//! let index = builder.finalize();
//!
//! let results = index.suggest("network protocl", &ScoringConfig::default()).unwrap();
//! assert_eq!(results[0].sentence_id, SentenceId(1));
//! ```

// Module declarations
pub mod cli;
mod corpus;
mod index;
mod levenshtein;
mod scoring;
mod search;
pub mod testing;
mod trie;
mod types;
mod utils;

// Re-exports for public API
pub use corpus::{load_directory, LoadSummary};
pub use index::{IndexBuilder, SuggestIndex};
pub use levenshtein::{edit_ops, levenshtein_within, EditOps};
pub use scoring::{compare_ranked, ScoredSentence, ScoringConfig};
pub use search::suggest;
pub use trie::Trie;
pub use types::{
    Candidate, IndexStats, InputError, Occurrence, Sentence, SentenceId, Suggestion,
};
pub use utils::{normalize, tokenize};
