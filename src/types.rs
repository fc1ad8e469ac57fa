// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the suggestion index.
//!
//! These types define how sentences, occurrences, and query-time candidates
//! fit together.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Occurrence**: `position < sentences[sentence].word_count`. Every
//!   occurrence points at a real word slot in a real sentence.
//!
//! - **Sentence**: immutable once ingested. The trie back-references
//!   sentences by [`SentenceId`] only, never by pointer, so the index and
//!   the sentence table cannot form ownership cycles.
//!
//! - **Candidate**: `distance == 0` iff the candidate word equals the query
//!   token. Occurrence slices are borrowed from the trie and live only for
//!   the duration of one query.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Type-safe sentence identifier.
///
/// Prevents accidentally passing a word position where a sentence id is
/// expected. Ids are assigned by the caller at ingestion time and stay
/// stable for the process lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct SentenceId(pub u32);

impl SentenceId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for SentenceId {
    fn from(id: u32) -> Self {
        SentenceId(id)
    }
}

impl fmt::Display for SentenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// SENTENCE TABLE TYPES
// =============================================================================

/// One indexed sentence, exactly as ingested.
///
/// `text` is the original line (for display); matching always runs against
/// the normalized tokens, which are not stored here — the trie owns those.
/// `source_label` is opaque provenance (usually the originating file name)
/// passed straight through to results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    pub id: SentenceId,
    pub text: String,
    pub source_label: String,
    /// Number of words after normalization. Used by the ranker to prefer
    /// concise sentences on score ties.
    pub word_count: usize,
}

/// Where a word occurs: which sentence, and which word slot within it.
///
/// Derived `Ord` is (sentence, position) — the order occurrence lists are
/// kept sorted and deduplicated in, so lookups return them deterministically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Occurrence {
    pub sentence: SentenceId,
    /// Zero-based word index within the sentence.
    pub position: u32,
}

// =============================================================================
// QUERY-TIME TYPES
// =============================================================================

/// A vocabulary word matched for one query token.
///
/// Ephemeral: produced per lookup, consumed by the scorer, gone by the time
/// the response is rendered. Borrows its occurrence set from the trie
/// instead of cloning it — occurrence sets for common words can be large.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    /// The indexed word that matched.
    pub word: String,
    /// Levenshtein distance from the query token; 0 iff the word equals it.
    pub distance: usize,
    /// Every place the word occurs in the corpus.
    pub occurrences: &'a [Occurrence],
}

/// What users see when they get a suggestion.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Suggestion {
    pub sentence_id: SentenceId,
    pub text: String,
    pub source_label: String,
    pub score: f64,
}

/// Counters describing a finalized index.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct IndexStats {
    /// Sentences in the table.
    pub sentences: usize,
    /// Distinct words in the trie.
    pub distinct_words: usize,
    /// Total trie nodes, root included.
    pub trie_nodes: usize,
}

// =============================================================================
// BOUNDARY ERRORS
// =============================================================================

/// Contract violations rejected at the API boundary.
///
/// The taxonomy is deliberately narrow: "no match" is an empty result, not
/// an error. What remains is malformed input that no lookup could give a
/// meaningful answer for.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// An empty word was passed to `insert` or a fuzzy lookup.
    EmptyWord,
    /// A sentence id was ingested twice. Ids are the only back-reference
    /// from the trie, so overwriting would strand its occurrences.
    DuplicateSentence { id: SentenceId },
    /// A scoring weight is NaN or infinite.
    NonFiniteWeight { field: &'static str, value: f64 },
    /// A scoring weight is negative.
    NegativeWeight { field: &'static str, value: f64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EmptyWord => write!(f, "empty word"),
            InputError::DuplicateSentence { id } => {
                write!(f, "sentence id {} already ingested", id)
            }
            InputError::NonFiniteWeight { field, value } => {
                write!(f, "scoring weight `{}` is not finite: {}", field, value)
            }
            InputError::NegativeWeight { field, value } => {
                write!(f, "scoring weight `{}` is negative: {}", field, value)
            }
        }
    }
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurrence_ordering() {
        let a = Occurrence {
            sentence: SentenceId(1),
            position: 5,
        };
        let b = Occurrence {
            sentence: SentenceId(2),
            position: 0,
        };
        assert!(a < b);
    }

    #[test]
    fn test_input_error_display() {
        let err = InputError::DuplicateSentence { id: SentenceId(7) };
        assert_eq!(err.to_string(), "sentence id 7 already ingested");

        let err = InputError::NegativeWeight {
            field: "substitution",
            value: -1.0,
        };
        assert!(err.to_string().contains("substitution"));
    }

    #[test]
    fn test_suggestion_serializes() {
        let s = Suggestion {
            sentence_id: SentenceId(3),
            text: "hello world".to_string(),
            source_label: "greetings.txt".to_string(),
            score: 12.5,
        };
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"sentence_id\":3"));
        assert!(json.contains("greetings.txt"));
    }
}
