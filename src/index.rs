// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two-phase index lifecycle: mutable builder, then frozen index.
//!
//! Ingestion happens exactly once, at startup: every sentence record flows
//! through [`IndexBuilder::add_sentence`], which tokenizes the text and
//! inserts each word into the trie. [`IndexBuilder::finalize`] then consumes
//! the builder and hands back a [`SuggestIndex`] that exposes no `&mut`
//! methods at all — the type system is the lifecycle boundary, not a flag
//! someone has to remember to check.
//!
//! After finalize the index is plain immutable data (`Send + Sync`), so any
//! number of query threads can share it behind an `Arc` without locking.
//! Re-indexing means building a new index and swapping the `Arc`.

use crate::scoring::ScoringConfig;
use crate::search;
use crate::trie::Trie;
use crate::types::{IndexStats, InputError, Sentence, SentenceId, Suggestion};
use crate::utils::tokenize;
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Mutable accumulation phase of the index.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    trie: Trie,
    sentences: HashMap<SentenceId, Sentence>,
}

impl IndexBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        IndexBuilder {
            trie: Trie::new(),
            sentences: HashMap::new(),
        }
    }

    /// Ingest one sentence record.
    ///
    /// Tokenizes `text` (normalize, strip punctuation, split) and inserts
    /// every word with its position. A line that tokenizes to nothing is
    /// stored but can never match — it has no occurrences in the trie.
    ///
    /// Duplicate ids are rejected: the trie back-references sentences by id
    /// only, so overwriting a sentence would strand its occurrences.
    pub fn add_sentence(
        &mut self,
        id: SentenceId,
        text: &str,
        source_label: &str,
    ) -> Result<(), InputError> {
        if self.sentences.contains_key(&id) {
            return Err(InputError::DuplicateSentence { id });
        }

        let tokens = tokenize(text);
        for (word, position) in &tokens {
            self.trie.insert(word, id, *position)?;
        }

        self.sentences.insert(
            id,
            Sentence {
                id,
                text: text.to_string(),
                source_label: source_label.to_string(),
                word_count: tokens.len(),
            },
        );
        Ok(())
    }

    /// Ingest a batch of `(id, text, source_label)` records in order.
    pub fn add_records<'a, I>(&mut self, records: I) -> Result<(), InputError>
    where
        I: IntoIterator<Item = (SentenceId, &'a str, &'a str)>,
    {
        for (id, text, source_label) in records {
            self.add_sentence(id, text, source_label)?;
        }
        Ok(())
    }

    /// Batch ingestion with parallel tokenization.
    ///
    /// Map phase: tokenize every record on the rayon pool. Reduce phase:
    /// insert sequentially — the trie is a single mutable structure, and
    /// sequential insertion of pre-tokenized words is cheap compared to
    /// normalization. Output is identical to [`IndexBuilder::add_records`].
    #[cfg(feature = "parallel")]
    pub fn add_records_parallel(
        &mut self,
        records: Vec<(SentenceId, String, String)>,
    ) -> Result<(), InputError> {
        let tokenized: Vec<(SentenceId, String, String, Vec<(String, u32)>)> = records
            .into_par_iter()
            .map(|(id, text, source_label)| {
                let tokens = tokenize(&text);
                (id, text, source_label, tokens)
            })
            .collect();

        for (id, text, source_label, tokens) in tokenized {
            if self.sentences.contains_key(&id) {
                return Err(InputError::DuplicateSentence { id });
            }
            for (word, position) in &tokens {
                self.trie.insert(word, id, *position)?;
            }
            self.sentences.insert(
                id,
                Sentence {
                    id,
                    text,
                    source_label,
                    word_count: tokens.len(),
                },
            );
        }
        Ok(())
    }

    /// Number of sentences ingested so far.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// True if nothing has been ingested.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Freeze the builder into an immutable, shareable index.
    pub fn finalize(self) -> SuggestIndex {
        SuggestIndex {
            trie: self.trie,
            sentences: self.sentences,
        }
    }
}

/// The frozen, query-only index: word trie plus sentence table.
///
/// No method takes `&mut self`; share it across threads freely. All lookup
/// misses are empty results — an index that was never populated answers
/// every query with an empty list, exactly like one whose corpus simply
/// doesn't match.
#[derive(Debug)]
pub struct SuggestIndex {
    trie: Trie,
    sentences: HashMap<SentenceId, Sentence>,
}

impl SuggestIndex {
    /// The word trie, for callers that want raw lookups.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Look up a sentence by id.
    pub fn sentence(&self, id: SentenceId) -> Option<&Sentence> {
        self.sentences.get(&id)
    }

    /// Number of sentences in the table.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// True if the index holds no sentences. Lets callers that care
    /// distinguish "never populated" from "query just didn't match".
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Index counters for the stats surface.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            sentences: self.sentences.len(),
            distinct_words: self.trie.distinct_words(),
            trie_nodes: self.trie.node_count(),
        }
    }

    /// Ranked suggestions for raw user input. See [`search::suggest`].
    pub fn suggest(
        &self,
        input: &str,
        config: &ScoringConfig,
    ) -> Result<Vec<Suggestion>, InputError> {
        search::suggest(self, input, config)
    }
}
