// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query pipeline: tokens → candidate words → ranked sentences.
//!
//! Per token the lookup escalates: exact match first (one trie walk), fuzzy
//! only when exact fails (bounded DP traversal), and for the final token —
//! if the user is still mid-word — prefix expansion on top, so suggestions
//! keep flowing while a word is half-typed. Earlier tokens never get prefix
//! treatment: a completed word followed by a space is exactly what the user
//! meant to type.
//!
//! Candidates then fan out to the sentences they occur in. Each sentence
//! accumulates, per query token, the single best contribution any candidate
//! achieved in it; unmatched tokens charge a flat miss penalty; sentences
//! that matched nothing are never created at all, so they can't leak into
//! results. Ranking is score-descending with deterministic tiebreaks.

use crate::index::SuggestIndex;
use crate::levenshtein::edit_ops;
use crate::scoring::{
    compare_ranked, edit_cost, exact_bonus, position_penalty, ScoredSentence, ScoringConfig,
};
use crate::trie::Trie;
use crate::types::{InputError, Occurrence, SentenceId, Suggestion};
use crate::utils::tokenize;
use std::collections::HashMap;

/// A candidate word flattened to what the scorer needs: the score it earns
/// before position penalties, and where it occurs.
struct TokenMatch<'a> {
    base: f64,
    occurrences: &'a [Occurrence],
}

/// Ranked suggestions for raw user input.
///
/// An empty or wordless query is an empty result list, not an error; so is
/// a query against an index that was never populated. The only errors are
/// boundary violations in `config`.
pub fn suggest(
    index: &SuggestIndex,
    input: &str,
    config: &ScoringConfig,
) -> Result<Vec<Suggestion>, InputError> {
    config.validate()?;

    let tokens = tokenize(input);
    if tokens.is_empty() {
        return Ok(Vec::new());
    }

    // Mid-word iff the raw input doesn't end in whitespace: "netw" is a
    // fragment to expand, "netw " is a word the user believes is finished.
    let trailing_partial = !input.ends_with(char::is_whitespace);

    // sentence → best contribution per query token (None = token missed)
    let mut accumulator: HashMap<SentenceId, Vec<Option<f64>>> = HashMap::new();

    for (i, (token, expected_position)) in tokens.iter().enumerate() {
        let expand_prefix = trailing_partial && i == tokens.len() - 1;
        let matches = matches_for_token(index.trie(), token, expand_prefix, config)?;

        for m in &matches {
            for occ in m.occurrences {
                let contribution =
                    m.base - position_penalty(config, *expected_position, occ.position);
                let slots = accumulator
                    .entry(occ.sentence)
                    .or_insert_with(|| vec![None; tokens.len()]);
                if slots[i].is_none_or(|best| contribution > best) {
                    slots[i] = Some(contribution);
                }
            }
        }
    }

    // Entries exist only for sentences with at least one matched token, so
    // zero-match sentences are excluded by construction.
    let mut ranked: Vec<ScoredSentence> = accumulator
        .into_iter()
        .filter_map(|(id, slots)| {
            let sentence = index.sentence(id)?;
            let score: f64 = slots
                .iter()
                .map(|slot| slot.unwrap_or(-config.miss_penalty))
                .sum();
            Some(ScoredSentence {
                id,
                score,
                word_count: sentence.word_count,
            })
        })
        .collect();

    ranked.sort_by(compare_ranked);
    ranked.truncate(config.max_results);

    Ok(ranked
        .into_iter()
        .filter_map(|scored| {
            let sentence = index.sentence(scored.id)?;
            Some(Suggestion {
                sentence_id: scored.id,
                text: sentence.text.clone(),
                source_label: sentence.source_label.clone(),
                score: scored.score,
            })
        })
        .collect())
}

/// Candidate words for one query token, deduplicated by word.
///
/// Escalation order per the lookup rules:
/// - exact hit → the token itself, earning the full exact bonus;
/// - no exact hit → fuzzy candidates, each billed per classified edit;
/// - `expand_prefix` → prefix completions on top of either, earning the
///   exact bonus on the characters actually typed (completing a half-typed
///   word is not a typo, but untyped characters earn nothing).
///
/// When fuzzy and prefix both produce the same word, the better base score
/// wins — a completion is worth more than treating the fragment as a typo.
fn matches_for_token<'a>(
    trie: &'a Trie,
    token: &str,
    expand_prefix: bool,
    config: &ScoringConfig,
) -> Result<Vec<TokenMatch<'a>>, InputError> {
    let mut by_word: HashMap<String, TokenMatch<'a>> = HashMap::new();
    let token_len = token.chars().count();

    match trie.lookup_exact(token) {
        Some(occurrences) => {
            by_word.insert(
                token.to_string(),
                TokenMatch {
                    base: exact_bonus(config, token_len),
                    occurrences,
                },
            );
        }
        None => {
            for candidate in trie.lookup_fuzzy(token, config.max_edit_distance)? {
                let ops = edit_ops(token, &candidate.word);
                let m = TokenMatch {
                    base: -edit_cost(config, &ops),
                    occurrences: candidate.occurrences,
                };
                merge_match(&mut by_word, candidate.word, m);
            }
        }
    }

    if expand_prefix {
        for (word, occurrences) in trie.lookup_prefix(token) {
            let m = TokenMatch {
                base: exact_bonus(config, token_len),
                occurrences,
            };
            merge_match(&mut by_word, word, m);
        }
    }

    Ok(by_word.into_values().collect())
}

/// Keep the higher-scoring match when a word shows up twice.
fn merge_match<'a>(by_word: &mut HashMap<String, TokenMatch<'a>>, word: String, m: TokenMatch<'a>) {
    match by_word.get_mut(&word) {
        Some(existing) if existing.base >= m.base => {}
        Some(existing) => *existing = m,
        None => {
            by_word.insert(word, m);
        }
    }
}
