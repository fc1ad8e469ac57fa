// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind suggestion ranking.
//!
//! A sentence's score is the sum of its per-token contributions: exact
//! matches earn a bonus scaled by word length, typos pay per edit operation,
//! and every match pays for sitting at a different word position than the
//! user typed it at. Tokens with no match in the sentence cost a flat miss
//! penalty, and a sentence matching nothing is never a result at all.
//!
//! # Default weights (why these values)
//!
//! | Weight                  | Value | Why this value                              |
//! |-------------------------|-------|---------------------------------------------|
//! | substitution            | 5.0   | Mistyped char: mildest typo                 |
//! | addition                | 10.0  | Extra char typed: stronger signal of drift  |
//! | deletion                | 10.0  | Dropped char: same as addition              |
//! | exact_match_bonus       | 2.0   | Per character — longer exact words carry    |
//! |                         |       | more signal than short ones                 |
//! | position_penalty_factor | 1.0   | One point per word of displacement: order   |
//! |                         |       | matters but never outweighs matching at all |
//! | miss_penalty            | 12.0  | Above the worst single-typo cost, so a      |
//! |                         |       | fuzzy match always beats no match           |
//!
//! Addition/deletion outrank substitution deliberately: a wrong letter still
//! spans the same word shape, while inserted/dropped letters change word
//! length and are more often a different word, not a typo.

use crate::levenshtein::EditOps;
use crate::types::{InputError, SentenceId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// =============================================================================
// DEFAULT WEIGHTS
// =============================================================================

/// Cost of one substituted character.
pub const DEFAULT_SUBSTITUTION_WEIGHT: f64 = 5.0;

/// Cost of one character the user added.
pub const DEFAULT_ADDITION_WEIGHT: f64 = 10.0;

/// Cost of one character the user dropped.
pub const DEFAULT_DELETION_WEIGHT: f64 = 10.0;

/// Reward per character of an exactly matched word.
pub const DEFAULT_EXACT_MATCH_BONUS: f64 = 2.0;

/// Penalty per word of displacement between typed and matched position.
pub const DEFAULT_POSITION_PENALTY_FACTOR: f64 = 1.0;

/// Flat penalty for a query token the sentence doesn't match at all.
pub const DEFAULT_MISS_PENALTY: f64 = 12.0;

/// How many suggestions a query returns.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Edit-distance cap for fuzzy lookup. Two edits already covers the great
/// majority of single-word typos; three makes short words match everything.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// Knobs for the scorer, passed by reference into every query.
///
/// A plain struct with every recognized field spelled out — configuration
/// is data, not a stringly-typed map. `Deserialize` with per-field defaults
/// so a JSON config file can override just the weights it cares about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Cost per substituted character.
    pub substitution: f64,
    /// Cost per character the user added.
    pub addition: f64,
    /// Cost per character the user dropped.
    pub deletion: f64,
    /// Per-character reward for an exact word match.
    pub exact_match_bonus: f64,
    /// Penalty per word of positional displacement.
    pub position_penalty_factor: f64,
    /// Flat penalty per unmatched query token.
    pub miss_penalty: f64,
    /// K: ranked results returned per query.
    pub max_results: usize,
    /// Fuzzy lookup distance cap.
    pub max_edit_distance: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            substitution: DEFAULT_SUBSTITUTION_WEIGHT,
            addition: DEFAULT_ADDITION_WEIGHT,
            deletion: DEFAULT_DELETION_WEIGHT,
            exact_match_bonus: DEFAULT_EXACT_MATCH_BONUS,
            position_penalty_factor: DEFAULT_POSITION_PENALTY_FACTOR,
            miss_penalty: DEFAULT_MISS_PENALTY,
            max_results: DEFAULT_MAX_RESULTS,
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }
}

impl ScoringConfig {
    /// Reject NaN, infinite, and negative weights at the query boundary.
    ///
    /// Weights are costs and bonuses, not directions — a negative deletion
    /// weight would reward typos, and a NaN anywhere poisons every
    /// comparison downstream.
    pub fn validate(&self) -> Result<(), InputError> {
        let fields: [(&'static str, f64); 6] = [
            ("substitution", self.substitution),
            ("addition", self.addition),
            ("deletion", self.deletion),
            ("exact_match_bonus", self.exact_match_bonus),
            ("position_penalty_factor", self.position_penalty_factor),
            ("miss_penalty", self.miss_penalty),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InputError::NonFiniteWeight { field, value });
            }
            if value < 0.0 {
                return Err(InputError::NegativeWeight { field, value });
            }
        }
        Ok(())
    }
}

// =============================================================================
// SCORE COMPONENTS
// =============================================================================

/// Reward for typing a word exactly: bonus per character.
pub fn exact_bonus(config: &ScoringConfig, word_len: usize) -> f64 {
    config.exact_match_bonus * word_len as f64
}

/// Cost of a typo, billed per classified edit operation.
pub fn edit_cost(config: &ScoringConfig, ops: &EditOps) -> f64 {
    config.substitution * ops.substitutions as f64
        + config.addition * ops.additions as f64
        + config.deletion * ops.deletions as f64
}

/// Penalty for a match sitting `|expected - actual|` words away from where
/// the user typed it. Rewards sentences whose words appear in the same
/// order and place as the query.
pub fn position_penalty(config: &ScoringConfig, expected: u32, actual: u32) -> f64 {
    config.position_penalty_factor * f64::from(expected.abs_diff(actual))
}

// =============================================================================
// RANKING
// =============================================================================

/// A sentence with its accumulated score, ready to rank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSentence {
    pub id: SentenceId,
    pub score: f64,
    pub word_count: usize,
}

/// Compare two scored sentences for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **Word count** - ascending (prefer the more concise sentence)
/// 3. **Sentence id** - ascending, final tiebreaker for absolute determinism
///
/// NaN scores cannot reach this comparator — `ScoringConfig::validate`
/// rejects non-finite weights before any scoring happens.
pub fn compare_ranked(a: &ScoredSentence, b: &ScoredSentence) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => match a.word_count.cmp(&b.word_count) {
            Ordering::Equal => a.id.cmp(&b.id),
            ord => ord,
        },
    }
}
