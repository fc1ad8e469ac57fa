// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and tokenization.
//!
//! Everything that enters the trie and every query token goes through the
//! same pipeline: normalize, then split into words. If the two sides ever
//! disagree on what a "word" is, exact lookups silently stop matching, so
//! this module is the single place that decides.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for indexing and querying: lowercase, strip
/// diacritics, and collapse whitespace.
///
/// This makes matching accent-insensitive:
/// - "café" → "cafe"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. Lowercase
/// 4. Collapse whitespace
///
/// # Algorithm (without unicode-normalization)
///
/// 1. Lowercase only (assumes input is pre-normalized or ASCII)
/// 2. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Word boundary detection: checks if character is a word separator.
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Split text into words with their zero-based word positions.
///
/// The input is normalized first, then scanned for runs of alphanumeric
/// characters. Punctuation never survives: "TCP/IP, really?" tokenizes to
/// `[("tcp", 0), ("ip", 1), ("really", 2)]`.
///
/// Positions are word indices, not byte offsets — the scorer penalizes
/// matches by how far a word sits from where the user typed it, and that
/// distance is measured in words.
pub fn tokenize(text: &str) -> Vec<(String, u32)> {
    let normalized = normalize(text);
    let mut tokens = Vec::new();
    let mut word = String::new();

    for c in normalized.chars() {
        if is_word_boundary(c) {
            if !word.is_empty() {
                tokens.push((std::mem::take(&mut word), tokens.len() as u32));
            }
        } else {
            word.push(c);
        }
    }
    if !word.is_empty() {
        tokens.push((word, tokens.len() as u32));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("Hello WORLD"), "hello world");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  a \t b\n c  "), "a b c");
    }

    #[cfg(feature = "unicode-normalization")]
    #[test]
    fn test_normalize_strips_diacritics() {
        assert_eq!(normalize("café"), "cafe");
        assert_eq!(normalize("naïve"), "naive");
    }

    #[test]
    fn test_tokenize_positions() {
        let tokens = tokenize("network protocol design");
        assert_eq!(
            tokens,
            vec![
                ("network".to_string(), 0),
                ("protocol".to_string(), 1),
                ("design".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        let tokens = tokenize("TCP/IP, really?");
        assert_eq!(
            tokens,
            vec![
                ("tcp".to_string(), 0),
                ("ip".to_string(), 1),
                ("really".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ... !!").is_empty());
    }
}
