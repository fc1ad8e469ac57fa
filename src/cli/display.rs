// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the typeahead CLI.
//!
//! Ranked results with their provenance and score, colored when stdout is a
//! real terminal. Respects `NO_COLOR` for the purists and non-TTY detection
//! for pipelines — `typeahead query ... | head` gets plain text.

use crate::types::{IndexStats, Suggestion};
use std::sync::OnceLock;
use std::time::Duration;

// ═══════════════════════════════════════════════════════════════════════════
// COLOR HANDLING
// ═══════════════════════════════════════════════════════════════════════════

mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// Cached color decision for this process.
static COLOR_ENABLED: OnceLock<bool> = OnceLock::new();

/// Color only when stdout is a TTY and `NO_COLOR` is unset.
fn color_enabled() -> bool {
    *COLOR_ENABLED.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

/// Wrap `text` in an ANSI code when color is on, pass through otherwise.
fn paint(code: &str, text: &str) -> String {
    if color_enabled() {
        format!("{}{}{}", code, text, colors::RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// Render a ranked suggestion list for terminal output.
pub fn render_suggestions(suggestions: &[Suggestion]) -> String {
    if suggestions.is_empty() {
        return paint(colors::DIM, "no suggestions found");
    }

    let mut out = String::new();
    for (rank, suggestion) in suggestions.iter().enumerate() {
        let line = format!(
            "{:>2}. {}  {} {}\n",
            rank + 1,
            paint(colors::BOLD, &suggestion.text),
            paint(colors::DIM, &format!("[{}]", suggestion.source_label)),
            paint(colors::CYAN, &format!("({:.1})", suggestion.score)),
        );
        out.push_str(&line);
    }
    out.pop(); // trailing newline
    out
}

/// Render index statistics as an aligned block.
pub fn render_stats(stats: &IndexStats) -> String {
    format!(
        "{}\n  sentences      {}\n  distinct words {}\n  trie nodes     {}",
        paint(colors::BOLD, "Index statistics"),
        paint(colors::GREEN, &stats.sentences.to_string()),
        paint(colors::GREEN, &stats.distinct_words.to_string()),
        paint(colors::GREEN, &stats.trie_nodes.to_string()),
    )
}

/// Human-friendly elapsed time: sub-millisecond queries show as µs.
pub fn format_elapsed(elapsed: Duration) -> String {
    let text = if elapsed.as_millis() >= 1 {
        format!("{:.1} ms", elapsed.as_secs_f64() * 1000.0)
    } else {
        format!("{} µs", elapsed.as_micros())
    };
    paint(colors::YELLOW, &text)
}
