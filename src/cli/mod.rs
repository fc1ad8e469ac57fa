// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the typeahead command-line interface.
//!
//! Three subcommands: `query` for a one-shot search, `repl` for an
//! interactive suggest-as-you-type loop, and `stats` to examine what the
//! index built from a corpus. All three take the corpus directory and build
//! the index in memory at startup — there is no on-disk index format.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "typeahead",
    about = "Typo-tolerant sentence suggestions over a word trie",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one query against a corpus and print ranked suggestions
    Query {
        /// Directory of .txt files to index
        #[arg(short, long)]
        corpus: String,

        /// Query text; a trailing fragment gets prefix-expanded
        query: String,

        /// Maximum number of suggestions to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Fuzzy lookup edit-distance cap
        #[arg(short, long)]
        distance: Option<usize>,

        /// Path to a JSON file overriding scoring weights
        ///
        /// Any subset of fields may be present; the rest keep their
        /// defaults. Example: {"substitution": 2.5, "miss_penalty": 20}
        #[arg(long)]
        config: Option<String>,

        /// Emit results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Interactive loop: type fragments, get live suggestions (:q to quit)
    Repl {
        /// Directory of .txt files to index
        #[arg(short, long)]
        corpus: String,

        /// Maximum number of suggestions per query
        #[arg(short, long)]
        limit: Option<usize>,

        /// Fuzzy lookup edit-distance cap
        #[arg(short, long)]
        distance: Option<usize>,

        /// Path to a JSON file overriding scoring weights
        #[arg(long)]
        config: Option<String>,
    },

    /// Build the index and print its statistics
    Stats {
        /// Directory of .txt files to index
        #[arg(short, long)]
        corpus: String,
    },
}
