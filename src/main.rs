// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! typeahead binary: index a corpus directory, answer queries.
//!
//! The index is built fresh each run — build-then-query, nothing persisted.
//! Build diagnostics go to stderr so `--json` output stays pipeable.

use clap::Parser;
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

use typeahead::cli::{display, Cli, Commands};
use typeahead::{load_directory, IndexBuilder, ScoringConfig, SuggestIndex};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Query {
            corpus,
            query,
            limit,
            distance,
            config,
            json,
        } => {
            let config = load_scoring_config(config.as_deref(), limit, distance)?;
            let index = build_from_corpus(&corpus)?;
            run_query(&index, &query, &config, json)
        }
        Commands::Repl {
            corpus,
            limit,
            distance,
            config,
        } => {
            let config = load_scoring_config(config.as_deref(), limit, distance)?;
            let index = build_from_corpus(&corpus)?;
            run_repl(&index, &config)
        }
        Commands::Stats { corpus } => {
            let index = build_from_corpus(&corpus)?;
            println!("{}", display::render_stats(&index.stats()));
            Ok(())
        }
    }
}

/// Scoring config: JSON file if given, defaults otherwise, CLI flags on top.
fn load_scoring_config(
    path: Option<&str>,
    limit: Option<usize>,
    distance: Option<usize>,
) -> Result<ScoringConfig, String> {
    let mut config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read config {}: {}", path, e))?;
            serde_json::from_str(&raw).map_err(|e| format!("Invalid config {}: {}", path, e))?
        }
        None => ScoringConfig::default(),
    };

    if let Some(limit) = limit {
        config.max_results = limit;
    }
    if let Some(distance) = distance {
        config.max_edit_distance = distance;
    }
    config
        .validate()
        .map_err(|e| format!("Invalid scoring config: {}", e))?;
    Ok(config)
}

/// Index every .txt file under the corpus directory, with a summary line.
fn build_from_corpus(corpus: &str) -> Result<SuggestIndex, String> {
    let started = Instant::now();
    let mut builder = IndexBuilder::new();
    let summary = load_directory(Path::new(corpus), &mut builder)?;

    if builder.is_empty() {
        eprintln!("⚠️  No sentences found under {}", corpus);
    }

    let index = builder.finalize();
    let stats = index.stats();
    eprintln!(
        "✅ Indexed {} sentences │ {} words │ {} files in {}",
        stats.sentences,
        stats.distinct_words,
        summary.files,
        display::format_elapsed(started.elapsed()),
    );
    Ok(index)
}

fn run_query(
    index: &SuggestIndex,
    query: &str,
    config: &ScoringConfig,
    json: bool,
) -> Result<(), String> {
    let started = Instant::now();
    let suggestions = index
        .suggest(query, config)
        .map_err(|e| format!("Query failed: {}", e))?;
    let elapsed = started.elapsed();

    if json {
        let serialized = serde_json::to_string_pretty(&suggestions)
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        println!("{}", serialized);
    } else {
        println!("{}", display::render_suggestions(&suggestions));
        eprintln!("⏱  {}", display::format_elapsed(elapsed));
    }
    Ok(())
}

/// Interactive loop: one query per line, `:q` (or EOF) to leave.
fn run_repl(index: &SuggestIndex, config: &ScoringConfig) -> Result<(), String> {
    println!("typeahead repl — type a fragment, :q to quit");

    let stdin = std::io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        std::io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;

        input.clear();
        let read = stdin
            .lock()
            .read_line(&mut input)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if read == 0 {
            break; // EOF
        }
        if input.trim() == ":q" {
            break;
        }
        // Keep trailing whitespace: "netw" and "netw " are different queries.
        let query = input.trim_end_matches(['\r', '\n']);
        if query.trim().is_empty() {
            continue;
        }

        let started = Instant::now();
        let suggestions = index
            .suggest(query, config)
            .map_err(|e| format!("Query failed: {}", e))?;
        println!("{}", display::render_suggestions(&suggestions));
        eprintln!("⏱  {}", display::format_elapsed(started.elapsed()));
    }
    Ok(())
}
