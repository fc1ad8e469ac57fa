// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus ingestion: feed a directory of text files into the builder.
//!
//! This is mechanical glue in front of the index — discover `.txt` files,
//! split them into lines, hand each usable line to [`IndexBuilder`] as one
//! sentence record. A line is usable if it contains at least one alphabetic
//! character; decoration like `-----` or `1.2.3` never becomes a sentence.
//!
//! Ids are assigned monotonically starting at 1, in sorted-path order, so
//! the same corpus always produces the same ids (and therefore the same
//! ranking tiebreaks) regardless of directory iteration order.
//!
//! Unreadable files are a warning, not a failure: one corrupt download
//! shouldn't take down indexing of a 10,000-file archive.

use crate::index::IndexBuilder;
use crate::types::SentenceId;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

/// What a directory load did, for the post-build summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// `.txt` files successfully read.
    pub files: usize,
    /// Files that could not be read and were skipped.
    pub skipped_files: usize,
    /// Sentence records ingested.
    pub sentences: usize,
}

/// Recursively collect every `.txt` file under `root`, sorted.
fn collect_text_files(root: &Path, files: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries = fs::read_dir(root)
        .map_err(|e| format!("Failed to read directory {}: {}", root.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read entry in {}: {}", root.display(), e))?;
        let path = entry.path();
        if path.is_dir() {
            collect_text_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    Ok(())
}

/// Does this line hold an indexable sentence?
fn contains_words(line: &str) -> bool {
    line.chars().any(char::is_alphabetic)
}

/// Progress style matching the build pipeline's look.
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .expect("progress template is valid")
    .progress_chars("━━╸")
}

/// Load every `.txt` file under `root` into the builder.
///
/// Returns the load summary, or an error if the root itself is unreadable
/// or a sentence fails ingestion. Per-file read errors are reported on
/// stderr and counted in `skipped_files`.
pub fn load_directory(root: &Path, builder: &mut IndexBuilder) -> Result<LoadSummary, String> {
    if !root.is_dir() {
        return Err(format!("Corpus path is not a directory: {}", root.display()));
    }

    let mut paths = Vec::new();
    collect_text_files(root, &mut paths)?;
    // Deterministic ids regardless of filesystem iteration order.
    paths.sort();

    #[cfg(feature = "parallel")]
    let progress = {
        let bar = ProgressBar::new(paths.len() as u64);
        bar.set_style(create_progress_style());
        bar.set_prefix("Indexing");
        bar
    };

    let mut summary = LoadSummary::default();
    let mut next_id: u32 = 1;

    for path in &paths {
        #[cfg(feature = "parallel")]
        progress.set_message(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("⚠️  Skipping {}: {}", path.display(), e);
                summary.skipped_files += 1;
                #[cfg(feature = "parallel")]
                progress.inc(1);
                continue;
            }
        };

        let source_label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || !contains_words(line) {
                continue;
            }
            builder
                .add_sentence(SentenceId(next_id), line, &source_label)
                .map_err(|e| format!("Failed to ingest {}: {}", path.display(), e))?;
            next_id += 1;
            summary.sentences += 1;
        }

        summary.files += 1;
        #[cfg(feature = "parallel")]
        progress.inc(1);
    }

    #[cfg(feature = "parallel")]
    progress.finish_with_message(format!("{} sentences", summary.sentences));

    Ok(summary)
}
