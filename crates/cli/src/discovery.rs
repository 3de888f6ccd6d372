// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input discovery.
//!
//! Finds paritex.toml by walking from a start directory up to the git
//! root, and collects the PDF files a scan should process.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Find paritex.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join("paritex.toml");
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Collect the PDFs under `input`, sorted for deterministic processing.
///
/// A single `.pdf` file is accepted as-is; a directory is walked up to
/// `max_depth` (hidden files and ignore rules respected). Anything else
/// yields an empty list, which callers treat as a usage error.
pub fn find_pdfs(input: &Path, max_depth: usize) -> Vec<PathBuf> {
    if input.is_file() {
        return if is_pdf(input) { vec![input.to_path_buf()] } else { Vec::new() };
    }
    if !input.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkBuilder::new(input)
        .max_depth(Some(max_depth))
        .build()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(|entry| entry.into_path())
        .filter(|path| is_pdf(path))
        .collect();
    files.sort();
    files
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
