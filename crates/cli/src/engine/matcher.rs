// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sector code pattern matching.
//!
//! Finds the marker word "paritair(e)(s)" (French "commission paritaire",
//! Dutch "paritair comité", case-insensitive), skips any non-digit filler
//! after it, and captures the maximal run of digits, whitespace, and
//! periods that follows. Each captured block is cleaned and split into
//! individual candidate codes.

use std::sync::LazyLock;

use regex::Regex;

/// Marker word followed by non-digit filler, then a digit block.
/// The block is the maximal run of `[0-9\s.]` after the filler.
#[allow(clippy::expect_used)]
static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)paritaire?s?[^\d]*([\d\s.]+)").expect("valid regex pattern")
});

/// Noise inside a code block: anything that is not a digit or a period,
/// plus runs of two or more periods (OCR leader-dot artifacts).
#[allow(clippy::expect_used)]
static BLOCK_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d.]+|\.{2,}").expect("valid regex pattern"));

/// Extract candidate sector codes from raw document text.
///
/// Candidates are returned in document order and are not yet validated;
/// single embedded periods are kept as sub-code separators. A marker
/// whose block contains no digits contributes nothing.
pub fn match_codes(text: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    for caps in CODE_BLOCK.captures_iter(text) {
        let Some(block) = caps.get(1) else { continue };
        let cleaned = BLOCK_NOISE.replace_all(block.as_str().trim(), " ");
        candidates.extend(cleaned.split_whitespace().map(str::to_owned));
    }

    candidates
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
