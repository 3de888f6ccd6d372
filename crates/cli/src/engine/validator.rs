// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Candidate code validation.

/// Check whether a candidate is a plausible sector code.
///
/// The integer part (before the first period, or the whole candidate)
/// must be at least three digits long, and the candidate with periods
/// removed must consist entirely of digits. Anything else is an OCR or
/// parse artifact.
pub fn is_valid(candidate: &str) -> bool {
    let integer_part = candidate.split('.').next().unwrap_or(candidate);
    if integer_part.len() < 3 {
        return false;
    }

    let digits: String = candidate.chars().filter(|c| *c != '.').collect();
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
