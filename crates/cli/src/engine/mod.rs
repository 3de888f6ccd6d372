// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sector code extraction and escalation engine.
//!
//! One call per document: extract text with the cheap strategy, match and
//! validate candidate codes, and escalate to OCR at most once when the
//! cheap pass looks corrupted (invalid candidates) or, optionally, when it
//! found nothing. The engine is pure over its collaborators: text comes
//! from an injected [`TextExtractor`] and all side effects go through an
//! injected [`Notifier`].

pub mod matcher;
pub mod validator;

use std::fmt;
use std::path::Path;

use crate::extractor::TextExtractor;
use crate::notify::{EngineEvent, Notifier};

/// How text is obtained from a PDF, ordered by cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Layout-based text extraction. Cheap, may miss scanned pages.
    Fast,
    /// Optical character recognition. Expensive, reliable on scans.
    OcrOnly,
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionStrategy::Fast => write!(f, "fast"),
            ExtractionStrategy::OcrOnly => write!(f, "ocr_only"),
        }
    }
}

/// Terminal result of processing one document. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    /// File name of the document (the store key).
    pub document_name: String,
    /// Valid codes in first-seen order, duplicates kept.
    pub codes: Vec<String>,
    /// Completion timestamp, `%Y-%m-%d %H:%M:%S` local time.
    pub processing_time: String,
    /// Whether the accepted attempt used OCR.
    pub used_ocr_only: bool,
}

impl ExtractionOutcome {
    /// Codes joined for the persisted table.
    pub fn joined_codes(&self) -> String {
        self.codes.join("; ")
    }
}

/// Process one document, escalating from `Fast` to `OcrOnly` at most once.
///
/// `OcrOnly` is terminal: whatever it yields is accepted, including
/// invalid or empty code lists. Extraction failures are reported through
/// the notifier and treated as empty text, so a broken document still
/// produces a (count 0) outcome instead of aborting the batch.
pub fn process_document(
    path: &Path,
    extractor: &dyn TextExtractor,
    notifier: &dyn Notifier,
    redo_empty: bool,
) -> ExtractionOutcome {
    let document_name = file_name(path);
    let mut strategy = ExtractionStrategy::Fast;

    // Bounded: the only transition is Fast -> OcrOnly.
    loop {
        notifier.notify(EngineEvent::AttemptStarted {
            document: document_name.clone(),
            strategy,
        });

        let text = match extractor.extract(path, strategy) {
            Ok(text) => text,
            Err(err) => {
                notifier.notify(EngineEvent::ExtractionFailed {
                    document: document_name.clone(),
                    path: path.to_path_buf(),
                    error: err.to_string(),
                });
                String::new()
            }
        };

        let candidates = matcher::match_codes(&text);
        let (valid, invalid): (Vec<String>, Vec<String>) =
            candidates.into_iter().partition(|c| validator::is_valid(c));

        if strategy == ExtractionStrategy::Fast {
            if !invalid.is_empty() {
                // Any malformed code means the fast pass corrupted the
                // page; redo the whole document at higher fidelity.
                notifier.notify(EngineEvent::EscalatedInvalid {
                    document: document_name.clone(),
                    detected: invalid,
                });
                strategy = ExtractionStrategy::OcrOnly;
                continue;
            }
            if valid.is_empty() {
                if redo_empty {
                    notifier.notify(EngineEvent::EscalatedEmpty {
                        document: document_name.clone(),
                    });
                    strategy = ExtractionStrategy::OcrOnly;
                    continue;
                }
                notifier.notify(EngineEvent::EmptyAccepted {
                    document: document_name.clone(),
                });
            }
        }

        return ExtractionOutcome {
            document_name,
            codes: valid,
            processing_time: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            used_ocr_only: strategy == ExtractionStrategy::OcrOnly,
        };
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
