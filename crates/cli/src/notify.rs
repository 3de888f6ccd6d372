// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Engine events and the run log.
//!
//! The engine reports what happened through [`Notifier`] and never touches
//! the filesystem itself. The production notifier, [`RunLog`], appends
//! timestamped lines to the output directory's log files the way other
//! tooling expects them: `logs.txt` for progress (opt-in), `error_logs.txt`
//! for faults (opt-in), and `skipped_files.txt` for documents whose text
//! could not be extracted (always on).

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::engine::ExtractionStrategy;

/// Events emitted while processing documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// An extraction attempt started for a document.
    AttemptStarted {
        document: String,
        strategy: ExtractionStrategy,
    },
    /// Fast pass produced malformed candidates; redoing with OCR.
    EscalatedInvalid {
        document: String,
        detected: Vec<String>,
    },
    /// Fast pass found nothing and `redo_empty` is set; redoing with OCR.
    EscalatedEmpty { document: String },
    /// Fast pass found nothing; accepted as-is (advisory, not an error).
    EmptyAccepted { document: String },
    /// The text extractor failed; the document proceeds with empty text.
    ExtractionFailed {
        document: String,
        path: PathBuf,
        error: String,
    },
    /// Processing failed outside the engine's control (caught per document).
    DocumentFailed { document: String, error: String },
}

/// Sink for engine events.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: EngineEvent);
}

/// File-backed notifier writing the run's log files.
pub struct RunLog {
    log_file: Option<PathBuf>,
    error_file: Option<PathBuf>,
    skipped_file: PathBuf,
    // Appends from concurrent workers must not interleave.
    write_lock: Mutex<()>,
}

impl RunLog {
    pub fn new(output_dir: &Path, log: bool, errors: bool) -> Self {
        Self {
            log_file: log.then(|| output_dir.join("logs.txt")),
            error_file: errors.then(|| output_dir.join("error_logs.txt")),
            skipped_file: output_dir.join("skipped_files.txt"),
            write_lock: Mutex::new(()),
        }
    }

    /// Progress line: console plus logs.txt when enabled.
    fn log(&self, message: &str) {
        tracing::info!("{message}");
        if let Some(path) = &self.log_file {
            self.append(path, &stamped(message));
        }
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
        let line = stamped(message);
        if let Some(path) = &self.log_file {
            self.append(path, &line);
        }
        if let Some(path) = &self.error_file {
            self.append(path, &line);
        }
    }

    fn append(&self, path: &Path, line: &str) {
        let guard = self.write_lock.lock();
        if guard.is_err() {
            return;
        }
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut f| writeln!(f, "{line}"));
        if let Err(err) = result {
            tracing::warn!("failed to append to {}: {err}", path.display());
        }
    }
}

impl Notifier for RunLog {
    fn notify(&self, event: EngineEvent) {
        match event {
            EngineEvent::AttemptStarted { document, strategy } => {
                self.log(&format!("Processing [{strategy}] {document}"));
            }
            EngineEvent::EscalatedInvalid { document, detected } => {
                self.log(&format!(
                    "Detected short or invalid codes in {document}, switching to ocr_only \
                     strategy for better accuracy. Detected: {detected:?}"
                ));
            }
            EngineEvent::EscalatedEmpty { document } => {
                self.log(&format!(
                    "Could not detect any valid codes in {document}, switching to ocr_only \
                     strategy for better accuracy."
                ));
            }
            EngineEvent::EmptyAccepted { document } => {
                self.log(&format!(
                    "Could not detect any valid codes in {document}. You can set --redo-empty \
                     to double check with the ocr_only strategy."
                ));
            }
            EngineEvent::ExtractionFailed { document, path, error } => {
                self.error(&format!("Error loading PDF {document}: {error}"));
                self.append(&self.skipped_file, &path.display().to_string());
            }
            EngineEvent::DocumentFailed { document, error } => {
                self.error(&format!("Failed to process {document}: {error}"));
            }
        }
    }
}

fn stamped(message: &str) -> String {
    format!("{} - {message}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
