//! Parallel batch runner with per-document error recovery.
//!
//! Documents are independent; a bounded rayon pool processes them and the
//! result store is the only shared mutable state. Each store upsert runs
//! under one lock so concurrent read-modify-write cycles cannot lose rows.

use std::path::PathBuf;
use std::sync::Mutex;

use rayon::prelude::*;

use crate::engine;
use crate::extractor::TextExtractor;
use crate::notify::{EngineEvent, Notifier};
use crate::store::ResultStore;

/// Configuration for a batch run.
pub struct BatchOptions {
    /// Worker pool size.
    pub threads: usize,
    /// Escalate documents that yielded no codes.
    pub redo_empty: bool,
}

/// Counts for the batch summary line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents with a persisted outcome row.
    pub processed: usize,
    /// Documents that failed outside the engine's own recovery.
    pub failed: usize,
}

/// Process every document and upsert each outcome into the store.
///
/// Failures are contained at single-document granularity: a panicking or
/// erroring document is reported through the notifier and the batch moves
/// on. The store never receives a partial outcome.
pub fn run_batch(
    files: &[PathBuf],
    extractor: &dyn TextExtractor,
    notifier: &dyn Notifier,
    store: &Mutex<ResultStore>,
    options: &BatchOptions,
) -> anyhow::Result<BatchSummary> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads)
        .build()?;

    let results: Vec<bool> = pool.install(|| {
        files
            .par_iter()
            .map(|path| process_one(path, extractor, notifier, store, options.redo_empty))
            .collect()
    });

    let processed = results.iter().filter(|ok| **ok).count();
    Ok(BatchSummary {
        processed,
        failed: results.len() - processed,
    })
}

/// Returns true when the document's outcome reached the store.
fn process_one(
    path: &PathBuf,
    extractor: &dyn TextExtractor,
    notifier: &dyn Notifier,
    store: &Mutex<ResultStore>,
    redo_empty: bool,
) -> bool {
    let document = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    // Isolate panics so one bad document cannot take down the batch.
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        engine::process_document(path, extractor, notifier, redo_empty)
    }));

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(_) => {
            notifier.notify(EngineEvent::DocumentFailed {
                document,
                error: "internal error: extraction panicked".to_string(),
            });
            return false;
        }
    };

    let upserted = match store.lock() {
        Ok(mut store) => store.upsert(outcome).map_err(|e| e.to_string()),
        Err(_) => Err("result store lock poisoned".to_string()),
    };

    match upserted {
        Ok(()) => true,
        Err(error) => {
            notifier.notify(EngineEvent::DocumentFailed { document, error });
            false
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
