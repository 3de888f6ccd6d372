//! Shared helpers for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;
use std::sync::Mutex;

use crate::engine::{ExtractionOutcome, ExtractionStrategy};
use crate::extractor::{ExtractError, TextExtractor};
use crate::notify::{EngineEvent, Notifier};

/// Extractor returning canned text per strategy. `None` simulates an
/// extraction failure for that strategy.
pub struct ScriptedExtractor {
    pub fast: Option<String>,
    pub ocr: Option<String>,
}

impl ScriptedExtractor {
    pub fn new(fast: impl Into<String>, ocr: impl Into<String>) -> Self {
        Self {
            fast: Some(fast.into()),
            ocr: Some(ocr.into()),
        }
    }
}

impl TextExtractor for ScriptedExtractor {
    fn extract(&self, _path: &Path, strategy: ExtractionStrategy) -> Result<String, ExtractError> {
        let text = match strategy {
            ExtractionStrategy::Fast => &self.fast,
            ExtractionStrategy::OcrOnly => &self.ocr,
        };
        text.clone().ok_or(ExtractError::Encoding { tool: "scripted" })
    }
}

/// Notifier that records every event for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<EngineEvent>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Notifier that drops everything.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: EngineEvent) {}
}

/// Build an outcome with a fixed timestamp for store tests.
pub fn outcome(name: &str, codes: &[&str], used_ocr_only: bool) -> ExtractionOutcome {
    ExtractionOutcome {
        document_name: name.to_string(),
        codes: codes.iter().map(|c| c.to_string()).collect(),
        processing_time: "2026-08-28 12:00:00".to_string(),
        used_ocr_only,
    }
}
