// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PDF text extraction backends.
//!
//! The engine only sees the [`TextExtractor`] trait; the production
//! implementation shells out to poppler (`pdftotext`, `pdftoppm`) and
//! tesseract. Extraction failure is non-fatal per document.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::engine::ExtractionStrategy;

/// Errors from an extraction backend, localized to one document.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{tool} failed on {path}: {stderr}")]
    Tool {
        tool: &'static str,
        path: PathBuf,
        stderr: String,
    },

    #[error("{tool} produced non-UTF-8 output")]
    Encoding { tool: &'static str },

    #[error("OCR scratch directory: {0}")]
    Scratch(io::Error),
}

/// Turns a document into raw text for a given strategy.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path, strategy: ExtractionStrategy) -> Result<String, ExtractError>;
}

/// Production extractor backed by the poppler utilities and tesseract.
pub struct PdfToolchain {
    /// Tesseract language list, e.g. `eng+fra+nld`.
    ocr_languages: String,
}

impl PdfToolchain {
    pub fn new(ocr_languages: impl Into<String>) -> Self {
        Self { ocr_languages: ocr_languages.into() }
    }

    /// `pdftotext -layout <pdf> -`: the embedded text layer, if any.
    fn extract_fast(&self, path: &Path) -> Result<String, ExtractError> {
        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(path)
            .arg("-")
            .output()
            .map_err(|source| ExtractError::Spawn { tool: "pdftotext", source })?;

        if !output.status.success() {
            return Err(tool_error("pdftotext", path, &output.stderr));
        }
        String::from_utf8(output.stdout).map_err(|_| ExtractError::Encoding { tool: "pdftotext" })
    }

    /// Rasterize each page with `pdftoppm`, then OCR it with tesseract.
    fn extract_ocr(&self, path: &Path) -> Result<String, ExtractError> {
        let scratch = tempfile::tempdir().map_err(ExtractError::Scratch)?;
        let prefix = scratch.path().join("page");

        let output = Command::new("pdftoppm")
            .args(["-r", "300", "-png"])
            .arg(path)
            .arg(&prefix)
            .output()
            .map_err(|source| ExtractError::Spawn { tool: "pdftoppm", source })?;
        if !output.status.success() {
            return Err(tool_error("pdftoppm", path, &output.stderr));
        }

        let mut pages = Vec::new();
        for entry in std::fs::read_dir(scratch.path()).map_err(ExtractError::Scratch)? {
            pages.push(entry.map_err(ExtractError::Scratch)?.path());
        }
        pages.sort();

        let mut texts = Vec::with_capacity(pages.len());
        for page in &pages {
            let output = Command::new("tesseract")
                .arg(page)
                .arg("stdout")
                .args(["-l", &self.ocr_languages])
                .output()
                .map_err(|source| ExtractError::Spawn { tool: "tesseract", source })?;
            if !output.status.success() {
                return Err(tool_error("tesseract", path, &output.stderr));
            }
            let text = String::from_utf8(output.stdout)
                .map_err(|_| ExtractError::Encoding { tool: "tesseract" })?;
            texts.push(text);
        }

        Ok(texts.join("\n\n"))
    }
}

impl TextExtractor for PdfToolchain {
    fn extract(&self, path: &Path, strategy: ExtractionStrategy) -> Result<String, ExtractError> {
        match strategy {
            ExtractionStrategy::Fast => self.extract_fast(path),
            ExtractionStrategy::OcrOnly => self.extract_ocr(path),
        }
    }
}

fn tool_error(tool: &'static str, path: &Path, stderr: &[u8]) -> ExtractError {
    ExtractError::Tool {
        tool,
        path: path.to_path_buf(),
        stderr: String::from_utf8_lossy(stderr).trim().to_string(),
    }
}
