// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persistent result table.
//!
//! One CSV row per document, keyed by document name. Every upsert drops
//! any stale row for the same document and rewrites the whole file, so a
//! crash mid-batch loses at most the in-flight document. The header names
//! are a durable contract read by downstream tooling.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::ExtractionOutcome;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("result store I/O on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("result store CSV on {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// One persisted row of the result table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRow {
    #[serde(rename = "Document Name")]
    pub document_name: String,
    #[serde(rename = "Sector Codes")]
    pub sector_codes: String,
    #[serde(rename = "Number of Codes")]
    pub number_of_codes: usize,
    #[serde(rename = "Processing Time")]
    pub processing_time: String,
    #[serde(rename = "Used OCR Only")]
    pub used_ocr_only: bool,
}

impl From<ExtractionOutcome> for OutcomeRow {
    fn from(outcome: ExtractionOutcome) -> Self {
        Self {
            sector_codes: outcome.joined_codes(),
            number_of_codes: outcome.codes.len(),
            document_name: outcome.document_name,
            processing_time: outcome.processing_time,
            used_ocr_only: outcome.used_ocr_only,
        }
    }
}

/// Keyed table of extraction outcomes, mirrored to a CSV file.
pub struct ResultStore {
    path: PathBuf,
    rows: Vec<OutcomeRow>,
}

impl ResultStore {
    /// Read the persisted table if present, else start empty. The file
    /// itself is created lazily on the first upsert.
    pub fn load_or_init(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let rows = if path.exists() {
            let file = File::open(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            let mut reader = csv::Reader::from_reader(file);
            let mut rows = Vec::new();
            for record in reader.deserialize() {
                rows.push(record.map_err(|source| StoreError::Csv {
                    path: path.clone(),
                    source,
                })?);
            }
            rows
        } else {
            Vec::new()
        };
        Ok(Self { path, rows })
    }

    /// Replace any row for the outcome's document and persist the table.
    /// Last write wins per document name; re-applying an identical outcome
    /// leaves the table observationally unchanged.
    pub fn upsert(&mut self, outcome: ExtractionOutcome) -> Result<(), StoreError> {
        let row = OutcomeRow::from(outcome);
        self.rows.retain(|r| r.document_name != row.document_name);
        self.rows.push(row);
        self.persist()
    }

    pub fn rows(&self) -> &[OutcomeRow] {
        &self.rows
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full rewrite via a sibling temp file and rename, so readers never
    /// observe a half-written table.
    fn persist(&self) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("csv.tmp");
        let mut writer = csv::Writer::from_path(&tmp).map_err(|source| StoreError::Csv {
            path: tmp.clone(),
            source,
        })?;
        for row in &self.rows {
            writer.serialize(row).map_err(|source| StoreError::Csv {
                path: tmp.clone(),
                source,
            })?;
        }
        writer.flush().map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        drop(writer);
        std::fs::rename(&tmp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
