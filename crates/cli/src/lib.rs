// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Joint-committee sector code extraction.
//!
//! Scans PDF documents for "commission paritaire" / "paritair comité"
//! sector identifiers and accumulates one outcome row per document in a
//! CSV table. Extraction starts with cheap layout-based text and escalates
//! to OCR when the cheap pass looks corrupted or comes back empty.

pub mod cli;
pub mod cmd_report;
pub mod cmd_scan;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod notify;
pub mod runner;
pub mod store;

#[cfg(test)]
pub mod test_utils;
