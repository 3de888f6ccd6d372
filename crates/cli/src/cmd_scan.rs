// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `paritex scan` command implementation.
//!
//! Resolves config, collects input PDFs, and runs the extraction engine
//! over them with a bounded worker pool, upserting one row per document
//! into `<output_dir>/output.csv`.

use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;

use crate::cli::ScanArgs;
use crate::config::{Config, defaults};
use crate::discovery;
use crate::error::ExitCode;
use crate::extractor::PdfToolchain;
use crate::notify::RunLog;
use crate::runner::{self, BatchOptions};
use crate::store::ResultStore;

/// Run the `paritex scan` command.
pub fn run(args: &ScanArgs, config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let config = load_config(args, config_path)?;
    let scan = &config.scan;

    let max_depth = args
        .max_depth
        .or(scan.max_depth)
        .unwrap_or(defaults::MAX_DEPTH);
    let files = discovery::find_pdfs(&args.input, max_depth);
    if files.is_empty() {
        eprintln!(
            "no PDF files found at {} (expected a .pdf file or a directory containing them)",
            args.input.display()
        );
        return Ok(ExitCode::Usage);
    }

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("failed to create {}", args.output_dir.display()))?;

    let store = Mutex::new(ResultStore::load_or_init(args.output_dir.join("output.csv"))?);
    let run_log = RunLog::new(&args.output_dir, args.log, args.errors);
    let languages = scan
        .ocr_languages
        .clone()
        .unwrap_or_else(|| defaults::OCR_LANGUAGES.to_string());
    let extractor = PdfToolchain::new(languages);

    let options = BatchOptions {
        threads: args.threads.or(scan.threads).unwrap_or(defaults::THREADS),
        redo_empty: args.redo_empty || scan.redo_empty.unwrap_or(false),
    };

    let summary = runner::run_batch(&files, &extractor, &run_log, &store, &options)?;

    let csv_path = match store.lock() {
        Ok(store) => store.path().display().to_string(),
        Err(_) => args.output_dir.join("output.csv").display().to_string(),
    };
    println!(
        "CSV file has been updated: {csv_path} ({} processed, {} failed)",
        summary.processed, summary.failed
    );

    Ok(ExitCode::Success)
}

/// Explicit config path wins; otherwise discover paritex.toml upward from
/// the input (falling back to the current directory for missing inputs).
fn load_config(args: &ScanArgs, config_path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = config_path {
        return Ok(Config::load(path)?);
    }

    let start = if args.input.is_dir() {
        args.input.clone()
    } else {
        args.input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| std::path::PathBuf::from("."))
    };

    match discovery::find_config(&start) {
        Some(path) => Ok(Config::load(&path)?),
        None => Ok(Config::default()),
    }
}
