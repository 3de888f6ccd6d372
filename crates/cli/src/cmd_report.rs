// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `paritex report` command implementation.
//!
//! Renders the persisted result table in text or JSON form.

use crate::cli::{OutputFormat, ReportArgs};
use crate::error::ExitCode;
use crate::store::{OutcomeRow, ResultStore};

/// Trait for formatting the result table into an output format.
pub trait ReportFormatter {
    /// Format stored rows into the target format.
    fn format(&self, rows: &[OutcomeRow]) -> anyhow::Result<String>;

    /// Return output for when no table exists yet.
    fn format_empty(&self) -> String;
}

pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, rows: &[OutcomeRow]) -> anyhow::Result<String> {
        let name_width = rows
            .iter()
            .map(|r| r.document_name.len())
            .chain(std::iter::once("Document".len()))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&format!(
            "{:<name_width$}  {:>5}  {:>10}  {:<19}  Codes\n",
            "Document", "Count", "Strategy", "Processed"
        ));
        for row in rows {
            let strategy = if row.used_ocr_only { "ocr_only" } else { "fast" };
            out.push_str(&format!(
                "{:<name_width$}  {:>5}  {:>10}  {:<19}  {}\n",
                row.document_name,
                row.number_of_codes,
                strategy,
                row.processing_time,
                row.sector_codes
            ));
        }
        Ok(out)
    }

    fn format_empty(&self) -> String {
        "No results recorded yet. Run `paritex scan` first.\n".to_string()
    }
}

pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, rows: &[OutcomeRow]) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(rows)?)
    }

    fn format_empty(&self) -> String {
        "[]".to_string()
    }
}

/// Run the `paritex report` command.
pub fn run(args: &ReportArgs) -> anyhow::Result<ExitCode> {
    let path = args.output_dir.join("output.csv");
    let formatter: Box<dyn ReportFormatter> = match args.output {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    let output = if path.exists() {
        let store = ResultStore::load_or_init(path)?;
        formatter.format(store.rows())?
    } else {
        formatter.format_empty()
    };

    println!("{output}");
    Ok(ExitCode::Success)
}

#[cfg(test)]
#[path = "cmd_report_tests.rs"]
mod tests;
