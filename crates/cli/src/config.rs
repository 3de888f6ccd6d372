// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading from paritex.toml.
//!
//! All values are optional; CLI flags win over file values, which win
//! over the defaults in [`defaults`].

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Centralized default values.
pub mod defaults {
    /// Worker pool size (1: extraction is already process-parallel heavy).
    pub const THREADS: usize = 1;

    /// Maximum directory depth when scanning for PDFs.
    pub const MAX_DEPTH: usize = 100;

    /// Tesseract language list used by the OCR strategy.
    pub const OCR_LANGUAGES: &str = "eng+fra+nld";
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
}

/// The `[scan]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    pub threads: Option<usize>,
    pub redo_empty: Option<bool>,
    pub max_depth: Option<usize>,
    pub ocr_languages: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
