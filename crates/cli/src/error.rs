// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes.

/// Exit code contract for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Batch completed (individual documents may still have been skipped).
    Success,
    /// The command itself failed.
    Failure,
    /// Invalid invocation (bad paths, no PDFs found).
    Usage,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => std::process::ExitCode::from(0),
            ExitCode::Failure => std::process::ExitCode::from(1),
            ExitCode::Usage => std::process::ExitCode::from(2),
        }
    }
}
