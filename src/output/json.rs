//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document containing the run metadata, a
//! per-tag summary, and every file's diagnostics.

use crate::diagnostic::{CheckReport, CheckStatus, FileReport};

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    timestamp: &'a str,
    status: &'a CheckStatus,
    passed: bool,
    summary: Summary,
    files: &'a [FileReport],
}

#[derive(serde::Serialize)]
struct Summary {
    files: usize,
    diagnostics: usize,
    author: usize,
    copyright: usize,
    license: usize,
}

/// Formats a [`CheckReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &CheckReport) -> String {
    let output = JsonOutput {
        timestamp: &report.timestamp,
        status: &report.status,
        passed: report.passed,
        summary: {
            // Single pass over diagnostics instead of three separate iterations.
            let (author, copyright, license) = report.count_by_tag();
            Summary {
                files: report.files.len(),
                diagnostics: report.diagnostic_count(),
                author,
                copyright,
                license,
            }
        },
        files: &report.files,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
