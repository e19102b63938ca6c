//! Human-readable colored text formatter.
//!
//! Produces a terminal-friendly report with ANSI color codes, showing each
//! file's pass/fail status, individual diagnostics with their source
//! locations, and a one-line summary.

use crate::diagnostic::{CheckReport, CheckStatus};
use colored::Colorize;

/// Formats a [`CheckReport`] as human-readable, ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header** — timestamp of the run.
/// 2. **Files** — per-file pass/fail/error status with diagnostics.
/// 3. **Summary** — overall status and per-tag diagnostic counts.
pub fn format(report: &CheckReport) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "\n{}\n",
        "  Ownership Check  ".bold().on_blue().white()
    ));
    out.push_str(&format!("  Timestamp: {}\n\n", report.timestamp));

    for file in &report.files {
        let icon = if file.error.is_some() {
            "ERROR".red().bold().to_string()
        } else if file.diagnostics.is_empty() {
            " PASS".green().bold().to_string()
        } else {
            " FAIL".red().bold().to_string()
        };

        let detail = match &file.error {
            Some(e) => e.red().to_string(),
            None => format!("{} diagnostics", file.diagnostics.len()),
        };

        out.push_str(&format!(
            "  [{icon}] {name:<40} {detail}\n",
            name = file.path.display().to_string(),
        ));

        for diag in &file.diagnostics {
            out.push_str(&format!(
                "          {location}  {message}\n",
                location = format!("{}:{}:{}", file.path.display(), diag.line, diag.column)
                    .dimmed(),
                message = diag.message,
            ));
        }
    }
    out.push('\n');

    // Summary
    let status_str = match report.status {
        CheckStatus::Passed => "PASSED".green().bold().to_string(),
        CheckStatus::Failed => "FAILED".red().bold().to_string(),
        CheckStatus::Error => "ERROR".red().bold().to_string(),
    };

    // Single pass for all three per-tag counts.
    let (author, copyright, license) = report.count_by_tag();
    out.push_str(&format!(
        "Result: {status_str}  |  {} files, {} author, {} copyright, {} license\n",
        report.files.len(),
        author,
        copyright,
        license,
    ));

    out
}
