use std::path::PathBuf;

use crate::tag::Tag;

/// Name reported in the `checker` field of every diagnostic.
///
/// The host uses it to attribute findings to this checker when aggregating
/// output from multiple checks.
pub const CHECKER_NAME: &str = "ownership-lint";

/// A single reported finding.
///
/// "Missing" diagnostics carry line 0 because no meaningful location exists;
/// "unrecognized" diagnostics carry the 1-based line of the label that was
/// found. The column is always 0 — consumers depend on this, so no attempt
/// is made to report the matched substring's offset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub checker: &'static str,
    pub tag: Tag,
}

impl Diagnostic {
    /// Diagnostic for a tag whose label never appeared in the file.
    pub fn missing(tag: Tag) -> Diagnostic {
        Diagnostic {
            line: 0,
            column: 0,
            message: format!("{} missing {}", tag.code(), tag.name()),
            checker: CHECKER_NAME,
            tag,
        }
    }

    /// Diagnostic for a label whose value matched no accepted pattern.
    pub fn unrecognized(tag: Tag, line: usize) -> Diagnostic {
        Diagnostic {
            line,
            column: 0,
            message: format!("{} unrecognized {}", tag.code(), tag.name()),
            checker: CHECKER_NAME,
            tag,
        }
    }
}

/// Outcome of scanning a single file.
#[derive(Debug, serde::Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    /// Set when the file could not be read. A read failure is a hard failure
    /// for that file, never a normal diagnostic and never a silent skip.
    pub error: Option<String>,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.error.is_none() && self.diagnostics.is_empty()
    }
}

/// Overall outcome of a checker run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Every file was read and produced no diagnostics.
    Passed,
    /// At least one diagnostic was emitted.
    Failed,
    /// At least one file could not be read.
    Error,
}

/// Aggregated result of one checker run across all requested files.
#[derive(Debug, serde::Serialize)]
pub struct CheckReport {
    pub timestamp: String,
    pub status: CheckStatus,
    pub passed: bool,
    pub files: Vec<FileReport>,
}

impl CheckReport {
    pub fn from_files(files: Vec<FileReport>) -> CheckReport {
        // Single pass: track both flags simultaneously.
        let (has_error, has_diagnostic) = files.iter().fold((false, false), |(e, d), f| {
            (e || f.error.is_some(), d || !f.diagnostics.is_empty())
        });

        let status = if has_error {
            CheckStatus::Error
        } else if has_diagnostic {
            CheckStatus::Failed
        } else {
            CheckStatus::Passed
        };

        CheckReport {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status,
            passed: matches!(status, CheckStatus::Passed),
            files,
        }
    }

    /// Total diagnostics across all files.
    pub fn diagnostic_count(&self) -> usize {
        self.files.iter().map(|f| f.diagnostics.len()).sum()
    }

    /// Count diagnostics per tag in a single pass.
    ///
    /// Returns `(author, copyright, license)`.
    pub fn count_by_tag(&self) -> (usize, usize, usize) {
        self.files
            .iter()
            .flat_map(|f| f.diagnostics.iter())
            .fold((0, 0, 0), |(a, c, l), d| match d.tag {
                Tag::Author => (a + 1, c, l),
                Tag::Copyright => (a, c + 1, l),
                Tag::License => (a, c, l + 1),
            })
    }

    /// Process exit code for this run: 0 passed, 1 diagnostics found,
    /// 2 read errors.
    pub fn exit_code(&self) -> i32 {
        match self.status {
            CheckStatus::Passed => 0,
            CheckStatus::Failed => 1,
            CheckStatus::Error => 2,
        }
    }
}
