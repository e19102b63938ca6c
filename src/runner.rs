//! Check orchestration.
//!
//! [`run_check`] is the main entry-point for checking a batch of files. The
//! rule set is compiled once by the caller and shared read-only; files are
//! scanned in parallel via [rayon], each scan carrying only its own local
//! state.

use rayon::prelude::*;
use std::path::PathBuf;

use crate::checker::Checker;
use crate::diagnostic::{CheckReport, FileReport};
use crate::tag::RuleSet;

/// Checks every path independently and assembles the final [`CheckReport`].
///
/// A file that cannot be read is recorded as a per-file error in its
/// [`FileReport`]; the run's status becomes
/// [`CheckStatus::Error`](crate::diagnostic::CheckStatus::Error) and the
/// exit code 2.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::PathBuf;
/// use ownership_lint::{config::Config, runner, tag::RuleSet};
///
/// let config = Config::load(None)?;
/// let rules = RuleSet::compile(&config.patterns)?;
/// let report = runner::run_check(&[PathBuf::from("src/lib.rs")], &rules);
/// std::process::exit(report.exit_code());
/// # Ok::<(), String>(())
/// ```
pub fn run_check(paths: &[PathBuf], rules: &RuleSet) -> CheckReport {
    let checker = Checker::new(rules);

    let files: Vec<FileReport> = paths
        .par_iter()
        .map(|path| match checker.check_file(path) {
            Ok(diagnostics) => FileReport {
                path: path.clone(),
                diagnostics,
                error: None,
            },
            Err(e) => FileReport {
                path: path.clone(),
                diagnostics: vec![],
                error: Some(e.to_string()),
            },
        })
        .collect();

    CheckReport::from_files(files)
}
