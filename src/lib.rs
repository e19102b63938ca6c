//! # ownership-lint
//!
//! Line-oriented linter for source-file ownership metadata.
//!
//! `ownership-lint` scans a file's text for the `:author:`, `:copyright:`,
//! and `:license:` declaration lines and validates each declared value
//! against configured regular expressions. It reports a diagnostic for every
//! enabled tag that is absent (`O10x missing <tag>`) or whose value matches
//! no accepted pattern (`O10x unrecognized <tag>`). A file is scanned in a
//! single pass that stops as soon as every enabled tag has been seen.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use ownership_lint::{config::Config, runner, tag::RuleSet};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let rules = RuleSet::compile(&config.patterns).expect("invalid pattern");
//! let report = runner::run_check(&[PathBuf::from("src/lib.rs")], &rules);
//!
//! if report.passed {
//!     println!("All files clean!");
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`config`]** — load pattern lists from TOML files and CLI flags.
//! 2. **[`tag`]** — tag definitions, placeholder substitution, and rule
//!    compilation ([`tag::RuleSet`]).
//! 3. **[`checker`]** — the single-pass, early-stopping scan engine.
//! 4. **[`runner`]** — check a batch of files in parallel.
//! 5. **[`diagnostic`]** — core data types ([`diagnostic::Diagnostic`],
//!    [`diagnostic::CheckReport`]).
//! 6. **[`output`]** — format reports as pretty text, JSON, or [SARIF].
//!
//! ## Diagnostic codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | `O100` | `:author:` missing or unrecognized |
//! | `O101` | `:copyright:` missing or unrecognized |
//! | `O102` | `:license:` missing or unrecognized |
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod checker;
pub mod config;
pub mod diagnostic;
pub mod output;
pub mod runner;
pub mod tag;
