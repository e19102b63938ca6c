//! Tag definitions and rule compilation.
//!
//! The three tracked metadata fields — author, copyright, and license — are
//! modeled by the [`Tag`] enum. Each tag has a fixed label regex that
//! recognizes its declaration line (e.g. `:author: Jane Doe`) and captures
//! the declared value. A [`TagRule`] pairs a tag with the accepted-value
//! patterns compiled from configuration; [`RuleSet`] holds the rules for
//! every *enabled* tag.
//!
//! # Placeholders
//!
//! Raw pattern strings may contain two placeholder tokens that are
//! substituted before compilation:
//!
//! - `<COMMA>` → a literal `,` — needed because the command-line channel
//!   splits pattern lists on commas.
//! - `<YEAR>` → the current four-digit calendar year, so copyright patterns
//!   can pin the present year without hard-coding it.

use chrono::Datelike;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::config::PatternsConfig;

/// Prefix shared by all diagnostic codes emitted by the checker.
pub const CODE_PREFIX: &str = "O10";

/// Placeholder token replaced by a literal comma before compilation.
pub const COMMA_PLACEHOLDER: &str = "<COMMA>";

/// Placeholder token replaced by the current four-digit year before compilation.
pub const YEAR_PLACEHOLDER: &str = "<YEAR>";

static AUTHOR_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^:author: (.+)$").unwrap());

static COPYRIGHT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:copyright: (.+)$").unwrap());

static LICENSE_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^:license: (.+)$").unwrap());

/// One of the three tracked metadata fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Author,
    Copyright,
    License,
}

impl Tag {
    /// Every tag in its fixed enumeration order.
    ///
    /// The order is observable: it decides which pending tag claims a line
    /// when more than one label could match, and it is the order in which
    /// "missing" diagnostics are emitted. It must stay author, copyright,
    /// license.
    pub const ALL: [Tag; 3] = [Tag::Author, Tag::Copyright, Tag::License];

    pub fn name(self) -> &'static str {
        match self {
            Tag::Author => "author",
            Tag::Copyright => "copyright",
            Tag::License => "license",
        }
    }

    /// Digit appended to [`CODE_PREFIX`] to form the diagnostic code.
    pub fn code_digit(self) -> &'static str {
        match self {
            Tag::Author => "0",
            Tag::Copyright => "1",
            Tag::License => "2",
        }
    }

    /// Full diagnostic code for this tag (`O100`, `O101`, `O102`).
    pub fn code(self) -> String {
        format!("{CODE_PREFIX}{}", self.code_digit())
    }

    /// Regex recognizing this tag's declaration line.
    ///
    /// Capture group 1 holds the declared value.
    pub fn label(self) -> &'static Regex {
        match self {
            Tag::Author => &AUTHOR_LABEL,
            Tag::Copyright => &COPYRIGHT_LABEL,
            Tag::License => &LICENSE_LABEL,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tag together with its compiled accepted-value patterns.
///
/// Rules only exist for enabled tags: a tag configured with zero pattern
/// strings never becomes a `TagRule`, never enters a scan's pending set, and
/// so never produces diagnostics — not even "missing".
#[derive(Debug)]
pub struct TagRule {
    pub tag: Tag,
    accepted: Vec<Regex>,
}

impl TagRule {
    /// Returns `true` when `value` matches at least one accepted pattern.
    ///
    /// Accepted patterns use search semantics: they may match anywhere in the
    /// value unless they anchor themselves.
    pub fn accepts(&self, value: &str) -> bool {
        self.accepted.iter().any(|re| re.is_match(value))
    }

    /// Number of accepted patterns configured for this tag.
    pub fn pattern_count(&self) -> usize {
        self.accepted.len()
    }
}

/// The active tag rules for a checker run, in enumeration order.
///
/// Compiled once at startup from configuration and shared read-only across
/// every per-file scan, so parallel scans never contend on it.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<TagRule>,
}

impl RuleSet {
    /// Compiles the configured pattern strings into active rules.
    ///
    /// For each tag, every raw pattern has its placeholders substituted via
    /// [`resolve_placeholders`] and is then compiled. A tag with zero
    /// patterns is skipped entirely (disabled). A malformed pattern aborts
    /// the whole compile with an error naming the tag and the offending
    /// pattern — a bad rule must never silently become "no rule".
    pub fn compile(patterns: &PatternsConfig) -> Result<RuleSet, String> {
        let year = current_year();
        let mut rules = Vec::new();
        for tag in Tag::ALL {
            let sources = patterns.for_tag(tag);
            if sources.is_empty() {
                continue;
            }
            let mut accepted = Vec::with_capacity(sources.len());
            for raw in sources {
                let resolved = resolve_placeholders(raw, &year);
                let re = Regex::new(&resolved).map_err(|e| {
                    format!("invalid {} pattern {raw:?}: {e}", tag.name())
                })?;
                accepted.push(re);
            }
            rules.push(TagRule { tag, accepted });
        }
        Ok(RuleSet { rules })
    }

    /// Active rules in enumeration order (author, copyright, license).
    pub fn rules(&self) -> &[TagRule] {
        &self.rules
    }

    /// Returns `true` when no tag is enabled.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns `true` when the given tag has at least one accepted pattern.
    pub fn is_enabled(&self, tag: Tag) -> bool {
        self.rules.iter().any(|r| r.tag == tag)
    }
}

/// Substitutes the `<COMMA>` and `<YEAR>` placeholders in a raw pattern.
pub fn resolve_placeholders(raw: &str, year: &str) -> String {
    raw.replace(COMMA_PLACEHOLDER, ",")
        .replace(YEAR_PLACEHOLDER, year)
}

/// The current calendar year as a four-digit decimal string.
pub fn current_year() -> String {
    chrono::Local::now().year().to_string()
}
