//! The line-scanning engine.
//!
//! A [`Checker`] scans a file's lines once, looking for the `:author:`,
//! `:copyright:`, and `:license:` declarations, and validates each declared
//! value against the configured accepted patterns. Per line, the first still
//! pending tag whose label matches claims the line; the claimed tag leaves
//! the pending set whether or not its value was recognized, so every tag
//! contributes at most one diagnostic per scan. Once all active tags have
//! been seen the scan stops without reading the rest of the file — a second,
//! differently-valued occurrence of an already-satisfied tag is never
//! inspected.
//!
//! The checker itself is read-only; all per-scan state lives in a private
//! `ScanState`, so one checker can serve any number of parallel file scans.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::diagnostic::Diagnostic;
use crate::tag::{RuleSet, TagRule};

/// Scans files for ownership tags using a compiled [`RuleSet`].
pub struct Checker<'a> {
    rules: &'a RuleSet,
}

impl<'a> Checker<'a> {
    pub fn new(rules: &'a RuleSet) -> Checker<'a> {
        Checker { rules }
    }

    /// Lazily scans an in-memory sequence of lines.
    ///
    /// The returned iterator yields diagnostics as they are found and stops
    /// pulling from `lines` as soon as every active tag has been matched, so
    /// the source may be abandoned partway through. After the line source is
    /// exhausted (or abandoned), any never-matched tags are yielded as
    /// "missing" diagnostics in enumeration order.
    pub fn scan<I>(&self, lines: I) -> Scan<'a, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Scan {
            state: ScanState::new(self.rules),
            lines: Some(lines.into_iter()),
        }
    }

    /// Reads `path` line by line and scans it.
    ///
    /// Reading stops as soon as every active tag has been matched, so the
    /// tail of a large file is never touched. I/O errors propagate to the
    /// caller; they are results of a failed scan, never diagnostics.
    pub fn check_file(&self, path: &Path) -> io::Result<Vec<Diagnostic>> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut state = ScanState::new(self.rules);
        let mut diagnostics = Vec::new();
        let mut buf = String::new();

        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                break;
            }
            if let Some(diag) = state.observe(&buf) {
                diagnostics.push(diag);
            }
            if state.satisfied() {
                break;
            }
        }

        while let Some(diag) = state.next_missing() {
            diagnostics.push(diag);
        }
        Ok(diagnostics)
    }
}

/// Per-scan mutable state: the pending tags and the line counter.
struct ScanState<'a> {
    /// Active rules not yet matched in this scan, in enumeration order.
    pending: Vec<&'a TagRule>,
    line: usize,
}

impl<'a> ScanState<'a> {
    fn new(rules: &'a RuleSet) -> ScanState<'a> {
        ScanState {
            pending: rules.rules().iter().collect(),
            line: 0,
        }
    }

    /// Consumes one line, stripping exactly one trailing line terminator.
    ///
    /// The first pending rule whose label matches claims the line; later
    /// pending rules are not tested against the same line. The claimed rule
    /// leaves the pending set regardless of whether its value was
    /// recognized.
    fn observe(&mut self, line: &str) -> Option<Diagnostic> {
        self.line += 1;
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let (index, caps) = self
            .pending
            .iter()
            .enumerate()
            .find_map(|(i, rule)| rule.tag.label().captures(line).map(|caps| (i, caps)))?;

        let rule = self.pending.remove(index);
        let value = caps.get(1).map_or("", |m| m.as_str());
        if rule.accepts(value) {
            None
        } else {
            Some(Diagnostic::unrecognized(rule.tag, self.line))
        }
    }

    /// `true` once every active tag has been seen, valid or not.
    fn satisfied(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drains the never-matched tags as "missing" diagnostics, front first
    /// to preserve enumeration order.
    fn next_missing(&mut self) -> Option<Diagnostic> {
        if self.pending.is_empty() {
            None
        } else {
            Some(Diagnostic::missing(self.pending.remove(0).tag))
        }
    }
}

/// Lazy diagnostic sequence returned by [`Checker::scan`].
pub struct Scan<'a, I> {
    state: ScanState<'a>,
    lines: Option<I>,
}

impl<'a, I> Iterator for Scan<'a, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Diagnostic;

    fn next(&mut self) -> Option<Diagnostic> {
        if let Some(lines) = self.lines.as_mut() {
            while !self.state.satisfied() {
                let Some(line) = lines.next() else { break };
                if let Some(diag) = self.state.observe(line.as_ref()) {
                    return Some(diag);
                }
            }
            // Input exhausted or every tag seen; drop the source either way.
            self.lines = None;
        }
        self.state.next_missing()
    }
}
