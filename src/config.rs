//! Configuration loading and management.
//!
//! Accepted-value patterns come from two channels: a project-level TOML file
//! and the `--author-re` / `--copyright-re` / `--license-re` command-line
//! flags. The file supplies defaults; flags given on the command line
//! override the file's list for that tag.
//!
//! # Configuration file
//!
//! The default configuration file is `ownership-lint.toml` in the current
//! working directory. Use [`Config::load`] to read it:
//!
//! ```toml
//! [patterns]
//! author = ["^Jane Doe <jane@example\\.com>$"]
//! copyright = ["Copyright \\(c\\) Jane Doe<COMMA> <YEAR>"]
//! license = ["^BSD$"]
//! ```
//!
//! A tag whose list is empty (or absent) is disabled and produces no
//! diagnostics at all. Pattern strings may use the `<COMMA>` and `<YEAR>`
//! placeholders described in [`crate::tag`].

use std::path::Path;

use crate::tag::Tag;

/// Main configuration for a checker run.
///
/// Loaded from a TOML file (typically `ownership-lint.toml`). All fields
/// default to empty, meaning every tag check is disabled until patterns are
/// configured.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Accepted-value pattern strings, one list per tag.
    pub patterns: PatternsConfig,
}

/// Raw (uncompiled) accepted-value pattern strings for each tag.
///
/// An empty list disables that tag's check entirely.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PatternsConfig {
    /// Regular expression(s) for valid `:author:` values.
    pub author: Vec<String>,
    /// Regular expression(s) for valid `:copyright:` values.
    pub copyright: Vec<String>,
    /// Regular expression(s) for valid `:license:` values.
    pub license: Vec<String>,
}

impl PatternsConfig {
    /// The raw pattern strings configured for `tag`.
    pub fn for_tag(&self, tag: Tag) -> &[String] {
        match tag {
            Tag::Author => &self.author,
            Tag::Copyright => &self.copyright,
            Tag::License => &self.license,
        }
    }

    fn slot_mut(&mut self, tag: Tag) -> &mut Vec<String> {
        match tag {
            Tag::Author => &mut self.author,
            Tag::Copyright => &mut self.copyright,
            Tag::License => &mut self.license,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `ownership-lint.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`]
    ///    (every tag disabled).
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when:
    /// - The explicit path does not exist.
    /// - The file cannot be read from disk.
    /// - The TOML content fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new("ownership-lint.toml");
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                let config: Config = toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }

    /// Overrides per-tag pattern lists with values from the command line.
    ///
    /// A tag with no command-line patterns keeps its file-configured list;
    /// a non-empty flag list replaces the file's list for that tag.
    pub fn apply_cli_patterns(
        &mut self,
        author: &[String],
        copyright: &[String],
        license: &[String],
    ) {
        for (tag, values) in [
            (Tag::Author, author),
            (Tag::Copyright, copyright),
            (Tag::License, license),
        ] {
            if !values.is_empty() {
                *self.patterns.slot_mut(tag) = values.to_vec();
            }
        }
    }
}
