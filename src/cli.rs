use clap::{Parser, Subcommand};
use ownership_lint::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ownership-lint",
    version,
    about = "Checks that author, copyright, and license are specified in source files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check files for :author:, :copyright:, and :license: declarations
    Check {
        /// Files to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Regular expression(s) for valid :author: values (comma-separated;
        /// use <COMMA> for a literal comma, <YEAR> for the current year)
        #[arg(long = "author-re", value_name = "RE", value_delimiter = ',')]
        author_re: Vec<String>,

        /// Regular expression(s) for valid :copyright: values
        #[arg(long = "copyright-re", value_name = "RE", value_delimiter = ',')]
        copyright_re: Vec<String>,

        /// Regular expression(s) for valid :license: values
        #[arg(long = "license-re", value_name = "RE", value_delimiter = ',')]
        license_re: Vec<String>,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the tag rules active under the current configuration
    ListTags {
        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
