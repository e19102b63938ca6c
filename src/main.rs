mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use ownership_lint::{config, output, runner, tag};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            paths,
            author_re,
            copyright_re,
            license_re,
            format,
            output: output_path,
            config: config_path,
        } => {
            let mut config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });
            config.apply_cli_patterns(&author_re, &copyright_re, &license_re);

            // A malformed pattern aborts here, before any file is scanned.
            let rules = tag::RuleSet::compile(&config.patterns).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            let report = runner::run_check(&paths, &rules);
            let formatted = output::format_report(&report, &format);

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }

            std::process::exit(report.exit_code());
        }

        Commands::ListTags {
            config: config_path,
        } => {
            let config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            let rules = tag::RuleSet::compile(&config.patterns).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            println!("{}", "Tag Rules".bold().underline());
            println!();

            for t in tag::Tag::ALL {
                let detail = match rules.rules().iter().find(|r| r.tag == t) {
                    Some(rule) => format!("{} pattern(s)", rule.pattern_count())
                        .green()
                        .to_string(),
                    None => "disabled".dimmed().to_string(),
                };
                println!("  [{code}] {name:<12} {detail}", code = t.code(), name = t.name());
            }

            println!();
            if rules.is_empty() {
                println!("No tags enabled; configure patterns in ownership-lint.toml");
            }
        }
    }
}
