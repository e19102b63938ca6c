use std::path::PathBuf;

use ownership_lint::diagnostic::{CheckReport, Diagnostic, FileReport};
use ownership_lint::output::{format_report, OutputFormat};
use ownership_lint::tag::Tag;

fn sample_report() -> CheckReport {
    CheckReport::from_files(vec![
        FileReport {
            path: PathBuf::from("src/clean.rs"),
            diagnostics: vec![],
            error: None,
        },
        FileReport {
            path: PathBuf::from("src/dirty.rs"),
            diagnostics: vec![
                Diagnostic::unrecognized(Tag::Author, 3),
                Diagnostic::missing(Tag::License),
            ],
            error: None,
        },
    ])
}

#[test]
fn report_status_reflects_diagnostics() {
    let report = sample_report();
    assert!(!report.passed);
    assert_eq!(report.diagnostic_count(), 2);
    assert_eq!(report.count_by_tag(), (1, 0, 1));
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn clean_report_passes() {
    let report = CheckReport::from_files(vec![FileReport {
        path: PathBuf::from("src/clean.rs"),
        diagnostics: vec![],
        error: None,
    }]);
    assert!(report.passed);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn read_error_dominates_status() {
    let report = CheckReport::from_files(vec![FileReport {
        path: PathBuf::from("src/gone.rs"),
        diagnostics: vec![],
        error: Some("No such file or directory".to_string()),
    }]);
    assert!(!report.passed);
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn pretty_output_contains_messages_and_result() {
    let report = sample_report();
    let text = format_report(&report, &OutputFormat::Pretty);
    assert!(text.contains("O100 unrecognized author"));
    assert!(text.contains("O102 missing license"));
    assert!(text.contains("src/dirty.rs:3:0"));
    assert!(text.contains("Result:"));
}

#[test]
fn json_output_is_valid_and_summarized() {
    let report = sample_report();
    let text = format_report(&report, &OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["passed"], serde_json::json!(false));
    assert_eq!(value["status"], serde_json::json!("failed"));
    assert_eq!(value["summary"]["diagnostics"], serde_json::json!(2));
    assert_eq!(value["summary"]["author"], serde_json::json!(1));
    assert_eq!(value["files"][1]["diagnostics"][0]["message"],
        serde_json::json!("O100 unrecognized author"));
}

#[test]
fn sarif_output_has_rules_and_locations() {
    let report = sample_report();
    let text = format_report(&report, &OutputFormat::Sarif);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["version"], serde_json::json!("2.1.0"));
    let run = &value["runs"][0];
    assert_eq!(run["tool"]["driver"]["name"], serde_json::json!("ownership-lint"));
    assert_eq!(run["tool"]["driver"]["rules"].as_array().unwrap().len(), 3);

    let results = run["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["ruleId"], serde_json::json!("O100"));
    assert_eq!(
        results[0]["locations"][0]["physicalLocation"]["region"]["startLine"],
        serde_json::json!(3)
    );
    // "Missing" diagnostics have no meaningful line; the region is omitted.
    assert!(results[1]["locations"][0]["physicalLocation"]
        .get("region")
        .is_none());
}
