use crate::diagnostic::{CheckReport, Diagnostic};
use crate::tag::Tag;
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation, Region,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::path::Path;

fn rule_description(tag: Tag) -> String {
    format!(
        "The :{name}: declaration must be present and match a configured pattern",
        name = tag.name()
    )
}

fn rule_index(tag: Tag) -> i64 {
    match tag {
        Tag::Author => 0,
        Tag::Copyright => 1,
        Tag::License => 2,
    }
}

pub fn format(report: &CheckReport) -> String {
    let rules: Vec<ReportingDescriptor> = Tag::ALL
        .iter()
        .map(|&tag| {
            let mut rule = ReportingDescriptor::builder().id(tag.code()).build();
            rule.short_description = Some(
                MultiformatMessageString::builder()
                    .text(rule_description(tag))
                    .build(),
            );
            rule
        })
        .collect();

    let results: Vec<SarifResult> = report
        .files
        .iter()
        .flat_map(|file| file.diagnostics.iter().map(|d| (file.path.as_path(), d)))
        .map(|(path, diag)| to_result(path, diag))
        .collect();

    let driver = ToolComponent::builder()
        .name("ownership-lint")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}

fn to_result(path: &Path, diag: &Diagnostic) -> SarifResult {
    let mut result = SarifResult::builder()
        .message(Message::builder().text(diag.message.clone()).build())
        .build();

    result.rule_id = Some(diag.tag.code());
    result.rule_index = Some(rule_index(diag.tag));
    result.level = Some(ResultLevel::Error);

    let uri = path.to_string_lossy().replace('\\', "/");

    let mut location = Location::builder().build();
    let mut physical = PhysicalLocation::builder().build();

    physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());

    // "Missing" diagnostics have no location; SARIF regions are 1-based so
    // line 0 must be omitted rather than emitted.
    if diag.line > 0 {
        physical.region = Some(Region::builder().start_line(diag.line as i64).build());
    }

    location.physical_location = Some(physical);
    result.locations = Some(vec![location]);

    result
}
