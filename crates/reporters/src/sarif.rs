//! Conversion of findings to SARIF 2.1.0 specification.

use engine::Finding;
use rules::Severity;
use serde_sarif::sarif;

fn level_for(severity: Severity) -> sarif::ResultLevel {
    match severity {
        Severity::Critical | Severity::High => sarif::ResultLevel::Error,
        Severity::Medium => sarif::ResultLevel::Warning,
        Severity::Low => sarif::ResultLevel::Note,
    }
}

fn result_for(f: &Finding) -> sarif::Result {
    let region = sarif::Region::builder()
        .start_line(f.line as i64)
        .start_column(f.column as i64)
        .build();
    let artifact = sarif::ArtifactLocation::builder()
        .uri(f.file.display().to_string())
        .build();
    let location = sarif::Location::builder()
        .physical_location(
            sarif::PhysicalLocation::builder()
                .artifact_location(artifact)
                .region(region)
                .build(),
        )
        .build();
    sarif::Result::builder()
        .rule_id(f.rule.clone())
        .message(sarif::Message::builder().text(f.description.clone()).build())
        .level(level_for(f.severity))
        .locations(vec![location])
        .build()
}

pub fn to_sarif(findings: &[Finding]) -> sarif::Sarif {
    let results: Vec<sarif::Result> = findings.iter().map(result_for).collect();
    let driver = sarif::ToolComponent::builder().name("sinkscan").build();
    sarif::Sarif::builder()
        .version(serde_json::json!("2.1.0"))
        .schema(sarif::SCHEMA_URL.to_string())
        .runs(vec![sarif::Run::builder()
            .tool(sarif::Tool::builder().driver(driver).build())
            .results(results)
            .build()])
        .build()
}
