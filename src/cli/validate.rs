//! Validate command handler.
//!
//! Implements the `validate` subcommand: detect a document's format, parse
//! it and print what was found.

use crate::model::ApiSpec;
use crate::parsers::{detect_format, DetectedFormat};
use crate::pipeline::{parse_spec_with_context, write_output, OutputTarget};
use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct ValidationReport<'a> {
    file: String,
    format: &'a str,
    variant: Option<&'a str>,
    format_version: Option<&'a str>,
    confidence: f32,
    warnings: &'a [String],
    name: &'a str,
    version: &'a str,
    kind: String,
    endpoints: usize,
    deprecated_endpoints: usize,
}

/// Run the validate command.
///
/// Fails if the file cannot be read, no format is recognized, or parsing fails.
#[allow(clippy::needless_pass_by_value)]
pub fn run_validate(
    path: PathBuf,
    output: ReportFormat,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let parsed = parse_spec_with_context(&path, quiet)?;
    let detected = detect_format(parsed.raw_content())
        .with_context(|| format!("No known format detected in {}", path.display()))?;
    for warning in &detected.warnings {
        tracing::warn!("{}: {}", path.display(), warning);
    }

    let report = build_report(&path, &detected, parsed.spec());
    let target = OutputTarget::from_option(output_file);
    let content = match output {
        ReportFormat::Json => serde_json::to_string_pretty(&report)?,
        _ => render_text(&report),
    };
    write_output(&content, &target, quiet)
}

fn build_report<'a>(
    path: &std::path::Path,
    detected: &'a DetectedFormat,
    spec: &'a ApiSpec,
) -> ValidationReport<'a> {
    ValidationReport {
        file: path.display().to_string(),
        format: &detected.format_name,
        variant: detected.variant.as_deref(),
        format_version: detected.version.as_deref(),
        confidence: detected.confidence,
        warnings: &detected.warnings,
        name: &spec.name,
        version: &spec.version,
        kind: spec.kind.to_string(),
        endpoints: spec.endpoint_count(),
        deprecated_endpoints: spec.endpoints.iter().filter(|e| e.deprecated).count(),
    }
}

fn render_text(report: &ValidationReport<'_>) -> String {
    let mut lines = vec![format!("{}: valid", report.file)];
    let mut format = report.format.to_string();
    if let Some(version) = report.format_version {
        format.push(' ');
        format.push_str(version);
    }
    if let Some(variant) = report.variant {
        format.push_str(&format!(" ({variant})"));
    }
    lines.push(format!("  Format:     {format}"));
    lines.push(format!("  API:        {} {}", report.name, report.version));
    lines.push(format!("  Style:      {}", report.kind));
    lines.push(format!(
        "  Endpoints:  {} ({} deprecated)",
        report.endpoints, report.deprecated_endpoints
    ));
    for warning in report.warnings {
        lines.push(format!("  Warning:    {warning}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOC: &str = r"
openapi: 3.0.3
info:
  title: Inventory
  version: 4.2.0
paths:
  /items:
    get:
      responses:
        '200':
          description: ok
    delete:
      deprecated: true
      responses:
        '204':
          description: gone
";

    #[test]
    fn test_validate_writes_json() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("inventory.yaml");
        let out = tmp.path().join("report.json");
        std::fs::write(&input, DOC).unwrap();

        run_validate(input, ReportFormat::Json, Some(out.clone()), true).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(json["format"], "OpenAPI");
        assert_eq!(json["format_version"], "3.0.3");
        assert_eq!(json["name"], "Inventory");
        assert_eq!(json["endpoints"], 2);
        assert_eq!(json["deprecated_endpoints"], 1);
    }

    #[test]
    fn test_validate_text_output() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("inventory.yaml");
        let out = tmp.path().join("report.txt");
        std::fs::write(&input, DOC).unwrap();

        run_validate(input, ReportFormat::Summary, Some(out.clone()), true).unwrap();
        let text = std::fs::read_to_string(out).unwrap();
        assert!(text.contains("Format:     OpenAPI 3.0.3 (YAML)"));
        assert!(text.contains("Endpoints:  2 (1 deprecated)"));
    }

    #[test]
    fn test_validate_rejects_unknown_content() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("notes.yaml");
        std::fs::write(&input, "todo:\n  - write docs\n").unwrap();
        assert!(run_validate(input, ReportFormat::Summary, None, true).is_err());
    }
}
