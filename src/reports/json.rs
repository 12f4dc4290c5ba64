//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{BreakingChange, Change, Changelog, RiskAssessment, VersionCheck};
use serde::Serialize;
use std::collections::BTreeMap;

/// JSON report generator
pub struct JsonReporter {
    /// Whether to only include summary
    summary_only: bool,
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            summary_only: false,
            pretty: true,
        }
    }

    /// Create a summary-only reporter
    #[must_use]
    pub const fn summary_only() -> Self {
        Self {
            summary_only: true,
            pretty: true,
        }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        changelog: &Changelog,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let risk = &changelog.risk;
        let report = JsonChangelogReport {
            metadata: config.include_metadata.then(|| JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: config.metadata.tool_version.clone(),
                },
                generated_at: changelog.generated_at.to_rfc3339(),
                title: config.title.clone(),
                old_spec: config.metadata.old_spec_path.clone(),
                new_spec: config.metadata.new_spec_path.clone(),
                custom: config.metadata.custom.clone(),
            }),
            api_name: &changelog.api_name,
            from_version: &changelog.from_version,
            to_version: &changelog.to_version,
            summary: JsonSummary {
                total_changes: changelog.changes.len(),
                breaking_changes: changelog.breaking_changes.len(),
                by_type: changelog.counts_by_type(),
                by_severity: risk
                    .severity_counts
                    .iter()
                    .map(|(sev, count)| (sev.as_str(), *count))
                    .collect(),
                risk_score: risk.score,
                risk_level: risk.level.as_str(),
                semver: risk.semver.as_str(),
            },
            version_check: changelog.version_check(),
            changes: (!self.summary_only).then(|| {
                changelog
                    .changes
                    .iter()
                    .take(config.visible(changelog.changes.len()))
                    .map(JsonChange::from_change)
                    .collect()
            }),
            breaking_changes: (!self.summary_only).then(|| {
                changelog
                    .breaking_changes
                    .iter()
                    .take(config.visible(changelog.breaking_changes.len()))
                    .map(JsonBreakingChange::from_breaking)
                    .collect()
            }),
            risk,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))?;

        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON report structures

#[derive(Serialize)]
struct JsonChangelogReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<JsonReportMetadata>,
    api_name: &'a str,
    from_version: &'a str,
    to_version: &'a str,
    summary: JsonSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_check: Option<VersionCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    changes: Option<Vec<JsonChange<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breaking_changes: Option<Vec<JsonBreakingChange<'a>>>,
    risk: &'a RiskAssessment,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_spec: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    custom: BTreeMap<String, String>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct JsonSummary {
    total_changes: usize,
    breaking_changes: usize,
    by_type: BTreeMap<&'static str, usize>,
    by_severity: BTreeMap<&'static str, usize>,
    risk_score: u8,
    risk_level: &'static str,
    semver: &'static str,
}

#[derive(Serialize)]
struct JsonChange<'a> {
    #[serde(flatten)]
    change: &'a Change,
    /// Historical string form of the path
    path_string: String,
    endpoint: String,
}

impl<'a> JsonChange<'a> {
    fn from_change(change: &'a Change) -> Self {
        Self {
            change,
            path_string: change.path.legacy(),
            endpoint: change.path.endpoint.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsonBreakingChange<'a> {
    #[serde(flatten)]
    change: JsonChange<'a>,
    impact_score: u8,
    migration_suggestion: &'a str,
}

impl<'a> JsonBreakingChange<'a> {
    fn from_breaking(breaking: &'a BreakingChange) -> Self {
        Self {
            change: JsonChange::from_change(&breaking.change),
            impact_score: breaking.impact_score,
            migration_suggestion: &breaking.migration_suggestion,
        }
    }
}
