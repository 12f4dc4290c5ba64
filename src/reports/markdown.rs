//! Markdown report generator.

use super::escape::{code_span, escape_markdown_inline, escape_markdown_list, escape_markdown_table};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{Change, Changelog, Severity};
use std::fmt::Write;

/// Markdown changelog generator
pub struct MarkdownReporter {
    /// Emit the per-severity change sections
    include_details: bool,
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_details: true,
        }
    }

    /// Only the header, risk table and breaking-change section
    #[must_use]
    pub const fn without_details(mut self) -> Self {
        self.include_details = false;
        self
    }

    fn write_header(
        out: &mut String,
        changelog: &Changelog,
        config: &ReportConfig,
    ) -> std::fmt::Result {
        let title = config
            .title
            .clone()
            .unwrap_or_else(|| format!("{} changelog", changelog.api_name));
        writeln!(out, "# {}", escape_markdown_inline(&title))?;
        writeln!(out)?;
        writeln!(
            out,
            "**Version:** {} → {}",
            escape_markdown_inline(&changelog.from_version),
            escape_markdown_inline(&changelog.to_version)
        )?;
        if config.include_metadata {
            writeln!(out)?;
            writeln!(
                out,
                "*Generated {} by {} {}*",
                changelog.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                env!("CARGO_PKG_NAME"),
                config.metadata.tool_version
            )?;
        }
        writeln!(out)
    }

    fn write_risk_table(out: &mut String, changelog: &Changelog) -> std::fmt::Result {
        let risk = &changelog.risk;
        writeln!(out, "## Risk Assessment")?;
        writeln!(out)?;
        writeln!(out, "| Metric | Value |")?;
        writeln!(out, "|--------|-------|")?;
        writeln!(out, "| Risk level | {} |", risk.level)?;
        writeln!(out, "| Risk score | {}/100 |", risk.score)?;
        writeln!(out, "| Recommended version bump | {} |", risk.semver)?;
        writeln!(out, "| Total changes | {} |", risk.total_changes)?;
        writeln!(out, "| Breaking changes | {} |", risk.breaking_changes)?;
        for severity in Severity::all() {
            writeln!(out, "| {severity} | {} |", risk.count(severity))?;
        }
        if let Some(check) = changelog.version_check() {
            let verdict = if check.satisfied {
                "ok".to_string()
            } else {
                format!("insufficient, expected {}", check.recommended)
            };
            writeln!(out, "| Declared version bump | {} ({verdict}) |", check.declared)?;
        }
        writeln!(out)?;
        writeln!(out, "> {}", escape_markdown_list(&risk.recommendation))?;
        writeln!(out)
    }

    fn write_breaking(
        out: &mut String,
        changelog: &Changelog,
        config: &ReportConfig,
    ) -> std::fmt::Result {
        if changelog.breaking_changes.is_empty() {
            return Ok(());
        }
        writeln!(out, "## Breaking Changes")?;
        writeln!(out)?;
        writeln!(out, "| Severity | Endpoint | Change | Impact |")?;
        writeln!(out, "|----------|----------|--------|--------|")?;
        let shown = config.visible(changelog.breaking_changes.len());
        for breaking in changelog.breaking_changes.iter().take(shown) {
            let change = &breaking.change;
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                change.severity,
                code_span(&change.path.endpoint.to_string()),
                escape_markdown_table(&change.description),
                breaking.impact_score
            )?;
        }
        Self::write_truncation(out, changelog.breaking_changes.len(), shown)?;
        writeln!(out)?;

        writeln!(out, "### Migration Guide")?;
        writeln!(out)?;
        for breaking in changelog.breaking_changes.iter().take(shown) {
            writeln!(
                out,
                "- {} {}: {}",
                code_span(&breaking.change.path.to_string()),
                escape_markdown_list(&breaking.change.description),
                escape_markdown_list(&breaking.migration_suggestion)
            )?;
        }
        writeln!(out)
    }

    fn write_severity_sections(
        out: &mut String,
        changelog: &Changelog,
        config: &ReportConfig,
    ) -> std::fmt::Result {
        writeln!(out, "## Changes")?;
        writeln!(out)?;
        if changelog.changes.is_empty() {
            writeln!(out, "No changes detected.")?;
            return writeln!(out);
        }
        for severity in Severity::all() {
            let changes: Vec<&Change> = changelog.changes_with_severity(severity).collect();
            if changes.is_empty() {
                continue;
            }
            writeln!(out, "### {} ({})", severity_heading(severity), changes.len())?;
            writeln!(out)?;
            let shown = config.visible(changes.len());
            for change in changes.iter().take(shown) {
                writeln!(
                    out,
                    "- **{}** {} {}",
                    change.change_type,
                    code_span(&change.path.endpoint.to_string()),
                    escape_markdown_list(&change.description)
                )?;
            }
            Self::write_truncation(out, changes.len(), shown)?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_truncation(out: &mut String, total: usize, shown: usize) -> std::fmt::Result {
        if total > shown {
            writeln!(out)?;
            writeln!(out, "*... and {} more*", total - shown)?;
        }
        Ok(())
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

const fn severity_heading(severity: Severity) -> &'static str {
    match severity {
        Severity::Breaking => "Breaking",
        Severity::Dangerous => "Dangerous",
        Severity::Warning => "Warnings",
        Severity::Info => "Informational",
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        changelog: &Changelog,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        Self::write_header(&mut out, changelog, config)?;
        Self::write_risk_table(&mut out, changelog)?;
        Self::write_breaking(&mut out, changelog, config)?;
        if self.include_details {
            Self::write_severity_sections(&mut out, changelog, config)?;
        }
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_changelog;

    fn render(config: &ReportConfig) -> String {
        MarkdownReporter::new()
            .generate(&sample_changelog(), config)
            .expect("render")
    }

    #[test]
    fn test_title_is_escaped() {
        let md = render(&ReportConfig::default());
        assert!(md.starts_with("# Orders \\| API changelog\n"));
        assert!(md.contains("**Version:** 1.0.0 → 2.0.0"));
    }

    #[test]
    fn test_risk_table() {
        let md = render(&ReportConfig::default());
        assert!(md.contains("| Risk level | MEDIUM |"));
        assert!(md.contains("| Recommended version bump | MAJOR |"));
        assert!(md.contains("| BREAKING | 1 |"));
        assert!(md.contains("| Declared version bump | MAJOR (ok) |"));
    }

    #[test]
    fn test_breaking_section_and_migration() {
        let md = render(&ReportConfig::default());
        assert!(md.contains("## Breaking Changes"));
        assert!(md.contains("| BREAKING | `GET /legacy` | Endpoint GET /legacy was removed | 100 |"));
        assert!(md.contains("### Migration Guide"));
        assert!(md.contains("### Dangerous (1)"));
        assert!(md.contains("### Informational (1)"));
    }

    #[test]
    fn test_max_items_truncates() {
        let md = render(&ReportConfig::default().with_max_items(1));
        assert!(md.contains("*... and 1 more*"));
    }

    #[test]
    fn test_without_details() {
        let md = MarkdownReporter::new()
            .without_details()
            .generate(&sample_changelog(), &ReportConfig::default())
            .expect("render");
        assert!(!md.contains("## Changes"));
        assert!(md.contains("## Risk Assessment"));
    }
}
