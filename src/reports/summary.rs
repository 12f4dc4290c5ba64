//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{ChangeType, Changelog, RiskLevel, Severity};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "magenta" => format!("\x1b[35m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Breaking => "red",
        Severity::Dangerous => "magenta",
        Severity::Warning => "yellow",
        Severity::Info => "dim",
    }
}

const fn level_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "green",
        RiskLevel::Medium => "yellow",
        RiskLevel::High | RiskLevel::Critical => "red",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter; color is off when `NO_COLOR` is set
    #[must_use]
    pub fn new() -> Self {
        Self {
            colored: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        changelog: &Changelog,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let risk = &changelog.risk;

        // Header
        let title = config
            .title
            .clone()
            .unwrap_or_else(|| "API Compatibility Summary".to_string());
        lines.push(self.color(&title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {} {} → {}",
            self.color("API:", "cyan"),
            changelog.api_name,
            changelog.from_version,
            changelog.to_version
        ));

        lines.push(String::new());
        lines.push(self.color("Changes:", "bold"));

        let counts = changelog.counts_by_type();
        let symbols = [
            (ChangeType::Added, "+", "green"),
            (ChangeType::Removed, "-", "red"),
            (ChangeType::Modified, "~", "yellow"),
            (ChangeType::Deprecated, "!", "yellow"),
        ];
        for (change_type, symbol, color) in symbols {
            let count = counts.get(change_type.as_str()).copied().unwrap_or(0);
            if count > 0 {
                lines.push(format!(
                    "  {} {}",
                    self.color(&format!("{symbol}{count}"), color),
                    change_type.as_str().to_lowercase()
                ));
            }
        }
        if !changelog.has_changes() {
            lines.push(format!("  {}", self.color("No changes", "dim")));
        }

        if changelog.has_changes() {
            lines.push(String::new());
            lines.push(self.color("Severity:", "bold"));
            for severity in Severity::all() {
                let count = risk.count(severity);
                if count > 0 {
                    lines.push(format!(
                        "  {} {count}",
                        self.color(&format!("{:<9}", severity.as_str()), severity_color(severity))
                    ));
                }
            }
        }

        if changelog.has_breaking_changes() {
            lines.push(String::new());
            lines.push(self.color("Breaking changes:", "bold"));
            let shown = config.visible(changelog.breaking_changes.len());
            for breaking in changelog.breaking_changes.iter().take(shown) {
                let change = &breaking.change;
                lines.push(format!(
                    "  {} {} {}",
                    self.color(change.severity.as_str(), severity_color(change.severity)),
                    change.path.endpoint,
                    change.description
                ));
            }
            if changelog.breaking_changes.len() > shown {
                lines.push(format!(
                    "  {}",
                    self.color(
                        &format!("... and {} more", changelog.breaking_changes.len() - shown),
                        "dim"
                    )
                ));
            }
        }

        // Risk
        lines.push(String::new());
        lines.push(format!(
            "{}  {} ({}/100)",
            self.color("Risk:", "cyan"),
            self.color(risk.level.as_str(), level_color(risk.level)),
            risk.score
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Semver:", "cyan"),
            risk.semver
        ));
        if let Some(check) = changelog.version_check() {
            if !check.satisfied {
                lines.push(format!(
                    "{}  declared {} bump, {} recommended",
                    self.color("Warning:", "yellow"),
                    check.declared,
                    check.recommended
                ));
            }
        }
        lines.push(risk.recommendation.clone());

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
