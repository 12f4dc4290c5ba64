//! Configuration types for api-compat operations.
//!
//! Provides structured configuration for the diff operation and the file
//! format loaded from `.api-compat.yaml`.

use crate::analysis::RiskPolicy;
use crate::diff::EngineConfig;
use crate::model::Severity;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Filtering options
    pub filtering: FilterConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Comparison engine tuning
    pub engine: EngineConfig,
    /// Risk scoring weights and level bands
    pub scoring: RiskPolicy,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parsed minimum severity, if one is configured and valid.
    #[must_use]
    pub fn min_severity(&self) -> Option<Severity> {
        self.filtering.min_severity.as_deref().and_then(Severity::parse)
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the minimum reported severity.
    pub fn min_severity(mut self, severity: Option<String>) -> Self {
        self.config.filtering.min_severity = severity;
        self
    }

    /// Enable fail-on-breaking mode.
    pub const fn fail_on_breaking(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_breaking = fail;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Set the engine configuration.
    pub const fn engine(mut self, engine: EngineConfig) -> Self {
        self.config.engine = engine;
        self
    }

    /// Set the risk scoring policy.
    pub fn scoring(mut self, policy: RiskPolicy) -> Self {
        self.config.scoring = policy;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Operation Configuration
// ============================================================================

/// Configuration for one diff run.
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Paths to compare
    pub paths: DiffPaths,
    /// Override for the API name in the changelog
    pub api_name: Option<String>,
    /// Output configuration
    pub output: OutputConfig,
    /// Filtering options
    pub filtering: FilterConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Engine tuning
    pub engine: EngineConfig,
    /// Risk scoring policy
    pub scoring: RiskPolicy,
}

impl DiffConfig {
    /// Parsed minimum severity, if one is configured and valid.
    #[must_use]
    pub fn min_severity(&self) -> Option<Severity> {
        self.filtering.min_severity.as_deref().and_then(Severity::parse)
    }
}

/// Paths for diff operation
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Path to the old (baseline) API document
    pub old: PathBuf,
    /// Path to the new API document
    pub new: PathBuf,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Maximum items per report section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

/// Filtering options for changelog output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FilterConfig {
    /// Minimum severity to report: breaking, dangerous, warning, info
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_severity: Option<String>,
}

/// Behavior flags for diff operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 2 if breaking or dangerous changes are found
    pub fail_on_breaking: bool,
    /// Exit with code 1 if any changes are found
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Builder for DiffConfig
// ============================================================================

/// Builder for `DiffConfig`
#[derive(Debug, Default)]
pub struct DiffConfigBuilder {
    old: Option<PathBuf>,
    new: Option<PathBuf>,
    api_name: Option<String>,
    output: OutputConfig,
    filtering: FilterConfig,
    behavior: BehaviorConfig,
    engine: EngineConfig,
    scoring: RiskPolicy,
}

impl DiffConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the settings of an application config.
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            output: config.output.clone(),
            filtering: config.filtering.clone(),
            behavior: config.behavior.clone(),
            engine: config.engine.clone(),
            scoring: config.scoring.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn old_path(mut self, path: PathBuf) -> Self {
        self.old = Some(path);
        self
    }

    #[must_use]
    pub fn new_path(mut self, path: PathBuf) -> Self {
        self.new = Some(path);
        self
    }

    #[must_use]
    pub fn api_name(mut self, name: Option<String>) -> Self {
        self.api_name = name;
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.output.file = file;
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.output.no_color = no_color;
        self
    }

    #[must_use]
    pub fn min_severity(mut self, severity: Option<String>) -> Self {
        self.filtering.min_severity = severity;
        self
    }

    #[must_use]
    pub const fn fail_on_breaking(mut self, fail: bool) -> Self {
        self.behavior.fail_on_breaking = fail;
        self
    }

    #[must_use]
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.behavior.fail_on_change = fail;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    #[must_use]
    pub const fn engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    #[must_use]
    pub fn scoring(mut self, policy: RiskPolicy) -> Self {
        self.scoring = policy;
        self
    }

    pub fn build(self) -> anyhow::Result<DiffConfig> {
        let old = self.old.ok_or_else(|| anyhow::anyhow!("old path is required"))?;
        let new = self.new.ok_or_else(|| anyhow::anyhow!("new path is required"))?;

        Ok(DiffConfig {
            paths: DiffPaths { old, new },
            api_name: self.api_name,
            output: self.output,
            filtering: self.filtering,
            behavior: self.behavior,
            engine: self.engine,
            scoring: self.scoring,
        })
    }
}
