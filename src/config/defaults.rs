//! Default configurations and presets for api-compat.
//!
//! Provides named presets for common use cases and default values.

use super::types::{AppConfig, BehaviorConfig, FilterConfig, OutputConfig};
use crate::analysis::RiskPolicy;
use crate::diff::EngineConfig;
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Default settings suitable for most cases
    Default,
    /// Strict scoring: dangerous changes weigh like breaking ones
    Strict,
    /// CI/CD: JSON output, fail on breaking changes
    #[value(name = "ci-cd", alias = "ci")]
    CiCd,
    /// Release review: only actionable changes, fail on breaking changes
    Release,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::CiCd => "ci-cd",
            Self::Release => "release",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "strict" => Some(Self::Strict),
            "ci-cd" | "ci" | "cd" | "pipeline" => Some(Self::CiCd),
            "release" => Some(Self::Release),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Normative scoring, summary output, never fails the build",
            Self::Strict => "Stricter risk bands; dangerous changes weigh like breaking ones",
            Self::CiCd => "Machine-readable output that fails on breaking changes",
            Self::Release => "Only breaking and dangerous changes, fails on breaking changes",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::CiCd, Self::Release]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self::strict_preset(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
            ConfigPreset::Release => Self::release_preset(),
        }
    }

    /// Strict scoring preset.
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            scoring: RiskPolicy::strict(),
            ..Self::default()
        }
    }

    /// CI/CD pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Fail on breaking changes
    /// - Quiet mode to reduce noise
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                fail_on_breaking: true,
                fail_on_change: false,
                quiet: true,
            },
            ..Self::default()
        }
    }

    /// Release review preset.
    #[must_use]
    pub fn release_preset() -> Self {
        Self {
            output: OutputConfig {
                format: ReportFormat::Markdown,
                ..OutputConfig::default()
            },
            filtering: FilterConfig {
                min_severity: Some("dangerous".to_string()),
            },
            behavior: BehaviorConfig {
                fail_on_breaking: true,
                ..BehaviorConfig::default()
            },
            engine: EngineConfig::default(),
            scoring: RiskPolicy::default(),
        }
    }
}

// ============================================================================
// Default Value Constants
// ============================================================================

/// Default number of shared endpoints that triggers parallel diffing.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Default per-section item limit for rendered reports (unlimited).
pub const DEFAULT_MAX_ITEMS: Option<usize> = None;

// ============================================================================
// Tests
// ============================================================================
