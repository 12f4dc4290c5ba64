//! Changelog assembly: compare, extract breaking changes, assess risk.

use crate::analysis::{BreakingChangeDetector, RiskAssessor, RiskPolicy};
use crate::diff::{DiffEngine, EngineConfig};
use crate::model::{ApiSpec, Changelog};
use chrono::{DateTime, Utc};

/// Builds a [`Changelog`] from two versions of one API.
///
/// Name and versions default to those declared by the documents.
#[derive(Debug, Clone, Default)]
pub struct ChangelogBuilder {
    api_name: Option<String>,
    from_version: Option<String>,
    to_version: Option<String>,
    generated_at: Option<DateTime<Utc>>,
    engine_config: EngineConfig,
    policy: RiskPolicy,
}

impl ChangelogBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn api_name(mut self, name: impl Into<String>) -> Self {
        self.api_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn from_version(mut self, version: impl Into<String>) -> Self {
        self.from_version = Some(version.into());
        self
    }

    #[must_use]
    pub fn to_version(mut self, version: impl Into<String>) -> Self {
        self.to_version = Some(version.into());
        self
    }

    /// Pin the generation time (also used as the detection time of every change).
    #[must_use]
    pub const fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    #[must_use]
    pub fn engine_config(mut self, config: EngineConfig) -> Self {
        self.engine_config = config;
        self
    }

    #[must_use]
    pub fn risk_policy(mut self, policy: RiskPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run the comparison and assemble the changelog.
    #[must_use]
    pub fn build(self, old: &ApiSpec, new: &ApiSpec) -> Changelog {
        let generated_at = self.generated_at.unwrap_or_else(Utc::now);
        let changes = DiffEngine::new()
            .with_config(self.engine_config)
            .with_timestamp(generated_at)
            .compare(old, new);
        let breaking_changes = BreakingChangeDetector::new().detect(&changes);
        let risk = RiskAssessor::with_policy(self.policy).assess(&changes);

        tracing::debug!(
            "changelog: {} changes, {} breaking, risk {} ({})",
            changes.len(),
            breaking_changes.len(),
            risk.score,
            risk.level
        );

        let api_name = self.api_name.unwrap_or_else(|| {
            if new.name.is_empty() {
                old.name.clone()
            } else {
                new.name.clone()
            }
        });

        Changelog {
            api_name,
            from_version: self.from_version.unwrap_or_else(|| old.version.clone()),
            to_version: self.to_version.unwrap_or_else(|| new.version.clone()),
            generated_at,
            changes,
            breaking_changes,
            risk,
        }
    }
}

/// Compose comparison, breaking-change extraction and risk assessment.
#[must_use]
pub fn build_changelog(
    api_name: &str,
    from_version: &str,
    to_version: &str,
    old: &ApiSpec,
    new: &ApiSpec,
) -> Changelog {
    ChangelogBuilder::new()
        .api_name(api_name)
        .from_version(from_version)
        .to_version(to_version)
        .build(old, new)
}
