//! Comparison stage.
//!
//! Builds the changelog for two parsed documents and derives the CI exit code.

use super::exit_codes;
use crate::changelog::ChangelogBuilder;
use crate::config::{BehaviorConfig, DiffConfig};
use crate::model::{ApiSpec, Changelog};

/// Compare two documents and assemble the changelog.
///
/// Returns the full changelog; severity filtering is a presentation concern
/// applied by the report stage.
#[must_use]
pub fn compute_changelog(config: &DiffConfig, old: &ApiSpec, new: &ApiSpec) -> Changelog {
    let quiet = config.behavior.quiet;
    if !quiet {
        tracing::info!(
            "Comparing {} endpoints against {} endpoints...",
            old.endpoint_count(),
            new.endpoint_count()
        );
    }

    let mut builder = ChangelogBuilder::new()
        .engine_config(config.engine.clone())
        .risk_policy(config.scoring.clone());
    if let Some(name) = &config.api_name {
        builder = builder.api_name(name.clone());
    }
    let changelog = builder.build(old, new);

    if !quiet {
        tracing::info!(
            "Comparison complete: {} changes ({} breaking), risk {} ({}/100), semver {}",
            changelog.changes.len(),
            changelog.breaking_changes.len(),
            changelog.risk.level,
            changelog.risk.score,
            changelog.risk.semver
        );
        if let Some(check) = changelog.version_check() {
            if !check.satisfied {
                tracing::warn!(
                    "Declared version bump {} is smaller than the recommended {}",
                    check.declared,
                    check.recommended
                );
            }
        }
    }

    changelog
}

/// Exit code for a completed comparison.
///
/// Breaking-change failure takes precedence over change failure. Always
/// evaluated on the unfiltered changelog.
#[must_use]
pub fn exit_code_for(behavior: &BehaviorConfig, changelog: &Changelog) -> i32 {
    if behavior.fail_on_breaking && changelog.has_breaking_changes() {
        exit_codes::BREAKING_CHANGES
    } else if behavior.fail_on_change && changelog.has_changes() {
        exit_codes::CHANGES_DETECTED
    } else {
        exit_codes::SUCCESS
    }
}
