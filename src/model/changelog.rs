//! The assembled result of one comparison.

use super::{BreakingChange, Change, ChangeType, RiskAssessment, SemverBump, Severity, VersionCheck};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Changelog between two versions of one API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Changelog {
    pub api_name: String,
    pub from_version: String,
    pub to_version: String,
    pub generated_at: DateTime<Utc>,
    /// All changes, in comparator order
    pub changes: Vec<Change>,
    /// Subset requiring consumer action, in the same relative order
    pub breaking_changes: Vec<BreakingChange>,
    pub risk: RiskAssessment,
}

impl Changelog {
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    #[must_use]
    pub fn has_breaking_changes(&self) -> bool {
        !self.breaking_changes.is_empty()
    }

    /// Copy keeping only entries at least as severe as `min_severity`.
    ///
    /// The risk assessment is carried over unchanged: it always describes the
    /// full change list.
    #[must_use]
    pub fn filtered(&self, min_severity: Severity) -> Self {
        Self {
            changes: self
                .changes
                .iter()
                .filter(|c| c.severity.is_at_least(min_severity))
                .cloned()
                .collect(),
            breaking_changes: self
                .breaking_changes
                .iter()
                .filter(|b| b.change.severity.is_at_least(min_severity))
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Number of changes per change type.
    #[must_use]
    pub fn counts_by_type(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for change in &self.changes {
            *counts.entry(change.change_type.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Changes with exactly this severity.
    pub fn changes_with_severity(&self, severity: Severity) -> impl Iterator<Item = &Change> {
        self.changes.iter().filter(move |c| c.severity == severity)
    }

    /// Compare the declared version bump against the recommended one.
    ///
    /// `None` when either version string is not a semantic version.
    #[must_use]
    pub fn version_check(&self) -> Option<VersionCheck> {
        let declared = SemverBump::between(&self.from_version, &self.to_version)?;
        Some(VersionCheck::new(declared, self.risk.semver))
    }

    /// Endpoints removed in this changelog.
    #[must_use]
    pub fn removed_endpoint_count(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| {
                c.change_type == ChangeType::Removed
                    && c.category == super::ChangeCategory::Endpoint
            })
            .count()
    }
}
