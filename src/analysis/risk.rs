//! Aggregate risk scoring and semantic-version recommendation.

use crate::model::{Change, RiskAssessment, RiskLevel, SemverBump, Severity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scoring policy: per-severity weights and level band upper bounds.
///
/// Scores are capped at 100. A score `s` is `Low` when `s <= low_max`,
/// `Medium` when `s <= medium_max`, `High` when `s <= high_max`, else
/// `Critical`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RiskPolicy {
    /// Weight of a BREAKING change
    pub breaking_weight: u32,
    /// Weight of a DANGEROUS change
    pub dangerous_weight: u32,
    /// Weight of a WARNING change
    pub warning_weight: u32,
    /// Weight of an INFO change
    pub info_weight: u32,
    /// Highest score still rated LOW
    pub low_max: u8,
    /// Highest score still rated MEDIUM
    pub medium_max: u8,
    /// Highest score still rated HIGH
    pub high_max: u8,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            breaking_weight: 30,
            dangerous_weight: 15,
            warning_weight: 5,
            info_weight: 1,
            low_max: 25,
            medium_max: 50,
            high_max: 75,
        }
    }
}

impl RiskPolicy {
    /// Stricter policy: dangerous changes weigh as much as breaking ones.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            dangerous_weight: 30,
            warning_weight: 10,
            low_max: 10,
            medium_max: 30,
            high_max: 60,
            ..Self::default()
        }
    }

    /// Weight contributed by one change of this severity.
    #[must_use]
    pub const fn weight(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Breaking => self.breaking_weight,
            Severity::Dangerous => self.dangerous_weight,
            Severity::Warning => self.warning_weight,
            Severity::Info => self.info_weight,
        }
    }

    /// Band a capped score.
    #[must_use]
    pub const fn level(&self, score: u8) -> RiskLevel {
        if score <= self.low_max {
            RiskLevel::Low
        } else if score <= self.medium_max {
            RiskLevel::Medium
        } else if score <= self.high_max {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }
}

/// Rolls per-change severities into one [`RiskAssessment`].
#[derive(Debug, Clone, Default)]
pub struct RiskAssessor {
    policy: RiskPolicy,
}

impl RiskAssessor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_policy(policy: RiskPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> &RiskPolicy {
        &self.policy
    }

    /// Assess a change list. Total: an empty list scores 0, `Low`, `None`.
    #[must_use]
    pub fn assess(&self, changes: &[Change]) -> RiskAssessment {
        let mut severity_counts: BTreeMap<Severity, usize> = BTreeMap::new();
        let mut raw: u32 = 0;
        for change in changes {
            *severity_counts.entry(change.severity).or_insert(0) += 1;
            raw = raw.saturating_add(self.policy.weight(change.severity));
        }

        let score = u8::try_from(raw.min(100)).unwrap_or(100);
        let level = self.policy.level(score);
        let semver = recommend_semver(changes);
        let breaking_changes = changes.iter().filter(|c| c.is_breaking()).count();

        RiskAssessment {
            score,
            level,
            semver,
            severity_counts,
            total_changes: changes.len(),
            breaking_changes,
            recommendation: recommendation(level, changes.is_empty()).to_string(),
        }
    }
}

/// MAJOR on any BREAKING change, MINOR on any change at all, else NONE.
#[must_use]
pub fn recommend_semver(changes: &[Change]) -> SemverBump {
    if changes.iter().any(|c| c.severity == Severity::Breaking) {
        SemverBump::Major
    } else if changes.is_empty() {
        SemverBump::None
    } else {
        SemverBump::Minor
    }
}

const fn recommendation(level: RiskLevel, empty: bool) -> &'static str {
    if empty {
        return "No API changes detected; no release coordination is needed.";
    }
    match level {
        RiskLevel::Low => "Low risk: changes are informational and safe to release.",
        RiskLevel::Medium => {
            "Moderate risk: review the listed changes and notify consumers before release."
        }
        RiskLevel::High => {
            "High risk: breaking changes present; publish migration guidance and a major version."
        }
        RiskLevel::Critical => {
            "Critical risk: hold the release and coordinate a migration window with all consumers."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChangeCategory, ChangePath, EndpointKey};

    fn change(severity: Severity) -> Change {
        Change::removed(
            ChangeCategory::Endpoint,
            ChangePath::endpoint(&EndpointKey::http("GET", "/x")),
            "x",
        )
        .with_severity(severity)
    }

    #[test]
    fn test_empty_assessment() {
        let risk = RiskAssessor::new().assess(&[]);
        assert_eq!(risk.score, 0);
        assert_eq!(risk.level, RiskLevel::Low);
        assert_eq!(risk.semver, SemverBump::None);
        assert!(risk.severity_counts.is_empty());
        assert!(!risk.recommendation.is_empty());
    }

    #[test]
    fn test_two_breaking_is_high() {
        let risk = RiskAssessor::new().assess(&[change(Severity::Breaking), change(Severity::Breaking)]);
        assert_eq!(risk.score, 60);
        assert_eq!(risk.level, RiskLevel::High);
        assert_eq!(risk.semver, SemverBump::Major);
    }

    #[test]
    fn test_saturates_at_100() {
        let changes = vec![change(Severity::Breaking); 4];
        let risk = RiskAssessor::new().assess(&changes);
        assert_eq!(risk.score, 100);
        assert_eq!(risk.level, RiskLevel::Critical);
    }

    #[test]
    fn test_band_boundaries() {
        let policy = RiskPolicy::default();
        assert_eq!(policy.level(25), RiskLevel::Low);
        assert_eq!(policy.level(26), RiskLevel::Medium);
        assert_eq!(policy.level(50), RiskLevel::Medium);
        assert_eq!(policy.level(51), RiskLevel::High);
        assert_eq!(policy.level(75), RiskLevel::High);
        assert_eq!(policy.level(76), RiskLevel::Critical);
    }

    #[test]
    fn test_dangerous_only_is_minor() {
        let risk = RiskAssessor::new().assess(&[change(Severity::Dangerous)]);
        assert_eq!(risk.semver, SemverBump::Minor);
        assert_eq!(risk.breaking_changes, 1);
        assert_eq!(risk.count(Severity::Dangerous), 1);
        assert_eq!(risk.count(Severity::Breaking), 0);
    }

    #[test]
    fn test_strict_policy() {
        let risk = RiskAssessor::with_policy(RiskPolicy::strict()).assess(&[change(Severity::Dangerous)]);
        assert_eq!(risk.score, 30);
        assert_eq!(risk.level, RiskLevel::Medium);
    }
}
