//! Risk assessment and semantic-versioning recommendation types.

use super::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Banding of the aggregate risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suggested semantic-version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SemverBump {
    Major,
    Minor,
    Patch,
    None,
}

impl SemverBump {
    /// 0 = no bump, 3 = major.
    #[must_use]
    pub const fn weight(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Patch => 1,
            Self::Minor => 2,
            Self::Major => 3,
        }
    }

    /// Bump between two declared version strings.
    ///
    /// Accepts a leading `v` and pads partial versions (`"2"`, `"2.1"`).
    /// Returns `None` when either side is not a version, or when `to` is
    /// older than `from`.
    #[must_use]
    pub fn between(from: &str, to: &str) -> Option<Self> {
        let from = parse_lenient(from)?;
        let to = parse_lenient(to)?;
        if to < from {
            return None;
        }
        Some(if to.major != from.major {
            Self::Major
        } else if to.minor != from.minor {
            Self::Minor
        } else if to.patch != from.patch || to.pre != from.pre {
            Self::Patch
        } else {
            Self::None
        })
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "MAJOR",
            Self::Minor => "MINOR",
            Self::Patch => "PATCH",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for SemverBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse_lenient(raw: &str) -> Option<semver::Version> {
    let trimmed = raw.trim().trim_start_matches(['v', 'V']);
    if let Ok(version) = semver::Version::parse(trimmed) {
        return Some(version);
    }
    let parts = trimmed.split('.').count();
    let padded = match parts {
        1 => format!("{trimmed}.0.0"),
        2 => format!("{trimmed}.0"),
        _ => return None,
    };
    semver::Version::parse(&padded).ok()
}

/// Aggregate risk over one change list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 0-100
    pub score: u8,
    pub level: RiskLevel,
    pub semver: SemverBump,
    /// Changes per severity, most severe first
    pub severity_counts: BTreeMap<Severity, usize>,
    pub total_changes: usize,
    /// Changes with BREAKING or DANGEROUS severity
    pub breaking_changes: usize,
    pub recommendation: String,
}

impl RiskAssessment {
    /// Count for one severity (0 if absent).
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.severity_counts.get(&severity).copied().unwrap_or(0)
    }
}

/// Whether the declared version bump covers the recommended one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionCheck {
    pub declared: SemverBump,
    pub recommended: SemverBump,
    pub satisfied: bool,
}

impl VersionCheck {
    #[must_use]
    pub const fn new(declared: SemverBump, recommended: SemverBump) -> Self {
        Self {
            declared,
            recommended,
            satisfied: declared.weight() >= recommended.weight(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_between() {
        assert_eq!(SemverBump::between("1.2.3", "2.0.0"), Some(SemverBump::Major));
        assert_eq!(SemverBump::between("1.2.3", "1.3.0"), Some(SemverBump::Minor));
        assert_eq!(SemverBump::between("1.2.3", "1.2.4"), Some(SemverBump::Patch));
        assert_eq!(SemverBump::between("1.2.3", "1.2.3"), Some(SemverBump::None));
    }

    #[test]
    fn test_bump_between_lenient() {
        assert_eq!(SemverBump::between("v1", "v2"), Some(SemverBump::Major));
        assert_eq!(SemverBump::between("1.0", "1.1"), Some(SemverBump::Minor));
        assert_eq!(SemverBump::between("latest", "1.0.0"), None);
        assert_eq!(SemverBump::between("2.0.0", "1.0.0"), None);
    }

    #[test]
    fn test_version_check() {
        assert!(VersionCheck::new(SemverBump::Major, SemverBump::Minor).satisfied);
        assert!(!VersionCheck::new(SemverBump::Patch, SemverBump::Major).satisfied);
        assert!(VersionCheck::new(SemverBump::None, SemverBump::None).satisfied);
    }
}
