//! Change records produced by a comparison.

use super::ChangePath;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Kind of difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    Added,
    Removed,
    Modified,
    Deprecated,
}

impl ChangeType {
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Added, Self::Removed, Self::Modified, Self::Deprecated]
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "ADDED",
            Self::Removed => "REMOVED",
            Self::Modified => "MODIFIED",
            Self::Deprecated => "DEPRECATED",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part of the API surface a change touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeCategory {
    Endpoint,
    Parameter,
    RequestBody,
    Response,
    Schema,
    Security,
}

impl ChangeCategory {
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Endpoint,
            Self::Parameter,
            Self::RequestBody,
            Self::Response,
            Self::Schema,
            Self::Security,
        ]
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Endpoint => "ENDPOINT",
            Self::Parameter => "PARAMETER",
            Self::RequestBody => "REQUEST_BODY",
            Self::Response => "RESPONSE",
            Self::Schema => "SCHEMA",
            Self::Security => "SECURITY",
        }
    }

    /// Lower-case label for prose ("request body").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Endpoint => "endpoint",
            Self::Parameter => "parameter",
            Self::RequestBody => "request body",
            Self::Response => "response",
            Self::Schema => "schema",
            Self::Security => "security requirement",
        }
    }
}

impl fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compatibility severity of a single change.
///
/// Ordered by explicit rank: `Breaking < Dangerous < Warning < Info`, so the
/// most severe value sorts first and `min()` yields the worst severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Breaking,
    Dangerous,
    Warning,
    Info,
}

impl Severity {
    /// Ordinal of the severity, 0 being the most severe.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Breaking => 0,
            Self::Dangerous => 1,
            Self::Warning => 2,
            Self::Info => 3,
        }
    }

    /// All severities, most severe first.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Breaking, Self::Dangerous, Self::Warning, Self::Info]
    }

    /// True if `self` is as severe as `threshold` or worse.
    #[must_use]
    pub const fn is_at_least(&self, threshold: Self) -> bool {
        self.rank() <= threshold.rank()
    }

    /// Breaking and dangerous changes both require consumer action.
    #[must_use]
    pub const fn requires_action(&self) -> bool {
        matches!(self, Self::Breaking | Self::Dangerous)
    }

    /// Parse a severity name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breaking" => Some(Self::Breaking),
            "dangerous" => Some(Self::Dangerous),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breaking => "BREAKING",
            Self::Dangerous => "DANGEROUS",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One atomic difference between two API versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub change_type: ChangeType,
    pub category: ChangeCategory,
    /// Assigned by the severity classifier
    pub severity: Severity,
    pub path: ChangePath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    pub description: String,
    pub detected_at: DateTime<Utc>,
}

impl Change {
    /// Create an unclassified change (severity `Info` until classified).
    #[must_use]
    pub fn new(
        change_type: ChangeType,
        category: ChangeCategory,
        path: ChangePath,
        description: impl Into<String>,
    ) -> Self {
        Self {
            change_type,
            category,
            severity: Severity::Info,
            path,
            old_value: None,
            new_value: None,
            description: description.into(),
            detected_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn added(category: ChangeCategory, path: ChangePath, description: impl Into<String>) -> Self {
        Self::new(ChangeType::Added, category, path, description)
    }

    #[must_use]
    pub fn removed(
        category: ChangeCategory,
        path: ChangePath,
        description: impl Into<String>,
    ) -> Self {
        Self::new(ChangeType::Removed, category, path, description)
    }

    #[must_use]
    pub fn modified(
        category: ChangeCategory,
        path: ChangePath,
        description: impl Into<String>,
    ) -> Self {
        Self::new(ChangeType::Modified, category, path, description)
    }

    #[must_use]
    pub fn deprecated(
        category: ChangeCategory,
        path: ChangePath,
        description: impl Into<String>,
    ) -> Self {
        Self::new(ChangeType::Deprecated, category, path, description)
    }

    #[must_use]
    pub fn with_old_value(mut self, value: impl Into<String>) -> Self {
        self.old_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_new_value(mut self, value: impl Into<String>) -> Self {
        self.new_value = Some(value.into());
        self
    }

    /// Set both values of an attribute transition.
    #[must_use]
    pub fn with_values(mut self, old: Option<String>, new: Option<String>) -> Self {
        self.old_value = old;
        self.new_value = new;
        self
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn with_detected_at(mut self, at: DateTime<Utc>) -> Self {
        self.detected_at = at;
        self
    }

    /// Breaking or dangerous: consumers must act.
    #[must_use]
    pub const fn is_breaking(&self) -> bool {
        self.severity.requires_action()
    }

    /// True for a boolean attribute that went from `false` to `true`.
    #[must_use]
    pub fn flipped_to_true(&self) -> bool {
        self.old_value.as_deref() == Some("false") && self.new_value.as_deref() == Some("true")
    }
}

/// A change that requires consumer action, with impact and migration advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakingChange {
    #[serde(flatten)]
    pub change: Change,
    /// Estimated disruption, 0-100
    pub impact_score: u8,
    pub migration_suggestion: String,
}

impl BreakingChange {
    #[must_use]
    pub const fn change(&self) -> &Change {
        &self.change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EndpointKey;

    #[test]
    fn test_severity_total_order() {
        assert!(Severity::Breaking < Severity::Dangerous);
        assert!(Severity::Dangerous < Severity::Warning);
        assert!(Severity::Warning < Severity::Info);

        let mut sorted = vec![Severity::Info, Severity::Breaking, Severity::Warning];
        sorted.sort();
        assert_eq!(
            sorted,
            vec![Severity::Breaking, Severity::Warning, Severity::Info]
        );
    }

    #[test]
    fn test_severity_rank_matches_all_order() {
        for (i, sev) in Severity::all().iter().enumerate() {
            assert_eq!(usize::from(sev.rank()), i);
        }
    }

    #[test]
    fn test_is_at_least() {
        assert!(Severity::Breaking.is_at_least(Severity::Dangerous));
        assert!(Severity::Dangerous.is_at_least(Severity::Dangerous));
        assert!(!Severity::Warning.is_at_least(Severity::Dangerous));
        assert!(Severity::Info.is_at_least(Severity::Info));
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse("Breaking"), Some(Severity::Breaking));
        assert_eq!(Severity::parse("INFO"), Some(Severity::Info));
        assert_eq!(Severity::parse("critical"), None);
    }

    #[test]
    fn test_severity_serializes_upper_case() {
        let json = serde_json::to_string(&Severity::Dangerous).expect("serialize");
        assert_eq!(json, "\"DANGEROUS\"");
    }

    #[test]
    fn test_flipped_to_true() {
        let path = ChangePath::parameter(&EndpointKey::http("GET", "/x"), "id");
        let change = Change::modified(ChangeCategory::Parameter, path, "required")
            .with_values(Some("false".into()), Some("true".into()));
        assert!(change.flipped_to_true());

        let relaxed = change.with_values(Some("true".into()), Some("false".into()));
        assert!(!relaxed.flipped_to_true());
    }
}
