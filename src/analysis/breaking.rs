//! Breaking-change extraction with impact scoring.

use super::migration;
use crate::model::{BreakingChange, Change, ChangeCategory, ChangeType, Severity};

/// Selects changes that require consumer action and scores their impact.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakingChangeDetector;

impl BreakingChangeDetector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Breaking and dangerous changes, in their original relative order.
    #[must_use]
    pub fn detect(&self, changes: &[Change]) -> Vec<BreakingChange> {
        changes
            .iter()
            .filter(|c| c.is_breaking())
            .map(|c| BreakingChange {
                change: c.clone(),
                impact_score: impact_score(c),
                migration_suggestion: migration::suggest(c),
            })
            .collect()
    }
}

/// Base disruption of a change before the category weighting.
const fn base_score(change: &Change) -> u32 {
    match (change.change_type, change.category, change.severity) {
        (ChangeType::Removed, ChangeCategory::Endpoint, _) => 100,
        (ChangeType::Removed, _, _) => 80,
        (ChangeType::Added, _, Severity::Breaking) => 70,
        (ChangeType::Modified, _, Severity::Breaking) => 85,
        (ChangeType::Modified, _, Severity::Dangerous) => 60,
        _ => 50,
    }
}

/// Category weighting, in percent.
const fn category_multiplier(category: ChangeCategory) -> u32 {
    match category {
        ChangeCategory::Endpoint => 100,
        ChangeCategory::RequestBody => 90,
        ChangeCategory::Parameter => 80,
        ChangeCategory::Security => 95,
        ChangeCategory::Schema => 75,
        ChangeCategory::Response => 70,
    }
}

/// Impact score in `0..=100`.
#[must_use]
pub fn impact_score(change: &Change) -> u8 {
    let score = base_score(change) * category_multiplier(change.category) / 100;
    u8::try_from(score.min(100)).unwrap_or(100)
}
