//! Trait definitions for diff computation strategies.
//!
//! Each area of an endpoint (parameters, request body, responses) has its own
//! computer so the rules stay small and can be tested in isolation.

use crate::model::{Change, EndpointKey};

/// Trait for computing one area of changes between two versions of an endpoint.
///
/// Computers emit unclassified changes; severity and detection time are
/// assigned by the [`DiffEngine`](super::DiffEngine).
pub trait ChangeComputer: Send + Sync {
    /// The slice of the endpoint this computer compares.
    type Input: ?Sized;

    /// Compute changes between the old and new input of `endpoint`.
    fn compute(&self, endpoint: &EndpointKey, old: &Self::Input, new: &Self::Input) -> ChangeSet;

    /// Get the name of this change computer for logging/debugging.
    fn name(&self) -> &str;
}

/// Container for changes of one area (removed, added, modified).
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    pub removed: Vec<Change>,
    pub added: Vec<Change>,
    pub modified: Vec<Change>,
}

impl ChangeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }

    /// Flatten in emission order: removed, added, modified.
    #[must_use]
    pub fn into_ordered(self) -> Vec<Change> {
        let mut out = Vec::with_capacity(self.total());
        out.extend(self.removed);
        out.extend(self.added);
        out.extend(self.modified);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChangeCategory, ChangePath};

    #[test]
    fn test_change_set_empty() {
        let set = ChangeSet::new();
        assert!(set.is_empty());
        assert_eq!(set.total(), 0);
    }

    #[test]
    fn test_into_ordered_puts_removals_first() {
        let key = EndpointKey::http("GET", "/a");
        let mut set = ChangeSet::new();
        set.modified.push(Change::modified(
            ChangeCategory::Parameter,
            ChangePath::parameter(&key, "m"),
            "m",
        ));
        set.added.push(Change::added(
            ChangeCategory::Parameter,
            ChangePath::parameter(&key, "a"),
            "a",
        ));
        set.removed.push(Change::removed(
            ChangeCategory::Parameter,
            ChangePath::parameter(&key, "r"),
            "r",
        ));
        let names: Vec<_> = set
            .into_ordered()
            .iter()
            .map(|c| c.description.clone())
            .collect();
        assert_eq!(names, vec!["r", "a", "m"]);
    }
}
