//! Endpoint-level change computer.

use crate::diff::traits::{ChangeComputer, ChangeSet};
use crate::model::{Change, ChangeCategory, ChangePath, Endpoint, EndpointKey, PathAttribute};

/// Computes changes to the endpoint record itself (deprecation).
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointChangeComputer;

impl EndpointChangeComputer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Change for an endpoint present only in the old document.
    #[must_use]
    pub fn removed(endpoint: &Endpoint) -> Change {
        Change::removed(
            ChangeCategory::Endpoint,
            ChangePath::endpoint(&endpoint.key),
            format!("Endpoint {} was removed", endpoint.key),
        )
        .with_old_value(endpoint.key.to_string())
    }

    /// Change for an endpoint present only in the new document.
    #[must_use]
    pub fn added(endpoint: &Endpoint) -> Change {
        Change::added(
            ChangeCategory::Endpoint,
            ChangePath::endpoint(&endpoint.key),
            format!("Endpoint {} was added", endpoint.key),
        )
        .with_new_value(endpoint.key.to_string())
    }
}

impl ChangeComputer for EndpointChangeComputer {
    type Input = Endpoint;

    fn compute(&self, endpoint: &EndpointKey, old: &Endpoint, new: &Endpoint) -> ChangeSet {
        let mut result = ChangeSet::new();

        // Only the false -> true transition is reported
        if !old.deprecated && new.deprecated {
            result.modified.push(
                Change::deprecated(
                    ChangeCategory::Endpoint,
                    ChangePath::endpoint(endpoint).with_attribute(PathAttribute::Deprecated),
                    format!("Endpoint {endpoint} was deprecated"),
                )
                .with_values(Some("false".to_string()), Some("true".to_string())),
            );
        }

        result
    }

    fn name(&self) -> &'static str {
        "EndpointChangeComputer"
    }
}
