//! Response change computer implementation.

use crate::diff::traits::{ChangeComputer, ChangeSet};
use crate::model::{Change, ChangeCategory, ChangePath, EndpointKey, PathAttribute, Response};
use indexmap::IndexMap;

/// Computes response changes, matching responses by status code.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseChangeComputer;

impl ResponseChangeComputer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn index_by_status(responses: &[Response]) -> IndexMap<&str, &Response> {
    let mut index = IndexMap::with_capacity(responses.len());
    let mut collisions = 0usize;
    for response in responses {
        if index.insert(response.status.as_str(), response).is_some() {
            collisions += 1;
        }
    }
    if collisions > 0 {
        tracing::debug!("{collisions} duplicate response status code(s), last definition wins");
    }
    index
}

impl ChangeComputer for ResponseChangeComputer {
    type Input = [Response];

    fn compute(&self, endpoint: &EndpointKey, old: &[Response], new: &[Response]) -> ChangeSet {
        let mut result = ChangeSet::new();
        let old_index = index_by_status(old);
        let new_index = index_by_status(new);

        for (status, response) in &old_index {
            if !new_index.contains_key(status) {
                let mut change = Change::removed(
                    ChangeCategory::Response,
                    ChangePath::response(endpoint, *status),
                    format!("Removed response {status}"),
                );
                change.old_value = response.schema.clone();
                result.removed.push(change);
            }
        }

        for (status, response) in &new_index {
            if !old_index.contains_key(status) {
                let mut change = Change::added(
                    ChangeCategory::Response,
                    ChangePath::response(endpoint, *status),
                    format!("Added response {status}"),
                );
                change.new_value = response.schema.clone();
                result.added.push(change);
            }
        }

        for (status, old_response) in &old_index {
            if let Some(new_response) = new_index.get(status) {
                if old_response.schema != new_response.schema {
                    result.modified.push(
                        Change::modified(
                            ChangeCategory::Response,
                            ChangePath::response(endpoint, *status)
                                .with_attribute(PathAttribute::Schema),
                            format!(
                                "Response {status} schema changed from {} to {}",
                                old_response.schema.as_deref().unwrap_or("none"),
                                new_response.schema.as_deref().unwrap_or("none")
                            ),
                        )
                        .with_values(old_response.schema.clone(), new_response.schema.clone()),
                    );
                }
            }
        }

        result
    }

    fn name(&self) -> &'static str {
        "ResponseChangeComputer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChangeType;

    fn key() -> EndpointKey {
        EndpointKey::http("GET", "/api/users/{id}")
    }

    #[test]
    fn test_matched_by_status() {
        let old = vec![Response::json("200", "User"), Response::new("404")];
        let new = vec![Response::json("200", "UserV2"), Response::new("410")];
        let changes = ResponseChangeComputer::new()
            .compute(&key(), &old, &new)
            .into_ordered();
        let kinds: Vec<_> = changes.iter().map(|c| c.change_type).collect();
        assert_eq!(
            kinds,
            vec![ChangeType::Removed, ChangeType::Added, ChangeType::Modified]
        );
        assert_eq!(changes[2].path.legacy(), "response:200.schema");
    }

    #[test]
    fn test_description_change_ignored() {
        let old = vec![Response::json("200", "User").with_description("ok")];
        let new = vec![Response::json("200", "User").with_description("fine")];
        assert!(ResponseChangeComputer::new()
            .compute(&key(), &old, &new)
            .is_empty());
    }
}
