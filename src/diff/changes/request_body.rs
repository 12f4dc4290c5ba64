//! Request body change computer implementation.

use super::parameters::requiredness;
use crate::diff::traits::{ChangeComputer, ChangeSet};
use crate::model::{Change, ChangeCategory, ChangePath, EndpointKey, PathAttribute, RequestBody};

/// Computes request body presence, requirement and schema-reference changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestBodyChangeComputer;

impl RequestBodyChangeComputer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn body_label(body: &RequestBody) -> String {
    match &body.schema {
        Some(schema) => format!("{schema} ({})", body.content_type),
        None => body.content_type.clone(),
    }
}

impl ChangeComputer for RequestBodyChangeComputer {
    type Input = Option<RequestBody>;

    fn compute(
        &self,
        endpoint: &EndpointKey,
        old: &Option<RequestBody>,
        new: &Option<RequestBody>,
    ) -> ChangeSet {
        let mut result = ChangeSet::new();
        let path = || ChangePath::request_body(endpoint);

        match (old, new) {
            (None, None) => {}
            (Some(old), None) => result.removed.push(
                Change::removed(ChangeCategory::RequestBody, path(), "Removed request body")
                    .with_old_value(body_label(old)),
            ),
            (None, Some(new)) => result.added.push(
                Change::added(
                    ChangeCategory::RequestBody,
                    path(),
                    format!("Added {} request body", requiredness(new.required)),
                )
                .with_new_value(body_label(new)),
            ),
            (Some(old), Some(new)) => {
                if old.required != new.required {
                    result.modified.push(
                        Change::modified(
                            ChangeCategory::RequestBody,
                            path().with_attribute(PathAttribute::Required),
                            format!(
                                "Request body changed from {} to {}",
                                requiredness(old.required),
                                requiredness(new.required)
                            ),
                        )
                        .with_values(Some(old.required.to_string()), Some(new.required.to_string())),
                    );
                }
                if old.schema != new.schema {
                    result.modified.push(
                        Change::modified(
                            ChangeCategory::RequestBody,
                            path().with_attribute(PathAttribute::Schema),
                            format!(
                                "Request body schema changed from {} to {}",
                                old.schema.as_deref().unwrap_or("none"),
                                new.schema.as_deref().unwrap_or("none")
                            ),
                        )
                        .with_values(old.schema.clone(), new.schema.clone()),
                    );
                }
            }
        }

        result
    }

    fn name(&self) -> &'static str {
        "RequestBodyChangeComputer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> EndpointKey {
        EndpointKey::http("POST", "/api/users")
    }

    #[test]
    fn test_presence_transitions() {
        let computer = RequestBodyChangeComputer::new();
        let body = Some(RequestBody::json("User").required(true));

        let added = computer.compute(&key(), &None, &body);
        assert_eq!(added.added.len(), 1);
        assert_eq!(added.added[0].description, "Added required request body");

        let removed = computer.compute(&key(), &body, &None);
        assert_eq!(removed.removed.len(), 1);
        assert!(computer.compute(&key(), &None, &None).is_empty());
    }

    #[test]
    fn test_required_then_schema() {
        let old = Some(RequestBody::json("User"));
        let new = Some(RequestBody::json("UserV2").required(true));
        let changes = RequestBodyChangeComputer::new()
            .compute(&key(), &old, &new)
            .into_ordered();
        assert_eq!(changes.len(), 2);
        assert!(changes[0].path.ends_with(PathAttribute::Required));
        assert!(changes[1].path.ends_with(PathAttribute::Schema));
        assert_eq!(changes[1].old_value.as_deref(), Some("User"));
        assert_eq!(changes[1].new_value.as_deref(), Some("UserV2"));
    }

    #[test]
    fn test_content_type_alone_is_not_a_change() {
        let old = Some(RequestBody::new("application/json").with_schema("User"));
        let new = Some(RequestBody::new("application/xml").with_schema("User"));
        assert!(RequestBodyChangeComputer::new()
            .compute(&key(), &old, &new)
            .is_empty());
    }
}
