//! Parameter change computer implementation.

use crate::diff::traits::{ChangeComputer, ChangeSet};
use crate::model::{Change, ChangeCategory, ChangePath, EndpointKey, Parameter, PathAttribute};
use indexmap::IndexMap;

/// Computes parameter changes, matching parameters by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterChangeComputer;

impl ParameterChangeComputer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Attribute-level changes between two parameters with the same name.
    fn compute_attribute_changes(endpoint: &EndpointKey, old: &Parameter, new: &Parameter) -> Vec<Change> {
        let mut changes = Vec::new();
        let path = || ChangePath::parameter(endpoint, &old.name);

        if old.data_type != new.data_type {
            changes.push(
                Change::modified(
                    ChangeCategory::Parameter,
                    path().with_attribute(PathAttribute::Type),
                    format!(
                        "Parameter '{}' type changed from {} to {}",
                        old.name, old.data_type, new.data_type
                    ),
                )
                .with_values(
                    Some(old.data_type.to_string()),
                    Some(new.data_type.to_string()),
                ),
            );
        }

        if old.required != new.required {
            changes.push(
                Change::modified(
                    ChangeCategory::Parameter,
                    path().with_attribute(PathAttribute::Required),
                    format!(
                        "Parameter '{}' changed from {} to {}",
                        old.name,
                        requiredness(old.required),
                        requiredness(new.required)
                    ),
                )
                .with_values(Some(old.required.to_string()), Some(new.required.to_string())),
            );
        }

        if old.location != new.location {
            changes.push(
                Change::modified(
                    ChangeCategory::Parameter,
                    path().with_attribute(PathAttribute::Location),
                    format!(
                        "Parameter '{}' moved from {} to {}",
                        old.name, old.location, new.location
                    ),
                )
                .with_values(
                    Some(old.location.to_string()),
                    Some(new.location.to_string()),
                ),
            );
        }

        changes
    }
}

pub(crate) const fn requiredness(required: bool) -> &'static str {
    if required {
        "required"
    } else {
        "optional"
    }
}

/// Index parameters by name; later duplicates replace earlier ones in place.
fn index_by_name(params: &[Parameter]) -> IndexMap<&str, &Parameter> {
    let mut index = IndexMap::with_capacity(params.len());
    let mut collisions = 0usize;
    for param in params {
        if index.insert(param.name.as_str(), param).is_some() {
            collisions += 1;
        }
    }
    if collisions > 0 {
        tracing::debug!("{collisions} duplicate parameter name(s), last definition wins");
    }
    index
}

impl ChangeComputer for ParameterChangeComputer {
    type Input = [Parameter];

    fn compute(&self, endpoint: &EndpointKey, old: &[Parameter], new: &[Parameter]) -> ChangeSet {
        let mut result = ChangeSet::new();
        let old_index = index_by_name(old);
        let new_index = index_by_name(new);

        for (name, param) in &old_index {
            if !new_index.contains_key(name) {
                result.removed.push(
                    Change::removed(
                        ChangeCategory::Parameter,
                        ChangePath::parameter(endpoint, *name),
                        format!("Removed {} parameter '{}'", param.location, name),
                    )
                    .with_old_value(param.describe()),
                );
            }
        }

        for (name, param) in &new_index {
            if !old_index.contains_key(name) {
                result.added.push(
                    Change::added(
                        ChangeCategory::Parameter,
                        ChangePath::parameter(endpoint, *name),
                        format!(
                            "Added {} {} parameter '{}'",
                            requiredness(param.required),
                            param.location,
                            name
                        ),
                    )
                    .with_new_value(param.describe()),
                );
            }
        }

        for (name, old_param) in &old_index {
            if let Some(new_param) = new_index.get(name) {
                result
                    .modified
                    .extend(Self::compute_attribute_changes(endpoint, old_param, new_param));
            }
        }

        result
    }

    fn name(&self) -> &'static str {
        "ParameterChangeComputer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChangeType, DataType};

    fn key() -> EndpointKey {
        EndpointKey::http("GET", "/api/users")
    }

    #[test]
    fn test_empty_parameter_lists() {
        let result = ParameterChangeComputer::new().compute(&key(), &[], &[]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_added_required_parameter_description() {
        let new = vec![Parameter::query("tenant", DataType::String).required(true)];
        let result = ParameterChangeComputer::new().compute(&key(), &[], &new);
        assert_eq!(result.added.len(), 1);
        assert_eq!(
            result.added[0].description,
            "Added required query parameter 'tenant'"
        );
    }

    #[test]
    fn test_attribute_changes_in_order() {
        let old = vec![Parameter::query("id", DataType::String)];
        let new = vec![Parameter::header("id", DataType::Integer).required(true)];
        let changes = ParameterChangeComputer::new()
            .compute(&key(), &old, &new)
            .into_ordered();
        let attrs: Vec<_> = changes.iter().map(|c| c.path.attribute).collect();
        assert_eq!(
            attrs,
            vec![
                Some(PathAttribute::Type),
                Some(PathAttribute::Required),
                Some(PathAttribute::Location)
            ]
        );
        assert!(changes.iter().all(|c| c.change_type == ChangeType::Modified));
        assert_eq!(changes[1].old_value.as_deref(), Some("false"));
        assert_eq!(changes[1].new_value.as_deref(), Some("true"));
    }

    #[test]
    fn test_duplicate_names_last_wins() {
        let old = vec![
            Parameter::query("id", DataType::String),
            Parameter::query("id", DataType::Integer),
        ];
        let new = vec![Parameter::query("id", DataType::Integer)];
        let result = ParameterChangeComputer::new().compute(&key(), &old, &new);
        assert!(result.is_empty());
    }
}
