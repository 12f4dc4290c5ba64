//! Migration advice templates for breaking changes.

use crate::model::{Change, ChangeCategory, ChangeType, PathAttribute};

/// Pick the migration suggestion for one change.
///
/// Selected by change type, category and changed attribute; each pair of
/// the closed enumerations has an explicit arm.
#[must_use]
pub fn suggest(change: &Change) -> String {
    use ChangeCategory as Cat;
    use ChangeType as Type;

    let endpoint = &change.path.endpoint;
    let name = change.path.element_name().unwrap_or("the element");

    match (change.change_type, change.category) {
        (Type::Removed, Cat::Endpoint) => format!(
            "Stop using the removed endpoint {endpoint} and migrate callers to its replacement before upgrading."
        ),
        (Type::Removed, Cat::Parameter) => format!(
            "Stop sending parameter '{name}' to {endpoint}; the server no longer accepts it."
        ),
        (Type::Removed, Cat::RequestBody) => format!(
            "Stop sending a request body to {endpoint}; it is no longer accepted."
        ),
        (Type::Removed, Cat::Response) => format!(
            "Remove client handling that relies on status {name} from {endpoint}."
        ),
        (Type::Removed, Cat::Schema) => {
            format!("Replace references to schema '{name}'; it has been removed.")
        }
        (Type::Removed, Cat::Security) => format!(
            "Update authentication for {endpoint}; security requirement '{name}' was removed."
        ),

        (Type::Added, Cat::Parameter) => format!(
            "Add the new required parameter '{name}' to every call to {endpoint}."
        ),
        (Type::Added, Cat::RequestBody) => format!(
            "Add the new required request body{} to every call to {endpoint}.",
            change
                .new_value
                .as_deref()
                .map(|v| format!(" ({v})"))
                .unwrap_or_default()
        ),
        (Type::Added, Cat::Endpoint | Cat::Response | Cat::Schema | Cat::Security) => {
            generic(change)
        }

        (Type::Modified, Cat::Parameter | Cat::RequestBody | Cat::Response) => {
            attribute_transition(change, name).unwrap_or_else(|| generic(change))
        }
        (Type::Modified, Cat::Endpoint) => format!(
            "Update callers of {endpoint}: {}.",
            change.description
        ),
        (Type::Modified, Cat::Schema | Cat::Security) => generic(change),

        (
            Type::Deprecated,
            Cat::Endpoint | Cat::Parameter | Cat::RequestBody | Cat::Response | Cat::Schema | Cat::Security,
        ) => format!(
            "Plan a migration away from the deprecated {} at {endpoint}.",
            change.category.label()
        ),
    }
}

/// Describe a `.type` / `.required` / `.schema` transition with its values.
fn attribute_transition(change: &Change, name: &str) -> Option<String> {
    let attribute = change.path.attribute?;
    let old = change.old_value.as_deref().unwrap_or("none");
    let new = change.new_value.as_deref().unwrap_or("none");
    let endpoint = &change.path.endpoint;
    let subject = match change.category {
        ChangeCategory::Parameter => format!("parameter '{name}'"),
        ChangeCategory::RequestBody => "the request body".to_string(),
        ChangeCategory::Response => format!("response {name}"),
        ChangeCategory::Endpoint | ChangeCategory::Schema | ChangeCategory::Security => {
            change.category.label().to_string()
        }
    };

    match attribute {
        PathAttribute::Type => Some(format!(
            "Change the type of {subject} from {old} to {new} in calls to {endpoint}."
        )),
        PathAttribute::Required if change.flipped_to_true() => Some(format!(
            "Always send {subject} to {endpoint}; it changed from optional to required."
        )),
        PathAttribute::Required => Some(format!(
            "Review {subject} on {endpoint}; required changed from {old} to {new}."
        )),
        PathAttribute::Schema => Some(format!(
            "Update client models for {subject} of {endpoint} from schema {old} to {new}."
        )),
        PathAttribute::Location => Some(format!(
            "Send {subject} as a {new} parameter instead of {old} in calls to {endpoint}."
        )),
        PathAttribute::Deprecated => None,
    }
}

fn generic(change: &Change) -> String {
    format!(
        "Review the {} change at {} and update clients accordingly.",
        change.category.label(),
        change.path
    )
}
