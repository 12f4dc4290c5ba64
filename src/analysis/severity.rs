//! Severity classification of individual changes.

use crate::model::{Change, ChangeCategory, ChangeType, PathAttribute, PathElement, Severity};
use regex::Regex;
use std::sync::LazyLock;

/// Whole-word, case-insensitive "required".
static REQUIRED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\brequired\b").expect("static regex"));

/// Quoted identifiers (`'requiredFields'`) are names, not prose.
static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'[^']*'").expect("static regex"));

/// Assigns a [`Severity`] to a change.
///
/// Total and deterministic: every `(ChangeType, ChangeCategory)` pair has an
/// explicit arm below, so adding a variant to either enum fails to compile
/// until the table is reviewed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityClassifier;

impl SeverityClassifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Classify one change.
    #[must_use]
    pub fn classify(&self, change: &Change) -> Severity {
        use ChangeCategory as Cat;
        use ChangeType as Type;

        match (change.change_type, change.category) {
            (Type::Removed, Cat::Endpoint) => Severity::Breaking,
            (Type::Removed, Cat::Parameter | Cat::Response | Cat::RequestBody) => {
                Severity::Dangerous
            }
            (Type::Removed, Cat::Schema | Cat::Security) => Severity::Warning,

            (Type::Added, Cat::Parameter | Cat::RequestBody) => {
                if mentions_required(&change.description) {
                    Severity::Breaking
                } else {
                    Severity::Info
                }
            }
            (Type::Added, Cat::Endpoint | Cat::Response | Cat::Schema | Cat::Security) => {
                Severity::Info
            }

            (Type::Modified, Cat::Endpoint) => {
                // The endpoint identity itself changed, not one of its attributes
                if change.path.attribute.is_none() && change.path.element == PathElement::Endpoint {
                    Severity::Breaking
                } else {
                    Severity::Warning
                }
            }
            (Type::Modified, Cat::Parameter) => {
                if change.path.ends_with(PathAttribute::Type)
                    || change.path.ends_with(PathAttribute::Location)
                    || (change.path.ends_with(PathAttribute::Required) && change.flipped_to_true())
                {
                    Severity::Breaking
                } else {
                    Severity::Warning
                }
            }
            (Type::Modified, Cat::RequestBody) => {
                if change.path.ends_with(PathAttribute::Required) && change.flipped_to_true() {
                    Severity::Breaking
                } else if change.path.ends_with(PathAttribute::Schema) {
                    Severity::Dangerous
                } else {
                    Severity::Warning
                }
            }
            (Type::Modified, Cat::Response) => {
                if change.path.ends_with(PathAttribute::Schema) {
                    Severity::Dangerous
                } else {
                    Severity::Warning
                }
            }
            (Type::Modified, Cat::Schema | Cat::Security) => Severity::Warning,

            (
                Type::Deprecated,
                Cat::Endpoint
                | Cat::Parameter
                | Cat::RequestBody
                | Cat::Response
                | Cat::Schema
                | Cat::Security,
            ) => Severity::Warning,
        }
    }

    /// Classify an optional change; absence is `Info`.
    #[must_use]
    pub fn classify_opt(&self, change: Option<&Change>) -> Severity {
        change.map_or(Severity::Info, |c| self.classify(c))
    }
}

/// True if the prose of a description says "required".
fn mentions_required(description: &str) -> bool {
    let prose = QUOTED.replace_all(description, "");
    REQUIRED_WORD.is_match(&prose)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChangePath, EndpointKey};

    fn key() -> EndpointKey {
        EndpointKey::http("GET", "/api/users")
    }

    fn classify(change: &Change) -> Severity {
        SeverityClassifier::new().classify(change)
    }

    fn modified_param(attr: PathAttribute, old: &str, new: &str) -> Change {
        Change::modified(
            ChangeCategory::Parameter,
            ChangePath::parameter(&key(), "userId").with_attribute(attr),
            "changed",
        )
        .with_values(Some(old.into()), Some(new.into()))
    }

    #[test]
    fn test_removed_rows() {
        let endpoint = Change::removed(ChangeCategory::Endpoint, ChangePath::endpoint(&key()), "x");
        assert_eq!(classify(&endpoint), Severity::Breaking);

        for cat in [
            ChangeCategory::Parameter,
            ChangeCategory::Response,
            ChangeCategory::RequestBody,
        ] {
            let change = Change::removed(cat, ChangePath::request_body(&key()), "x");
            assert_eq!(classify(&change), Severity::Dangerous, "{cat}");
        }

        let schema = Change::removed(ChangeCategory::Schema, ChangePath::schema(&key(), "User"), "x");
        assert_eq!(classify(&schema), Severity::Warning);
    }

    #[test]
    fn test_added_required_is_breaking() {
        let path = ChangePath::parameter(&key(), "tenant");
        let required = Change::added(
            ChangeCategory::Parameter,
            path.clone(),
            "Added required query parameter 'tenant'",
        );
        let optional = Change::added(
            ChangeCategory::Parameter,
            path,
            "Added optional query parameter 'tenant'",
        );
        assert_eq!(classify(&required), Severity::Breaking);
        assert_eq!(classify(&optional), Severity::Info);

        let body = Change::added(
            ChangeCategory::RequestBody,
            ChangePath::request_body(&key()),
            "Added REQUIRED request body",
        );
        assert_eq!(classify(&body), Severity::Breaking);
    }

    #[test]
    fn test_required_in_parameter_name_is_not_prose() {
        let path = ChangePath::parameter(&key(), "requiredFields");
        let change = Change::added(
            ChangeCategory::Parameter,
            path.clone(),
            "Added optional query parameter 'requiredFields'",
        );
        assert_eq!(classify(&change), Severity::Info);

        let named_required = Change::added(
            ChangeCategory::Parameter,
            path,
            "Added optional query parameter 'required'",
        );
        assert_eq!(classify(&named_required), Severity::Info);
    }

    #[test]
    fn test_modified_endpoint_identity_is_breaking() {
        let change = Change::modified(ChangeCategory::Endpoint, ChangePath::endpoint(&key()), "moved");
        assert_eq!(classify(&change), Severity::Breaking);

        let dotted = EndpointKey::http("GET", "/api/v1.2/users");
        let change = Change::modified(ChangeCategory::Endpoint, ChangePath::endpoint(&dotted), "moved");
        assert_eq!(classify(&change), Severity::Breaking);

        let attr = Change::modified(
            ChangeCategory::Endpoint,
            ChangePath::endpoint(&key()).with_attribute(PathAttribute::Deprecated),
            "flag",
        );
        assert_eq!(classify(&attr), Severity::Warning);
    }

    #[test]
    fn test_modified_parameter_rows() {
        assert_eq!(
            classify(&modified_param(PathAttribute::Type, "string", "integer")),
            Severity::Breaking
        );
        assert_eq!(
            classify(&modified_param(PathAttribute::Location, "query", "header")),
            Severity::Breaking
        );
        assert_eq!(
            classify(&modified_param(PathAttribute::Required, "false", "true")),
            Severity::Breaking
        );
        // Relaxing a requirement falls through to the modification default
        assert_eq!(
            classify(&modified_param(PathAttribute::Required, "true", "false")),
            Severity::Warning
        );
    }

    #[test]
    fn test_modified_body_and_response_rows() {
        let body = |attr, old: &str, new: &str| {
            Change::modified(
                ChangeCategory::RequestBody,
                ChangePath::request_body(&key()).with_attribute(attr),
                "x",
            )
            .with_values(Some(old.into()), Some(new.into()))
        };
        assert_eq!(
            classify(&body(PathAttribute::Required, "false", "true")),
            Severity::Breaking
        );
        assert_eq!(
            classify(&body(PathAttribute::Required, "true", "false")),
            Severity::Warning
        );
        assert_eq!(classify(&body(PathAttribute::Schema, "A", "B")), Severity::Dangerous);

        let response = Change::modified(
            ChangeCategory::Response,
            ChangePath::response(&key(), "200").with_attribute(PathAttribute::Schema),
            "x",
        );
        assert_eq!(classify(&response), Severity::Dangerous);
        let other = Change::modified(ChangeCategory::Response, ChangePath::response(&key(), "200"), "x");
        assert_eq!(classify(&other), Severity::Warning);
    }

    #[test]
    fn test_deprecated_is_warning() {
        for cat in ChangeCategory::all() {
            let change = Change::deprecated(cat, ChangePath::endpoint(&key()), "old");
            assert_eq!(classify(&change), Severity::Warning);
        }
    }

    #[test]
    fn test_absent_change_is_info() {
        assert_eq!(SeverityClassifier::new().classify_opt(None), Severity::Info);
    }
}
