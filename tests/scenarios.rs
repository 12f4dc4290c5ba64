//! End-to-end behavior of the core operations.
//!
//! Each module mirrors one documented scenario: build two documents in code,
//! compare them, and check classification, extraction and risk together.

use api_compat::model::{
    ApiKind, ApiSpec, ChangeCategory, ChangeType, DataType, Endpoint, Parameter, PathAttribute,
    RequestBody, Response,
};
use api_compat::{
    assess_risk, build_changelog, classify, compare, detect_breaking, RiskLevel, SemverBump,
    Severity,
};

fn spec(version: &str, endpoints: Vec<Endpoint>) -> ApiSpec {
    endpoints
        .into_iter()
        .fold(ApiSpec::new("users", version, ApiKind::Rest), ApiSpec::with_endpoint)
}

// ============================================================================
// Removal and addition
// ============================================================================

mod endpoint_lifecycle {
    use super::*;

    #[test]
    fn removed_endpoint_is_breaking_with_full_impact() {
        let old = spec("1.0.0", vec![Endpoint::http("GET", "/api/users")]);
        let new = spec("1.0.1", vec![]);

        let changes = compare(&old, &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Removed);
        assert_eq!(changes[0].category, ChangeCategory::Endpoint);
        assert_eq!(changes[0].severity, Severity::Breaking);
        assert_eq!(changes[0].path.legacy(), "/api/users");

        let breaking = detect_breaking(&changes);
        assert_eq!(breaking.len(), 1);
        assert_eq!(breaking[0].impact_score, 100);
        assert!(!breaking[0].migration_suggestion.is_empty());

        assert_eq!(assess_risk(&changes).semver, SemverBump::Major);
    }

    #[test]
    fn added_endpoint_only_is_low_minor() {
        let old = spec("1.0.0", vec![]);
        let new = spec("1.1.0", vec![Endpoint::http("POST", "/api/users")]);

        let changes = compare(&old, &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].severity, Severity::Info);

        let risk = assess_risk(&changes);
        assert_eq!(risk.score, 1);
        assert_eq!(risk.level, RiskLevel::Low);
        assert_eq!(risk.semver, SemverBump::Minor);
        assert!(detect_breaking(&changes).is_empty());
    }

    #[test]
    fn four_removals_saturate_to_critical() {
        let old = spec(
            "1.0.0",
            vec![
                Endpoint::http("GET", "/a"),
                Endpoint::http("GET", "/b"),
                Endpoint::http("GET", "/c"),
                Endpoint::http("GET", "/d"),
            ],
        );
        let changes = compare(&old, &ApiSpec::default());
        assert_eq!(changes.len(), 4);
        assert!(changes.iter().all(|c| c.severity == Severity::Breaking));

        let risk = assess_risk(&changes);
        assert_eq!(risk.score, 100);
        assert_eq!(risk.level, RiskLevel::Critical);
        assert_eq!(risk.semver, SemverBump::Major);
    }

    #[test]
    fn two_removals_score_high() {
        let old = spec(
            "1.0.0",
            vec![Endpoint::http("GET", "/a"), Endpoint::http("GET", "/b")],
        );
        let risk = assess_risk(&compare(&old, &ApiSpec::default()));
        assert_eq!(risk.score, 60);
        assert_eq!(risk.level, RiskLevel::High);
    }

    #[test]
    fn removal_yields_one_change_per_endpoint() {
        let endpoints: Vec<Endpoint> = (0..7)
            .map(|i| Endpoint::http("GET", &format!("/r{i}")))
            .collect();
        let old = spec("1.0.0", endpoints);
        let changes = compare(&old, &ApiSpec::default());
        assert_eq!(changes.len(), 7);
        assert!(changes.iter().all(|c| c.change_type == ChangeType::Removed
            && c.category == ChangeCategory::Endpoint
            && c.severity == Severity::Breaking));
    }
}

// ============================================================================
// Parameter requirements
// ============================================================================

mod parameters {
    use super::*;

    fn with_user_id(required: bool) -> Endpoint {
        Endpoint::http("GET", "/api/users").with_parameter(
            Parameter::query("userId", DataType::String).required(required),
        )
    }

    #[test]
    fn tightened_requirement_is_breaking() {
        let old = spec("1.0.0", vec![with_user_id(false)]);
        let new = spec("1.1.0", vec![with_user_id(true)]);

        let changes = compare(&old, &new);
        assert_eq!(changes.len(), 1);
        let change = &changes[0];
        assert_eq!(change.change_type, ChangeType::Modified);
        assert_eq!(change.category, ChangeCategory::Parameter);
        assert!(change.path.ends_with(PathAttribute::Required));
        assert_eq!(change.path.legacy(), "parameter:userId.required");
        assert_eq!(change.severity, Severity::Breaking);

        let breaking = detect_breaking(&changes);
        assert_eq!(breaking[0].impact_score, 68);
        assert!(breaking[0].migration_suggestion.contains("userId"));
    }

    #[test]
    fn relaxed_requirement_is_warning() {
        let old = spec("1.0.0", vec![with_user_id(true)]);
        let new = spec("1.1.0", vec![with_user_id(false)]);

        let changes = compare(&old, &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].severity, Severity::Warning);
        assert_eq!(assess_risk(&changes).semver, SemverBump::Minor);
    }

    #[test]
    fn added_required_parameter_is_breaking() {
        let old = spec("1.0.0", vec![Endpoint::http("GET", "/api/users")]);
        let new = spec(
            "1.1.0",
            vec![Endpoint::http("GET", "/api/users")
                .with_parameter(Parameter::header("X-Tenant", DataType::String).required(true))],
        );

        let changes = compare(&old, &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Added);
        assert_eq!(changes[0].severity, Severity::Breaking);
    }

    #[test]
    fn optional_parameter_named_required_is_info() {
        let old = spec("1.0.0", vec![Endpoint::http("GET", "/api/users")]);
        let new = spec(
            "1.1.0",
            vec![Endpoint::http("GET", "/api/users")
                .with_parameter(Parameter::query("requiredFields", DataType::String))],
        );

        let changes = compare(&old, &new);
        assert_eq!(changes[0].severity, Severity::Info);
    }
}

// ============================================================================
// Deprecation, bodies and responses
// ============================================================================

mod endpoint_details {
    use super::*;

    #[test]
    fn deprecation_is_warning_and_minor() {
        let old = spec("1.0.0", vec![Endpoint::http("GET", "/api/users")]);
        let new = spec("1.1.0", vec![Endpoint::http("GET", "/api/users").deprecated(true)]);

        let changes = compare(&old, &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Deprecated);
        assert_eq!(changes[0].category, ChangeCategory::Endpoint);
        assert_eq!(changes[0].severity, Severity::Warning);
        assert_eq!(changes[0].path.legacy(), "/api/users.deprecated");
        assert_eq!(assess_risk(&changes).semver, SemverBump::Minor);
    }

    #[test]
    fn undeprecation_is_not_reported() {
        let old = spec("1.0.0", vec![Endpoint::http("GET", "/api/users").deprecated(true)]);
        let new = spec("1.1.0", vec![Endpoint::http("GET", "/api/users")]);
        assert!(compare(&old, &new).is_empty());
    }

    #[test]
    fn body_and_response_schema_changes_are_dangerous() {
        let old = spec(
            "1.0.0",
            vec![Endpoint::http("POST", "/api/users")
                .with_request_body(RequestBody::json("NewUser"))
                .with_response(Response::json("201", "User"))],
        );
        let new = spec(
            "2.0.0",
            vec![Endpoint::http("POST", "/api/users")
                .with_request_body(RequestBody::json("CreateUser"))
                .with_response(Response::json("201", "UserV2"))],
        );

        let changes = compare(&old, &new);
        let legacy: Vec<String> = changes.iter().map(|c| c.path.legacy()).collect();
        assert_eq!(legacy, vec!["requestBody.schema", "response:201.schema"]);
        assert!(changes.iter().all(|c| c.severity == Severity::Dangerous));

        // Dangerous changes need action but do not force a major bump
        assert_eq!(detect_breaking(&changes).len(), 2);
        assert_eq!(assess_risk(&changes).semver, SemverBump::Minor);
    }
}

// ============================================================================
// Degenerate inputs and composition
// ============================================================================

mod composition {
    use super::*;

    #[test]
    fn empty_inputs_yield_empty_results() {
        let empty = ApiSpec::default();
        let changes = compare(&empty, &empty);
        assert!(changes.is_empty());
        assert!(detect_breaking(&changes).is_empty());

        let risk = assess_risk(&changes);
        assert_eq!(risk.score, 0);
        assert_eq!(risk.level, RiskLevel::Low);
        assert_eq!(risk.semver, SemverBump::None);
        assert!(risk.severity_counts.is_empty());
        assert!(!risk.recommendation.is_empty());
    }

    #[test]
    fn classify_none_is_info() {
        assert_eq!(classify(None), Severity::Info);
    }

    #[test]
    fn changelog_composes_core_operations() {
        let old = spec(
            "1.4.0",
            vec![
                Endpoint::http("GET", "/api/users"),
                Endpoint::http("DELETE", "/api/users/{id}"),
            ],
        );
        let new = spec("1.5.0", vec![Endpoint::http("GET", "/api/users").deprecated(true)]);

        let log = build_changelog("Users API", "1.4.0", "1.5.0", &old, &new);
        assert_eq!(log.api_name, "Users API");
        let descriptions: Vec<&str> = log.changes.iter().map(|c| c.description.as_str()).collect();
        let expected: Vec<String> = compare(&old, &new).into_iter().map(|c| c.description).collect();
        assert_eq!(descriptions, expected);
        assert!(log.changes.iter().all(|c| c.detected_at == log.generated_at));
        assert_eq!(log.breaking_changes.len(), 1);
        assert_eq!(log.risk.score, 35);
        assert_eq!(log.risk.level, RiskLevel::Medium);

        let check = log.version_check().expect("semantic versions");
        assert_eq!(check.declared, SemverBump::Minor);
        assert_eq!(check.recommended, SemverBump::Major);
        assert!(!check.satisfied);
    }

    #[test]
    fn comparison_is_deterministic() {
        let old = spec(
            "1.0.0",
            vec![
                Endpoint::http("GET", "/a")
                    .with_parameter(Parameter::query("x", DataType::String)),
                Endpoint::http("GET", "/b"),
            ],
        );
        let new = spec(
            "2.0.0",
            vec![
                Endpoint::http("GET", "/a")
                    .with_parameter(Parameter::query("x", DataType::Integer)),
                Endpoint::http("GET", "/c"),
            ],
        );

        let strip = |changes: Vec<api_compat::Change>| -> Vec<String> {
            changes
                .into_iter()
                .map(|c| format!("{} {} {}", c.change_type, c.path, c.severity))
                .collect()
        };
        let first = strip(compare(&old, &new));
        for _ in 0..10 {
            assert_eq!(strip(compare(&old, &new)), first);
        }
    }
}
