//! Parser integration tests against fixture documents.

use api_compat::model::{ApiKind, DataType, EndpointKey, ParameterLocation};
use api_compat::parsers::{detect_format, parse_spec, parse_spec_str, ParseError};
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn fixture_content(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture should exist")
}

// ============================================================================
// OpenAPI
// ============================================================================

mod openapi {
    use super::*;

    #[test]
    fn parse_petstore_yaml() {
        let spec = parse_spec(&fixture_path("openapi/petstore-v1.yaml")).expect("parse");

        assert_eq!(spec.name, "Petstore");
        assert_eq!(spec.version, "1.0.0");
        assert_eq!(spec.kind, ApiKind::Rest);
        assert_eq!(spec.metadata.get("format").map(String::as_str), Some("openapi"));

        let keys: Vec<String> = spec.endpoints.iter().map(|e| e.key.to_string()).collect();
        assert_eq!(
            keys,
            vec![
                "GET /pets",
                "POST /pets",
                "GET /pets/{petId}",
                "DELETE /pets/{petId}",
                "GET /stores",
            ]
        );
    }

    #[test]
    fn operation_details_carry_over() {
        let spec = parse_spec(&fixture_path("openapi/petstore-v1.yaml")).expect("parse");
        let list = spec
            .find_endpoint(&EndpointKey::http("GET", "/pets"))
            .expect("GET /pets");

        assert_eq!(list.operation_id.as_deref(), Some("listPets"));
        assert_eq!(list.summary.as_deref(), Some("List all pets"));
        assert!(list.tags.contains("pets"));
        assert_eq!(list.parameters.len(), 1);
        assert_eq!(list.parameters[0].data_type, DataType::Integer);
        assert!(!list.parameters[0].required);
        assert_eq!(list.responses[0].schema.as_deref(), Some("Pets"));
    }

    #[test]
    fn path_level_parameter_ref_is_resolved() {
        let spec = parse_spec(&fixture_path("openapi/petstore-v1.yaml")).expect("parse");
        let delete = spec
            .find_endpoint(&EndpointKey::http("DELETE", "/pets/{petId}"))
            .expect("DELETE /pets/{petId}");

        assert_eq!(delete.parameters.len(), 1);
        let pet_id = &delete.parameters[0];
        assert_eq!(pet_id.name, "petId");
        assert_eq!(pet_id.location, ParameterLocation::Path);
        assert!(pet_id.required);
    }

    #[test]
    fn request_body_uses_ref_name() {
        let spec = parse_spec(&fixture_path("openapi/petstore-v1.yaml")).expect("parse");
        let create = spec
            .find_endpoint(&EndpointKey::http("POST", "/pets"))
            .expect("POST /pets");
        let body = create.request_body.as_ref().expect("request body");

        assert_eq!(body.content_type, "application/json");
        assert_eq!(body.schema.as_deref(), Some("NewPet"));
        assert!(!body.required);
    }

    #[test]
    fn parse_openapi_31_json() {
        let spec = parse_spec(&fixture_path("openapi/inventory.json")).expect("parse");
        assert_eq!(spec.name, "Inventory");
        assert_eq!(spec.endpoint_count(), 1);

        let params = &spec.endpoints[0].parameters;
        assert_eq!(params[0].name, "sku");
        assert!(params[0].required, "path parameters are always required");
        assert_eq!(params[1].data_type, DataType::Boolean);
    }

    #[test]
    fn swagger_2_is_rejected() {
        let result = parse_spec(&fixture_path("openapi/swagger2.json"));
        assert!(matches!(result, Err(ParseError::UnsupportedVersion(_))));
    }
}

// ============================================================================
// Canonical format
// ============================================================================

mod canonical {
    use super::*;

    #[test]
    fn parse_canonical_yaml() {
        let spec = parse_spec(&fixture_path("canonical/users-v1.yaml")).expect("parse");
        assert_eq!(spec.name, "users");
        assert_eq!(spec.endpoint_count(), 3);
        assert_eq!(spec.endpoints[1].parameters[0].location, ParameterLocation::Path);
        assert_eq!(
            spec.endpoints[2].key,
            EndpointKey::http("DELETE", "/api/users/{userId}")
        );
    }

    #[test]
    fn parse_canonical_operation_keys() {
        let spec = parse_spec(&fixture_path("canonical/graphql.json")).expect("parse");
        assert_eq!(spec.kind, ApiKind::Graphql);
        assert_eq!(spec.endpoints[0].key, EndpointKey::operation("query", "products"));
        assert!(spec.endpoints[1].deprecated);
    }

    #[test]
    fn canonical_round_trips_through_serde() {
        let spec = parse_spec(&fixture_path("canonical/users-v2.yaml")).expect("parse");
        let json = serde_json::to_string(&spec).expect("serialize");
        assert_eq!(parse_spec_str(&json).expect("reparse"), spec);
    }

    #[test]
    fn openapi_import_round_trips_as_canonical_json() {
        let spec = parse_spec(&fixture_path("openapi/petstore-v1.yaml")).expect("parse");
        assert_eq!(spec.metadata.get("format").map(String::as_str), Some("openapi"));

        let json = serde_json::to_string(&spec).expect("serialize");
        let detected = detect_format(&json).expect("detected");
        assert_eq!(detected.format_name, "canonical");
        assert_eq!(parse_spec_str(&json).expect("reparse"), spec);
    }

    #[test]
    fn openapi_import_round_trips_as_canonical_yaml() {
        let spec = parse_spec(&fixture_path("openapi/petstore-v2.yaml")).expect("parse");
        let yaml = serde_yaml::to_string(&spec).expect("serialize");
        assert_eq!(parse_spec_str(&yaml).expect("reparse"), spec);
    }
}

// ============================================================================
// Detection
// ============================================================================

mod detection {
    use super::*;

    #[test]
    fn detects_openapi_with_version_and_variant() {
        let detected =
            detect_format(&fixture_content("openapi/petstore-v1.yaml")).expect("detected");
        assert_eq!(detected.format_name, "OpenAPI");
        assert_eq!(detected.version.as_deref(), Some("3.0.3"));
        assert_eq!(detected.variant.as_deref(), Some("YAML"));
        assert!((detected.confidence - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn detects_canonical_json() {
        let detected = detect_format(&fixture_content("canonical/graphql.json")).expect("detected");
        assert_eq!(detected.format_name, "canonical");
        assert_eq!(detected.variant.as_deref(), Some("JSON"));
    }

    #[test]
    fn unknown_content_is_rejected() {
        assert!(detect_format("just some text").is_none());
        assert!(matches!(
            parse_spec_str("hello: world\n"),
            Err(ParseError::UnknownFormat(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = parse_spec(Path::new("/nonexistent/openapi.yaml"));
        assert!(matches!(result, Err(ParseError::IoError(_))));
    }
}
