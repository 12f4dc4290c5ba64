//! Parser for serialized canonical `ApiSpec` documents (JSON or YAML).

use super::traits::{
    has_top_level_key, serialization_variant, FormatConfidence, FormatDetection, ParseError,
    SpecParser,
};
use crate::model::ApiSpec;

/// Parser for the canonical api-compat document format.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalParser;

impl CanonicalParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn normalize(mut spec: ApiSpec) -> ApiSpec {
        for endpoint in &mut spec.endpoints {
            endpoint.key = endpoint.key.normalized();
        }
        spec
    }
}

impl SpecParser for CanonicalParser {
    fn parse_str(&self, content: &str) -> Result<ApiSpec, ParseError> {
        let spec: ApiSpec = match serialization_variant(content) {
            "JSON" => serde_json::from_str(content)?,
            _ => serde_yaml::from_str(content)?,
        };
        Ok(Self::normalize(spec))
    }

    fn supported_versions(&self) -> Vec<&str> {
        vec!["1"]
    }

    fn format_name(&self) -> &'static str {
        "canonical"
    }

    fn detect(&self, content: &str) -> FormatDetection {
        let variant = serialization_variant(content);
        let has_endpoints = has_top_level_key(content, "endpoints");
        let has_kind = has_top_level_key(content, "kind");
        let is_openapi =
            has_top_level_key(content, "openapi") || has_top_level_key(content, "swagger");

        if is_openapi {
            return FormatDetection::no_match();
        }

        match (has_endpoints, has_kind) {
            (true, true) => {
                let confidence = if has_top_level_key(content, "name") {
                    FormatConfidence::CERTAIN
                } else {
                    FormatConfidence::HIGH
                };
                FormatDetection::with_confidence(confidence).variant(variant)
            }
            (true, false) => FormatDetection::with_confidence(FormatConfidence::LOW)
                .variant(variant)
                .warning("Missing kind field - assuming a REST canonical document"),
            (false, _) => FormatDetection::no_match(),
        }
    }
}
