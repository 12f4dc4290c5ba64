//! OpenAPI 3.x parser.
//!
//! Supports OpenAPI 3.0 and 3.1 documents in JSON and YAML. Schemas are not
//! expanded: request bodies and responses record the name of the referenced
//! schema only.

use super::traits::{
    has_top_level_key, serialization_variant, top_level_scalar, FormatConfidence,
    FormatDetection, ParseError, SpecParser,
};
use crate::model::{
    ApiKind, ApiSpec, DataType, Endpoint, EndpointKey, Parameter, ParameterLocation, RequestBody,
    Response,
};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// HTTP methods an OpenAPI path item may declare.
const METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Parser for OpenAPI 3.x documents
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenApiParser;

impl OpenApiParser {
    /// Create a new OpenAPI parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Read JSON or YAML into an order-preserving YAML value with string keys.
    fn load(content: &str) -> Result<Value, ParseError> {
        let value: Value = match serialization_variant(content) {
            "JSON" => serde_json::from_str(content)?,
            _ => serde_yaml::from_str(content)?,
        };
        Ok(stringify_keys(value))
    }

    fn convert(doc: OpenApiDocument) -> ApiSpec {
        let mut spec = ApiSpec::new(doc.info.title, doc.info.version, ApiKind::Rest)
            .with_metadata("format", "openapi");
        if let Some(version) = &doc.openapi {
            spec = spec.with_metadata("openapi_version", version.clone());
        }
        if let Some(description) = doc.info.description {
            spec = spec.with_metadata("description", description);
        }

        let components = &doc.components;
        for (path, item) in &doc.paths {
            for (method, raw) in &item.operations {
                if !METHODS.contains(&method.to_ascii_lowercase().as_str()) {
                    continue;
                }
                let operation: Operation = match serde_yaml::from_value(raw.clone()) {
                    Ok(op) => op,
                    Err(e) => {
                        tracing::warn!("Skipping malformed operation {method} {path}: {e}");
                        continue;
                    }
                };
                spec.endpoints.push(convert_operation(
                    EndpointKey::http(method, path.clone()),
                    &item.parameters,
                    operation,
                    components,
                ));
            }
        }

        tracing::debug!(
            "OpenAPI document '{}' yielded {} endpoints",
            spec.name,
            spec.endpoint_count()
        );
        spec
    }
}

impl SpecParser for OpenApiParser {
    fn parse_str(&self, content: &str) -> Result<ApiSpec, ParseError> {
        let value = Self::load(content)?;
        let doc: OpenApiDocument = serde_yaml::from_value(value)?;

        match (&doc.openapi, &doc.swagger) {
            (Some(version), _) if version.starts_with("3.") => {}
            (Some(version), _) => return Err(ParseError::UnsupportedVersion(version.clone())),
            (None, Some(version)) => {
                return Err(ParseError::UnsupportedVersion(format!("Swagger {version}")))
            }
            (None, None) => return Err(ParseError::MissingField("openapi".to_string())),
        }

        Ok(Self::convert(doc))
    }

    fn supported_versions(&self) -> Vec<&str> {
        vec!["3.0", "3.1"]
    }

    fn format_name(&self) -> &'static str {
        "OpenAPI"
    }

    fn detect(&self, content: &str) -> FormatDetection {
        let variant = serialization_variant(content);

        if has_top_level_key(content, "openapi") {
            let version = top_level_scalar(content, "openapi");
            let mut detection = match version.as_deref() {
                Some(v) if v.starts_with("3.") => {
                    FormatDetection::with_confidence(FormatConfidence::CERTAIN)
                }
                Some(_) => FormatDetection::with_confidence(FormatConfidence::MEDIUM)
                    .warning("Unrecognized OpenAPI version"),
                None => FormatDetection::with_confidence(FormatConfidence::HIGH),
            }
            .variant(variant);
            if let Some(v) = version {
                detection = detection.version(&v);
            }
            return detection;
        }

        if has_top_level_key(content, "swagger") {
            return FormatDetection::with_confidence(FormatConfidence::MEDIUM)
                .variant(variant)
                .warning("Swagger 2.0 documents are not supported; convert to OpenAPI 3");
        }

        if has_top_level_key(content, "paths") && has_top_level_key(content, "info") {
            return FormatDetection::with_confidence(FormatConfidence::LOW)
                .variant(variant)
                .warning("Missing openapi field - might not be OpenAPI");
        }

        FormatDetection::no_match()
    }
}

fn convert_operation(
    key: EndpointKey,
    path_parameters: &[ParameterOrRef],
    operation: Operation,
    components: &Components,
) -> Endpoint {
    let mut endpoint = Endpoint::new(key);
    endpoint.operation_id = operation.operation_id;
    endpoint.summary = operation.summary;
    endpoint.description = operation.description;
    endpoint.deprecated = operation.deprecated;
    endpoint.tags = operation.tags.into_iter().collect();

    // Operation parameters override path-level ones with the same name and location
    let mut parameters: Vec<Parameter> = Vec::new();
    for raw in path_parameters.iter().chain(operation.parameters.iter()) {
        let Some(param) = resolve_parameter(raw, components) else {
            continue;
        };
        match parameters
            .iter_mut()
            .find(|p| p.name == param.name && p.location == param.location)
        {
            Some(existing) => *existing = param,
            None => parameters.push(param),
        }
    }
    endpoint.parameters = parameters;

    endpoint.request_body = operation.request_body.map(convert_request_body);
    endpoint.responses = operation
        .responses
        .into_iter()
        .map(|(status, response)| convert_response(status, response))
        .collect();
    endpoint
}

fn resolve_parameter(raw: &ParameterOrRef, components: &Components) -> Option<Parameter> {
    match raw {
        ParameterOrRef::Inline(param) => Some(convert_parameter(param)),
        ParameterOrRef::Ref { reference } => {
            let name = reference.strip_prefix("#/components/parameters/");
            match name.and_then(|n| components.parameters.get(n)) {
                Some(ParameterOrRef::Inline(param)) => Some(convert_parameter(param)),
                Some(ParameterOrRef::Ref { reference: nested }) => {
                    tracing::warn!("Parameter reference {reference} points to another reference {nested}; skipped");
                    None
                }
                None => {
                    tracing::warn!("Unresolved parameter reference {reference}; skipped");
                    None
                }
            }
        }
    }
}

fn convert_parameter(raw: &ParameterObject) -> Parameter {
    let location = ParameterLocation::parse(&raw.location).unwrap_or_else(|| {
        tracing::warn!(
            "Unknown parameter location '{}' for '{}', assuming query",
            raw.location,
            raw.name
        );
        ParameterLocation::Query
    });
    let data_type = raw.schema.as_ref().map_or(DataType::String, SchemaObject::data_type);
    // Path parameters are always required
    let required = raw.required || location == ParameterLocation::Path;

    let mut param = Parameter::new(raw.name.clone(), location, data_type).required(required);
    param.description = raw.description.clone();
    param.default = raw
        .schema
        .as_ref()
        .and_then(|s| s.default.as_ref())
        .and_then(|v| serde_json::to_value(v).ok());
    param
}

fn convert_request_body(raw: RequestBodyObject) -> RequestBody {
    if let Some(reference) = &raw.reference {
        return RequestBody::new("application/json").with_schema(ref_name(reference));
    }
    let (content_type, media) = raw
        .content
        .into_iter()
        .next()
        .unwrap_or_else(|| ("application/json".to_string(), MediaType::default()));
    let mut body = RequestBody::new(content_type).required(raw.required);
    body.schema = media.schema.as_ref().and_then(SchemaObject::reference_name);
    body.description = raw.description;
    body
}

fn convert_response(status: String, raw: ResponseObject) -> Response {
    let mut response = Response::new(status);
    response.description = raw.description;
    if let Some(reference) = &raw.reference {
        response.schema = Some(ref_name(reference).to_string());
        return response;
    }
    if let Some((content_type, media)) = raw.content.into_iter().next() {
        response.content_type = Some(content_type);
        response.schema = media.schema.as_ref().and_then(SchemaObject::reference_name);
    }
    response
}

/// Last path segment of a `$ref` (`#/components/schemas/User` -> `User`).
fn ref_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

/// Text form of a scalar; unquoted YAML numbers such as `1.0` keep their digits.
fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        other => scalar_to_string(other),
    })
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        other => Some(scalar_to_string(other)),
    })
}

/// Convert non-string mapping keys (`200:` in YAML) to strings, recursively.
fn stringify_keys(value: Value) -> Value {
    match value {
        Value::Mapping(mapping) => Value::Mapping(
            mapping
                .into_iter()
                .map(|(k, v)| (Value::String(scalar_to_string(k)), stringify_keys(v)))
                .collect(),
        ),
        Value::Sequence(seq) => Value::Sequence(seq.into_iter().map(stringify_keys).collect()),
        Value::Tagged(tagged) => stringify_keys(tagged.value),
        other => other,
    }
}

// ============================================================================
// OpenAPI document structures (lenient: everything not needed is ignored)
// ============================================================================

#[derive(Debug, Deserialize)]
struct OpenApiDocument {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    openapi: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    swagger: Option<String>,
    #[serde(default)]
    info: Info,
    #[serde(default)]
    paths: IndexMap<String, PathItem>,
    #[serde(default)]
    components: Components,
}

#[derive(Debug, Default, Deserialize)]
struct Info {
    #[serde(default, deserialize_with = "lenient_string")]
    title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    version: String,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Components {
    #[serde(default)]
    parameters: IndexMap<String, ParameterOrRef>,
}

#[derive(Debug, Deserialize)]
struct PathItem {
    #[serde(default)]
    parameters: Vec<ParameterOrRef>,
    #[serde(flatten)]
    operations: IndexMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Operation {
    operation_id: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    #[serde(default)]
    deprecated: bool,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    parameters: Vec<ParameterOrRef>,
    request_body: Option<RequestBodyObject>,
    #[serde(default)]
    responses: IndexMap<String, ResponseObject>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ParameterOrRef {
    Ref {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Inline(ParameterObject),
}

#[derive(Debug, Deserialize)]
struct ParameterObject {
    name: String,
    #[serde(rename = "in")]
    location: String,
    #[serde(default)]
    required: bool,
    description: Option<String>,
    schema: Option<SchemaObject>,
}

#[derive(Debug, Deserialize)]
struct RequestBodyObject {
    #[serde(rename = "$ref")]
    reference: Option<String>,
    description: Option<String>,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    content: IndexMap<String, MediaType>,
}

#[derive(Debug, Deserialize)]
struct ResponseObject {
    #[serde(rename = "$ref")]
    reference: Option<String>,
    description: Option<String>,
    #[serde(default)]
    content: IndexMap<String, MediaType>,
}

#[derive(Debug, Default, Deserialize)]
struct MediaType {
    schema: Option<SchemaObject>,
}

#[derive(Debug, Deserialize)]
struct SchemaObject {
    #[serde(rename = "$ref")]
    reference: Option<String>,
    /// A string, or a list of strings in OpenAPI 3.1
    #[serde(rename = "type")]
    schema_type: Option<Value>,
    items: Option<Box<SchemaObject>>,
    default: Option<Value>,
}

impl SchemaObject {
    /// First non-null type name.
    fn type_name(&self) -> Option<&str> {
        match self.schema_type.as_ref()? {
            Value::String(s) => Some(s.as_str()),
            Value::Sequence(types) => types
                .iter()
                .filter_map(Value::as_str)
                .find(|t| *t != "null"),
            _ => None,
        }
    }

    fn data_type(&self) -> DataType {
        if self.reference.is_some() {
            return DataType::Object;
        }
        self.type_name()
            .and_then(DataType::parse)
            .unwrap_or(DataType::Object)
    }

    /// Name recorded for a body or response schema.
    fn reference_name(&self) -> Option<String> {
        if let Some(reference) = &self.reference {
            return Some(ref_name(reference).to_string());
        }
        match self.type_name() {
            Some("array") => Some(
                self.items
                    .as_ref()
                    .and_then(|items| items.reference_name())
                    .map_or_else(|| "array".to_string(), |inner| format!("{inner}[]")),
            ),
            Some(name) => Some(name.to_string()),
            None => None,
        }
    }
}
