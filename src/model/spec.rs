//! Canonical API document and endpoint structures.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use xxhash_rust::xxh3::xxh3_64;

/// Interface style the document was ingested from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ApiKind {
    #[default]
    Rest,
    Graphql,
    Rpc,
    Event,
}

impl fmt::Display for ApiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rest => write!(f, "REST"),
            Self::Graphql => write!(f, "GraphQL"),
            Self::Rpc => write!(f, "RPC"),
            Self::Event => write!(f, "event"),
        }
    }
}

/// Canonical API document - the format-agnostic model every adapter produces.
///
/// An empty document (no endpoints) stands in for "no API"; the comparator
/// never deals with an absent spec.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApiSpec {
    /// API name (e.g. `info.title` for OpenAPI)
    pub name: String,
    /// Declared API version
    pub version: String,
    /// Interface style
    #[serde(default)]
    pub kind: ApiKind,
    /// Endpoints in document order
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
    /// Free-form metadata
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl ApiSpec {
    /// Create an empty spec.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>, kind: ApiKind) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            kind,
            endpoints: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Append an endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    /// Attach a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Look up an endpoint by identity key (last one wins on duplicates).
    #[must_use]
    pub fn find_endpoint(&self, key: &EndpointKey) -> Option<&Endpoint> {
        self.endpoints.iter().rev().find(|e| &e.key == key)
    }

    /// Hash of the endpoint surface, used to skip comparing identical documents.
    ///
    /// Name, version and metadata are excluded: two releases that only bump
    /// the version string hash the same.
    #[must_use]
    pub fn content_hash(&self) -> u64 {
        let mut input = Vec::new();
        input.extend(self.kind.to_string().as_bytes());
        for endpoint in &self.endpoints {
            if let Ok(bytes) = serde_json::to_vec(endpoint) {
                input.extend(bytes);
            }
        }
        xxh3_64(&input)
    }
}

/// Identity of an endpoint across versions.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum EndpointKey {
    /// Request/response API keyed by HTTP method and path template
    Http { method: String, path: String },
    /// RPC/event/graph API keyed by operation kind and name
    Operation { kind: String, name: String },
}

impl EndpointKey {
    /// HTTP endpoint key; the method is upper-cased.
    pub fn http(method: impl AsRef<str>, path: impl Into<String>) -> Self {
        Self::Http {
            method: method.as_ref().to_ascii_uppercase(),
            path: path.into(),
        }
    }

    /// Operation key, e.g. `("query", "users")` or `("rpc", "UserService.GetUser")`.
    pub fn operation(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Operation {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// The path (or operation name) without the method/kind qualifier.
    #[must_use]
    pub fn locator(&self) -> &str {
        match self {
            Self::Http { path, .. } => path,
            Self::Operation { name, .. } => name,
        }
    }

    /// Normalized copy (upper-case HTTP method).
    #[must_use]
    pub fn normalized(&self) -> Self {
        match self {
            Self::Http { method, path } => Self::http(method, path.clone()),
            Self::Operation { .. } => self.clone(),
        }
    }
}

impl fmt::Display for EndpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { method, path } => write!(f, "{method} {path}"),
            Self::Operation { kind, name } => write!(f, "{kind} {name}"),
        }
    }
}

/// A single operation of the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Endpoint {
    /// Identity key
    pub key: EndpointKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<Response>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl Endpoint {
    /// Create an endpoint with no parameters, body or responses.
    #[must_use]
    pub fn new(key: EndpointKey) -> Self {
        Self {
            key,
            operation_id: None,
            summary: None,
            description: None,
            deprecated: false,
            parameters: Vec::new(),
            request_body: None,
            responses: Vec::new(),
            tags: BTreeSet::new(),
        }
    }

    /// Shorthand for an HTTP endpoint.
    #[must_use]
    pub fn http(method: &str, path: &str) -> Self {
        Self::new(EndpointKey::http(method, path))
    }

    #[must_use]
    pub fn with_operation_id(mut self, id: impl Into<String>) -> Self {
        self.operation_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    #[must_use]
    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn with_request_body(mut self, body: RequestBody) -> Self {
        self.request_body = Some(body);
        self
    }

    #[must_use]
    pub fn with_response(mut self, response: Response) -> Self {
        self.responses.push(response);
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }
}

/// Where a parameter is carried in the request.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    #[default]
    Query,
    Header,
    Cookie,
}

impl ParameterLocation {
    /// Parse an OpenAPI-style `in` value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "path" => Some(Self::Path),
            "query" => Some(Self::Query),
            "header" => Some(Self::Header),
            "cookie" => Some(Self::Cookie),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
            Self::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared type tag of a parameter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
    Null,
}

impl DataType {
    /// Parse a JSON-Schema style type name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "string" => Some(Self::String),
            "integer" | "int" | "int32" | "int64" => Some(Self::Integer),
            "number" | "float" | "double" => Some(Self::Number),
            "boolean" | "bool" => Some(Self::Boolean),
            "object" => Some(Self::Object),
            "array" => Some(Self::Array),
            "null" => Some(Self::Null),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(rename = "type")]
    pub data_type: DataType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Parameter {
    #[must_use]
    pub fn new(name: impl Into<String>, location: ParameterLocation, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            location,
            data_type,
            required: false,
            default: None,
            description: None,
        }
    }

    #[must_use]
    pub fn query(name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(name, ParameterLocation::Query, data_type)
    }

    /// Path parameters are always required.
    #[must_use]
    pub fn path(name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(name, ParameterLocation::Path, data_type).required(true)
    }

    #[must_use]
    pub fn header(name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(name, ParameterLocation::Header, data_type)
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default = Some(value);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// One-line rendering used for change values: `query userId: integer (required)`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} {}: {} ({})",
            self.location,
            self.name,
            self.data_type,
            if self.required { "required" } else { "optional" }
        )
    }
}

/// Request payload declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RequestBody {
    pub content_type: String,
    /// Referenced schema name; bodies are compared by reference only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RequestBody {
    #[must_use]
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            schema: None,
            required: false,
            description: None,
        }
    }

    #[must_use]
    pub fn json(schema: impl Into<String>) -> Self {
        Self::new("application/json").with_schema(schema)
    }

    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Declared response for one status code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Response {
    /// Status code as written in the document (`"200"`, `"4XX"`, `"default"`)
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Response {
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            content_type: None,
            schema: None,
            description: None,
        }
    }

    #[must_use]
    pub fn json(status: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            content_type: Some("application/json".to_string()),
            schema: Some(schema.into()),
            ..Self::new(status)
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
