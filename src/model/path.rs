//! Structured location of a change inside an API document.

use super::EndpointKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The element of an endpoint a change refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum PathElement {
    /// The endpoint itself
    Endpoint,
    /// A parameter, by name
    Parameter(String),
    /// The request body
    RequestBody,
    /// A response, by status code
    Response(String),
    /// A named schema
    Schema(String),
    /// A named security requirement
    Security(String),
}

/// Attribute of an element that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathAttribute {
    Type,
    Required,
    Location,
    Schema,
    Deprecated,
}

impl PathAttribute {
    /// Suffix used in the legacy string form (`.type`, `.required`, ...).
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Required => "required",
            Self::Location => "location",
            Self::Schema => "schema",
            Self::Deprecated => "deprecated",
        }
    }
}

/// Structured path identifying the changed element.
///
/// Replaces string paths such as `"parameter:userId.required"`; use
/// [`ChangePath::legacy`] where the historical text form is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangePath {
    /// Endpoint owning the element
    pub endpoint: EndpointKey,
    /// Element within the endpoint
    pub element: PathElement,
    /// Changed attribute, if the change is attribute-level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<PathAttribute>,
}

impl ChangePath {
    fn new(endpoint: &EndpointKey, element: PathElement) -> Self {
        Self {
            endpoint: endpoint.clone(),
            element,
            attribute: None,
        }
    }

    #[must_use]
    pub fn endpoint(endpoint: &EndpointKey) -> Self {
        Self::new(endpoint, PathElement::Endpoint)
    }

    #[must_use]
    pub fn parameter(endpoint: &EndpointKey, name: impl Into<String>) -> Self {
        Self::new(endpoint, PathElement::Parameter(name.into()))
    }

    #[must_use]
    pub fn request_body(endpoint: &EndpointKey) -> Self {
        Self::new(endpoint, PathElement::RequestBody)
    }

    #[must_use]
    pub fn response(endpoint: &EndpointKey, status: impl Into<String>) -> Self {
        Self::new(endpoint, PathElement::Response(status.into()))
    }

    #[must_use]
    pub fn schema(endpoint: &EndpointKey, name: impl Into<String>) -> Self {
        Self::new(endpoint, PathElement::Schema(name.into()))
    }

    #[must_use]
    pub fn security(endpoint: &EndpointKey, name: impl Into<String>) -> Self {
        Self::new(endpoint, PathElement::Security(name.into()))
    }

    /// Narrow the path to one attribute of the element.
    #[must_use]
    pub fn with_attribute(mut self, attribute: PathAttribute) -> Self {
        self.attribute = Some(attribute);
        self
    }

    /// True when the path names exactly this attribute.
    #[must_use]
    pub fn ends_with(&self, attribute: PathAttribute) -> bool {
        self.attribute == Some(attribute)
    }

    /// Name of the element (parameter name, status code, schema name).
    #[must_use]
    pub fn element_name(&self) -> Option<&str> {
        match &self.element {
            PathElement::Parameter(name)
            | PathElement::Response(name)
            | PathElement::Schema(name)
            | PathElement::Security(name) => Some(name),
            PathElement::Endpoint | PathElement::RequestBody => None,
        }
    }

    /// Historical string rendering, e.g. `/api/users` or `parameter:userId.type`.
    #[must_use]
    pub fn legacy(&self) -> String {
        let base = match &self.element {
            PathElement::Endpoint => self.endpoint.locator().to_string(),
            PathElement::Parameter(name) => format!("parameter:{name}"),
            PathElement::RequestBody => "requestBody".to_string(),
            PathElement::Response(status) => format!("response:{status}"),
            PathElement::Schema(name) => format!("schema:{name}"),
            PathElement::Security(name) => format!("security:{name}"),
        };
        match self.attribute {
            Some(attr) => format!("{base}.{}", attr.suffix()),
            None => base,
        }
    }
}

impl fmt::Display for ChangePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.element, self.attribute) {
            (PathElement::Endpoint, None) => write!(f, "{}", self.endpoint),
            (PathElement::Endpoint, Some(attr)) => write!(f, "{}.{}", self.endpoint, attr.suffix()),
            _ => write!(f, "{} {}", self.endpoint, self.legacy()),
        }
    }
}
