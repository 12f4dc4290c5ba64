//! Parser trait definitions and error types.
//!
//! This module defines the `SpecParser` trait for format-specific adapters
//! and provides format detection through confidence scoring.

use crate::model::ApiSpec;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while ingesting an API document
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("JSON parse error: {0}")]
    JsonError(String),

    #[error("YAML parse error: {0}")]
    YamlError(String),

    #[error("Invalid document structure: {0}")]
    InvalidStructure(String),

    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(String),

    #[error("Unknown API document format: {0}")]
    UnknownFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Document too large: {0}")]
    TooLarge(String),
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::YamlError(err.to_string())
    }
}

/// Confidence level for format detection
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FormatConfidence(f32);

impl FormatConfidence {
    /// No confidence - definitely not this format
    pub const NONE: Self = Self(0.0);
    /// Low confidence - might be this format
    pub const LOW: Self = Self(0.25);
    /// Medium confidence - likely this format
    pub const MEDIUM: Self = Self(0.5);
    /// High confidence - almost certainly this format
    pub const HIGH: Self = Self(0.75);
    /// Certain - definitely this format
    pub const CERTAIN: Self = Self(1.0);

    /// Create a new confidence value
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the confidence value
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Check if this confidence indicates the format can be parsed
    #[must_use]
    pub fn can_parse(&self) -> bool {
        self.0 >= super::MIN_CONFIDENCE_THRESHOLD
    }
}

impl Default for FormatConfidence {
    fn default() -> Self {
        Self::NONE
    }
}

/// Detection result from a parser
#[derive(Debug, Clone)]
pub struct FormatDetection {
    /// Confidence that this parser can handle the content
    pub confidence: FormatConfidence,
    /// Detected serialization ("JSON" or "YAML")
    pub variant: Option<String>,
    /// Detected version if applicable
    pub version: Option<String>,
    /// Any issues detected that might affect parsing
    pub warnings: Vec<String>,
}

impl FormatDetection {
    /// Create a detection result indicating no match
    #[must_use]
    pub const fn no_match() -> Self {
        Self {
            confidence: FormatConfidence::NONE,
            variant: None,
            version: None,
            warnings: Vec::new(),
        }
    }

    /// Create a detection result with confidence
    #[must_use]
    pub const fn with_confidence(confidence: FormatConfidence) -> Self {
        Self {
            confidence,
            variant: None,
            version: None,
            warnings: Vec::new(),
        }
    }

    /// Set the detected variant
    #[must_use]
    pub fn variant(mut self, variant: &str) -> Self {
        self.variant = Some(variant.to_string());
        self
    }

    /// Set the detected version
    #[must_use]
    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// Add a warning
    #[must_use]
    pub fn warning(mut self, warning: &str) -> Self {
        self.warnings.push(warning.to_string());
        self
    }
}

/// Trait for API document adapters.
///
/// Implementors provide format detection via `detect()` and parsing via
/// `parse_str()`. Every adapter must produce a conformant [`ApiSpec`].
pub trait SpecParser {
    /// Parse a document from a file path
    fn parse(&self, path: &Path) -> Result<ApiSpec, ParseError> {
        let content = std::fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parse a document from string content
    fn parse_str(&self, content: &str) -> Result<ApiSpec, ParseError>;

    /// Get supported format versions
    fn supported_versions(&self) -> Vec<&str>;

    /// Get format name
    fn format_name(&self) -> &str;

    /// Detect if this parser can handle the given content
    ///
    /// Performs lightweight structural checks without full parsing.
    fn detect(&self, content: &str) -> FormatDetection;

    /// Quick check if this parser can likely handle the content
    fn can_parse(&self, content: &str) -> bool {
        self.detect(content).confidence.can_parse()
    }

    /// Get confidence score for parsing this content
    fn confidence(&self, content: &str) -> FormatConfidence {
        self.detect(content).confidence
    }
}

/// Serialization of a document, judged by its first significant character.
pub(crate) fn serialization_variant(content: &str) -> &'static str {
    if content.trim_start().starts_with('{') {
        "JSON"
    } else {
        "YAML"
    }
}

/// Top-level object of a JSON document, if it parses as one.
fn json_top_level(content: &str) -> Option<serde_json::Map<String, serde_json::Value>> {
    match serde_json::from_str(content).ok()? {
        serde_json::Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Whether `key` appears as a top-level key.
///
/// JSON documents are parsed and only the root object's keys count; YAML
/// documents are checked for an unindented `key:` line.
pub(crate) fn has_top_level_key(content: &str, key: &str) -> bool {
    if serialization_variant(content) == "JSON" {
        return json_top_level(content).is_some_and(|map| map.contains_key(key));
    }
    content.lines().any(|line| {
        line.strip_prefix(key)
            .or_else(|| {
                line.strip_prefix('"')
                    .and_then(|l| l.strip_prefix(key))
                    .and_then(|l| l.strip_prefix('"'))
            })
            .is_some_and(|rest| rest.starts_with(':'))
    })
}

/// Scalar value of a top-level key, for version sniffing.
pub(crate) fn top_level_scalar(content: &str, key: &str) -> Option<String> {
    let value = if serialization_variant(content) == "JSON" {
        match json_top_level(content)?.get(key)? {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            _ => return None,
        }
    } else {
        let line = content
            .lines()
            .find(|line| line.starts_with(&format!("{key}:")))?;
        line[key.len() + 1..]
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .to_string()
    };
    (!value.is_empty()).then_some(value)
}
