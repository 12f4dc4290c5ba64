//! API document parsers.
//!
//! This module provides adapters for OpenAPI 3.x and for the canonical
//! api-compat document format, converting both to [`ApiSpec`].
//!
//! ## Format Detection
//!
//! The module uses a confidence-based detection system to identify formats:
//! - Each parser reports a confidence score (0.0-1.0) for handling content
//! - The parser with the highest confidence is selected
//! - Detection includes serialization (JSON or YAML) and version information
//!
//! ## Usage
//!
//! ```no_run
//! use api_compat::parsers::{detect_format, parse_spec};
//! use std::path::Path;
//!
//! let spec = parse_spec(Path::new("openapi.yaml")).unwrap();
//!
//! let content = std::fs::read_to_string("openapi.yaml").unwrap();
//! if let Some(detection) = detect_format(&content) {
//!     println!("Detected: {} ({})", detection.format_name, detection.confidence);
//! }
//! ```

mod canonical;
mod detection;
mod openapi;
mod traits;

pub use canonical::CanonicalParser;
pub use detection::{DetectionResult, FormatDetector, ParserKind, MIN_CONFIDENCE_THRESHOLD};
pub use openapi::OpenApiParser;
pub use traits::{FormatConfidence, FormatDetection, ParseError, SpecParser};

use crate::model::ApiSpec;
use std::path::Path;

/// Result of format detection
#[derive(Debug, Clone)]
pub struct DetectedFormat {
    /// Name of the detected format
    pub format_name: String,
    /// Confidence score (0.0-1.0)
    pub confidence: f32,
    /// Detected serialization ("JSON" or "YAML")
    pub variant: Option<String>,
    /// Detected version if available
    pub version: Option<String>,
    /// Any warnings about the detection
    pub warnings: Vec<String>,
}

/// Detect the document format from content without parsing
///
/// Returns None if no format could be detected with sufficient confidence.
#[must_use]
pub fn detect_format(content: &str) -> Option<DetectedFormat> {
    let result = FormatDetector::new().detect_from_content(content);

    result.can_parse().then(|| DetectedFormat {
        format_name: result
            .parser
            .map(|p| p.name().to_string())
            .unwrap_or_default(),
        confidence: result.confidence.value(),
        variant: result.variant,
        version: result.version,
        warnings: result.warnings,
    })
}

/// Maximum API document size (64 MB).
pub const MAX_SPEC_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Detect the document format from file content and parse accordingly
///
/// Returns an error if the file exceeds [`MAX_SPEC_FILE_SIZE`].
pub fn parse_spec(path: &Path) -> Result<ApiSpec, ParseError> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_SPEC_FILE_SIZE {
        return Err(ParseError::TooLarge(format!(
            "{} is {} MB, exceeding the {} MB limit",
            path.display(),
            metadata.len() / (1024 * 1024),
            MAX_SPEC_FILE_SIZE / (1024 * 1024),
        )));
    }
    let content = std::fs::read_to_string(path)?;
    parse_spec_str(&content)
}

/// Parse an API document from string content
pub fn parse_spec_str(content: &str) -> Result<ApiSpec, ParseError> {
    FormatDetector::new().parse_str(content)
}
