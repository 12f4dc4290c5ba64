//! Centralized format detection for API document parsers.
//!
//! Every entry point (file, string, CLI) goes through [`FormatDetector`] so
//! confidence thresholds and tie-breaking stay consistent.

use super::traits::{FormatConfidence, FormatDetection, ParseError, SpecParser};
use super::{CanonicalParser, OpenApiParser};
use crate::model::ApiSpec;

/// Minimum confidence threshold for accepting a format detection.
/// This is LOW confidence (0.25) - the parser believes it might be able to handle the content.
pub const MIN_CONFIDENCE_THRESHOLD: f32 = 0.25;

/// Parser type identified during detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserKind {
    Canonical,
    OpenApi,
}

impl ParserKind {
    /// Get the human-readable name for this parser.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::OpenApi => "OpenAPI",
        }
    }
}

/// Result of format detection.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    /// The parser that should handle this content, if detected.
    pub parser: Option<ParserKind>,
    /// Confidence level of the detection.
    pub confidence: FormatConfidence,
    /// Detected serialization ("JSON" or "YAML").
    pub variant: Option<String>,
    /// Detected version if available.
    pub version: Option<String>,
    /// Any warnings about the detection.
    pub warnings: Vec<String>,
}

impl DetectionResult {
    /// Create a result indicating no format was detected.
    #[must_use]
    pub fn unknown(reason: &str) -> Self {
        Self {
            parser: None,
            confidence: FormatConfidence::NONE,
            variant: None,
            version: None,
            warnings: vec![reason.to_string()],
        }
    }

    fn detected(parser: ParserKind, detection: FormatDetection) -> Self {
        Self {
            parser: Some(parser),
            confidence: detection.confidence,
            variant: detection.variant,
            version: detection.version,
            warnings: detection.warnings,
        }
    }

    /// Check if the detection is confident enough to parse.
    #[must_use]
    pub fn can_parse(&self) -> bool {
        self.parser.is_some() && self.confidence.value() >= MIN_CONFIDENCE_THRESHOLD
    }
}

/// Centralized format detector for API documents.
#[derive(Debug, Clone)]
pub struct FormatDetector {
    canonical: CanonicalParser,
    openapi: OpenApiParser,
    min_confidence: f32,
}

impl Default for FormatDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatDetector {
    /// Create a new format detector with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            canonical: CanonicalParser::new(),
            openapi: OpenApiParser::new(),
            min_confidence: MIN_CONFIDENCE_THRESHOLD,
        }
    }

    /// Create a format detector with a custom confidence threshold.
    #[must_use]
    pub fn with_threshold(min_confidence: f32) -> Self {
        Self {
            min_confidence: min_confidence.clamp(0.0, 1.0),
            ..Self::new()
        }
    }

    /// Detect format from full content string.
    #[must_use]
    pub fn detect_from_content(&self, content: &str) -> DetectionResult {
        if content.trim().is_empty() {
            return DetectionResult::unknown("Empty content");
        }
        let canonical = self.canonical.detect(content);
        let openapi = self.openapi.detect(content);
        self.select_best_parser(canonical, openapi)
    }

    /// Select the best parser based on detection results.
    ///
    /// Ties go to OpenAPI; below the threshold nothing is selected.
    fn select_best_parser(
        &self,
        canonical: FormatDetection,
        openapi: FormatDetection,
    ) -> DetectionResult {
        let canonical_conf = canonical.confidence.value();
        let openapi_conf = openapi.confidence.value();

        tracing::debug!(
            "Format detection: canonical={:.2}, OpenAPI={:.2}, threshold={:.2}",
            canonical_conf,
            openapi_conf,
            self.min_confidence
        );

        if canonical_conf >= self.min_confidence && canonical_conf > openapi_conf {
            DetectionResult::detected(ParserKind::Canonical, canonical)
        } else if openapi_conf >= self.min_confidence {
            DetectionResult::detected(ParserKind::OpenApi, openapi)
        } else {
            let mut result = DetectionResult::unknown(
                "Could not detect API document format with sufficient confidence",
            );
            for (name, conf) in [("canonical", canonical_conf), ("OpenAPI", openapi_conf)] {
                if conf > 0.0 {
                    result.warnings.push(format!(
                        "{name} detection: {:.0}% confidence (threshold: {:.0}%)",
                        conf * 100.0,
                        self.min_confidence * 100.0
                    ));
                }
            }
            result
        }
    }

    /// Parse content using the detected format.
    pub fn parse_str(&self, content: &str) -> Result<ApiSpec, ParseError> {
        let detection = self.detect_from_content(content);

        for warning in &detection.warnings {
            tracing::warn!("{}", warning);
        }

        match detection.parser {
            Some(ParserKind::Canonical) if detection.can_parse() => {
                self.canonical.parse_str(content)
            }
            Some(ParserKind::OpenApi) if detection.can_parse() => self.openapi.parse_str(content),
            _ => Err(ParseError::UnknownFormat(
                "Could not detect API document format. Expected OpenAPI 3.x or a canonical api-compat document."
                    .to_string(),
            )),
        }
    }
}
