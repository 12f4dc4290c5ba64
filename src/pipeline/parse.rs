//! API document parsing stage.

use crate::model::ApiSpec;
use crate::parsers::MAX_SPEC_FILE_SIZE;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// A parsed API document together with its source text
#[derive(Debug)]
pub struct ParsedSpec {
    /// The canonical document
    pub spec: ApiSpec,
    /// Original file content
    pub raw_content: String,
}

impl ParsedSpec {
    #[must_use]
    pub const fn new(spec: ApiSpec, raw_content: String) -> Self {
        Self { spec, raw_content }
    }

    #[must_use]
    pub const fn spec(&self) -> &ApiSpec {
        &self.spec
    }

    #[must_use]
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }
}

/// Parse an API document with context for error messages
pub fn parse_spec_with_context(path: &Path, quiet: bool) -> Result<ParsedSpec> {
    if !quiet {
        tracing::info!("Parsing API document: {:?}", path);
    }

    let size = std::fs::metadata(path)
        .with_context(|| format!("Failed to read API document: {}", path.display()))?
        .len();
    if size > MAX_SPEC_FILE_SIZE {
        bail!(
            "{} is {} MB, exceeding the {} MB limit",
            path.display(),
            size / (1024 * 1024),
            MAX_SPEC_FILE_SIZE / (1024 * 1024)
        );
    }

    let raw_content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read API document: {}", path.display()))?;
    let spec = crate::parsers::parse_spec_str(&raw_content)
        .with_context(|| format!("Failed to parse API document: {}", path.display()))?;

    if !quiet {
        tracing::info!(
            "Parsed {} {} with {} endpoints",
            spec.name,
            spec.version,
            spec.endpoint_count()
        );
    }

    Ok(ParsedSpec::new(spec, raw_content))
}
