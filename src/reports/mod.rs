//! Report generation for changelogs.
//!
//! This module renders a [`Changelog`] in several output formats:
//! - JSON: Structured data for programmatic integration
//! - Markdown: Human-readable changelog documents
//! - Summary: Compact shell-friendly output
//!
//! Renderers only format; every decision (severity, impact, risk) is already
//! made when the changelog is built.
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! All user-controllable data (API titles, parameter names, descriptions)
//! should be escaped before embedding in Markdown reports.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::model::Changelog;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    #[error("Render error: {0}")]
    RenderError(String),
}

impl From<std::fmt::Error> for ReportError {
    fn from(err: std::fmt::Error) -> Self {
        Self::RenderError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a changelog
    fn generate(&self, changelog: &Changelog, config: &ReportConfig)
        -> Result<String, ReportError>;

    /// Write a rendered changelog to a writer
    fn write_report(
        &self,
        changelog: &Changelog,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(changelog, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::changelog::ChangelogBuilder;
    use crate::model::{
        ApiKind, ApiSpec, Changelog, DataType, Endpoint, Parameter, RequestBody, Response,
    };
    use chrono::{TimeZone, Utc};

    /// Changelog with one breaking, one dangerous and one informational change.
    ///
    /// Order: removed `GET /legacy`, added `cursor` parameter, response 200 schema change.
    pub fn sample_changelog() -> Changelog {
        let old = ApiSpec::new("Orders | API", "1.0.0", ApiKind::Rest)
            .with_endpoint(Endpoint::http("GET", "/legacy"))
            .with_endpoint(
                Endpoint::http("GET", "/orders")
                    .with_parameter(Parameter::query("limit", DataType::Integer))
                    .with_response(Response::json("200", "OrderList")),
            )
            .with_endpoint(
                Endpoint::http("POST", "/orders").with_request_body(RequestBody::json("NewOrder")),
            );
        let new = ApiSpec::new("Orders | API", "2.0.0", ApiKind::Rest)
            .with_endpoint(
                Endpoint::http("GET", "/orders")
                    .with_parameter(Parameter::query("limit", DataType::Integer))
                    .with_parameter(Parameter::query("cursor", DataType::String))
                    .with_response(Response::json("200", "OrderPage")),
            )
            .with_endpoint(
                Endpoint::http("POST", "/orders").with_request_body(RequestBody::json("NewOrder")),
            );
        let at = Utc
            .with_ymd_and_hms(2025, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp");
        ChangelogBuilder::new().generated_at(at).build(&old, &new)
    }
}
