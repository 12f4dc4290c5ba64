//! # api-compat
//!
//! `api-compat` compares two versions of an API description and answers the
//! question every release asks: *will existing clients break?*
//!
//! Both documents are normalized into a canonical [`ApiSpec`] (OpenAPI 3.x and
//! the native canonical format are supported), compared structurally, and
//! every difference is classified as `BREAKING`, `DANGEROUS`, `WARNING` or
//! `INFO`. The result is a [`Changelog`] carrying the change list, the
//! breaking subset with impact scores and migration advice, and an aggregate
//! risk assessment with a semantic-version recommendation.
//!
//! ## Core Concepts
//!
//! - **[`ApiSpec`]**: format-agnostic model of one API version.
//! - **[`DiffEngine`]**: the structural comparator.
//! - **[`SeverityClassifier`]**: assigns a [`Severity`] to each change.
//! - **[`BreakingChangeDetector`]**: extracts changes that require consumer action.
//! - **[`RiskAssessor`]**: scores the change list and recommends a [`SemverBump`].
//! - **[`ReportGenerator`]**: renders a changelog as JSON, Markdown or a terminal summary.
//!
//! ## Getting Started
//!
//! ### Comparing Two Documents
//!
//! ```no_run
//! use std::path::Path;
//! use api_compat::parse_spec;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old = parse_spec(Path::new("openapi-v1.yaml"))?;
//!     let new = parse_spec(Path::new("openapi-v2.yaml"))?;
//!
//!     let changelog = api_compat::ChangelogBuilder::new().build(&old, &new);
//!
//!     println!(
//!         "{} → {}: {} changes, {} breaking, recommended bump {}",
//!         changelog.from_version,
//!         changelog.to_version,
//!         changelog.changes.len(),
//!         changelog.breaking_changes.len(),
//!         changelog.risk.semver
//!     );
//!
//!     for breaking in &changelog.breaking_changes {
//!         println!("[{}] {}", breaking.change.severity, breaking.change.description);
//!         println!("    {}", breaking.migration_suggestion);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Building Documents in Code
//!
//! ```
//! use api_compat::model::{ApiKind, ApiSpec, DataType, Endpoint, Parameter};
//! use api_compat::{assess_risk, compare, RiskLevel, SemverBump};
//!
//! let old = ApiSpec::new("users", "1.0.0", ApiKind::Rest)
//!     .with_endpoint(Endpoint::http("GET", "/api/users"));
//! let new = ApiSpec::new("users", "1.1.0", ApiKind::Rest).with_endpoint(
//!     Endpoint::http("GET", "/api/users")
//!         .with_parameter(Parameter::query("page", DataType::Integer)),
//! );
//!
//! let changes = compare(&old, &new);
//! assert_eq!(changes.len(), 1);
//!
//! let risk = assess_risk(&changes);
//! assert_eq!(risk.level, RiskLevel::Low);
//! assert_eq!(risk.semver, SemverBump::Minor);
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the library crate. The `api-compat` binary wraps
//! it with `diff`, `validate` and config subcommands; run `api-compat --help`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Scores are bounded to 0..=100 before narrowing
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::unused_self,
    // `old`/`new` pairs are clear in context
    clippy::similar_names
)]

pub mod analysis;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod diff;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use analysis::{BreakingChangeDetector, RiskAssessor, RiskPolicy, SeverityClassifier};
pub use changelog::{build_changelog, ChangelogBuilder};
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset, DiffConfig};
pub use config::{BehaviorConfig, FilterConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use diff::{ChangeComputer, DiffEngine, EngineConfig};
pub use model::{
    ApiKind, ApiSpec, BreakingChange, Change, ChangeCategory, ChangePath, ChangeType, Changelog,
    Endpoint, EndpointKey, RiskAssessment, RiskLevel, SemverBump, Severity,
};
pub use parsers::{parse_spec, parse_spec_str, SpecParser};
pub use reports::{ReportFormat, ReportGenerator};

/// Every difference between two documents, classified, in comparator order.
///
/// An empty [`ApiSpec`] stands in for a missing document.
#[must_use]
pub fn compare(old: &ApiSpec, new: &ApiSpec) -> Vec<Change> {
    DiffEngine::new().compare(old, new)
}

/// Severity of a single change; an absent change is `INFO`.
#[must_use]
pub fn classify(change: Option<&Change>) -> Severity {
    SeverityClassifier::new().classify_opt(change)
}

/// The BREAKING and DANGEROUS subset of `changes`, with impact scores and
/// migration suggestions.
#[must_use]
pub fn detect_breaking(changes: &[Change]) -> Vec<BreakingChange> {
    BreakingChangeDetector::new().detect(changes)
}

/// Aggregate risk of a change list under the default scoring policy.
#[must_use]
pub fn assess_risk(changes: &[Change]) -> RiskAssessment {
    RiskAssessor::new().assess(changes)
}
