//! Pipeline orchestration for API comparisons.
//!
//! Shared parse → compare → report logic used by the CLI command handlers.

mod compare_stage;
mod output;
mod parse;
mod report_stage;

pub use compare_stage::{compute_changelog, exit_code_for};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use parse::{parse_spec_with_context, ParsedSpec};
pub use report_stage::output_report;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse an API document
    #[error("Parse failed for {path}: {source}")]
    ParseFailed {
        path: String,
        source: anyhow::Error,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected, or no failure flag tripped
    pub const SUCCESS: i32 = 0;
    /// Changes were detected (with `--fail-on-change`)
    pub const CHANGES_DETECTED: i32 = 1;
    /// Breaking or dangerous changes were detected (with `--fail-on-breaking`)
    pub const BREAKING_CHANGES: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::CHANGES_DETECTED, 1);
        assert_eq!(exit_codes::BREAKING_CHANGES, 2);
        assert_eq!(exit_codes::ERROR, 3);
    }

    #[test]
    fn test_parse_failed_message_names_path() {
        let err = PipelineError::ParseFailed {
            path: "old.yaml".to_string(),
            source: anyhow::anyhow!("bad indentation"),
        };
        assert_eq!(err.to_string(), "Parse failed for old.yaml: bad indentation");
    }

    #[test]
    fn test_report_failed_keeps_source_chain() {
        let err = PipelineError::ReportFailed {
            source: anyhow::anyhow!("disk full").context("Failed to write report"),
        };
        let label = match &err {
            PipelineError::ParseFailed { .. } => "parse",
            PipelineError::ReportFailed { .. } => "report",
        };
        assert_eq!(label, "report");
        assert_eq!(err.to_string(), "Report failed: Failed to write report");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("Failed to write report"));
    }
}
