//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two API documents.

use crate::config::DiffConfig;
use crate::pipeline::{
    compute_changelog, exit_code_for, output_report, parse_spec_with_context, PipelineError,
};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let old_parsed = parse_spec_with_context(&config.paths.old, quiet).map_err(|source| {
        PipelineError::ParseFailed {
            path: config.paths.old.display().to_string(),
            source,
        }
    })?;
    let new_parsed = parse_spec_with_context(&config.paths.new, quiet).map_err(|source| {
        PipelineError::ParseFailed {
            path: config.paths.new.display().to_string(),
            source,
        }
    })?;

    if old_parsed.spec().kind != new_parsed.spec().kind {
        tracing::warn!(
            "Comparing documents of different styles ({} vs {})",
            old_parsed.spec().kind,
            new_parsed.spec().kind
        );
    }

    let changelog = compute_changelog(&config, old_parsed.spec(), new_parsed.spec());
    let exit_code = exit_code_for(&config.behavior, &changelog);

    output_report(&config, &changelog).map_err(|source| PipelineError::ReportFailed { source })?;

    Ok(exit_code)
}
