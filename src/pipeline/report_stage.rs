//! Report output stage.

use crate::config::DiffConfig;
use crate::model::Changelog;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};
use anyhow::{Context, Result};

use super::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Render a changelog and write it to the configured destination.
///
/// Applies the configured minimum severity before rendering; the risk block
/// still reflects the full change list.
pub fn output_report(config: &DiffConfig, changelog: &Changelog) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_format = auto_detect_format(config.output.format, &output_target);

    let visible = match config.min_severity() {
        Some(min) => {
            let filtered = changelog.filtered(min);
            if !config.behavior.quiet {
                tracing::info!(
                    "Filtered changes to severity >= {}: {} of {} shown",
                    min,
                    filtered.changes.len(),
                    changelog.changes.len()
                );
            }
            filtered
        }
        None => changelog.clone(),
    };

    let report_config = ReportConfig {
        max_items: config.output.max_items,
        metadata: ReportMetadata {
            old_spec_path: Some(config.paths.old.to_string_lossy().to_string()),
            new_spec_path: Some(config.paths.new.to_string_lossy().to_string()),
            ..ReportMetadata::new()
        },
        ..ReportConfig::default()
    };

    let use_color = should_use_color(config.output.no_color, &output_target);
    let reporter = create_reporter_with_options(effective_format, use_color);
    let report = reporter
        .generate(&visible, &report_config)
        .with_context(|| format!("Failed to render {effective_format} report"))?;

    write_output(&report, &output_target, config.behavior.quiet)
}
