//! api-compat: API compatibility analysis tool
//!
//! Compares two versions of an API description and reports breaking changes,
//! risk and the semantic-version bump the release needs.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{bail, Context, Result};
use api_compat::{
    cli,
    config::{AppConfig, ConfigPreset, DiffConfigBuilder, Validatable},
    model::ApiSpec,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported Input Formats:",
        "\n  OpenAPI:   3.0, 3.1 (JSON, YAML)",
        "\n  Canonical: api-compat model (JSON, YAML)",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown",
    )
}

#[derive(Parser)]
#[command(name = "api-compat")]
#[command(author)]
#[command(version, long_version = build_long_version())]
#[command(about = "API compatibility analysis and breaking-change detection", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (no failure condition met)
    1  Changes detected (with --fail-on-change)
    2  Breaking or dangerous changes detected (with --fail-on-breaking)
    3  Error occurred

EXAMPLES:
    # Quick diff with a terminal summary
    api-compat diff openapi-v1.yaml openapi-v2.yaml

    # CI/CD gate
    api-compat diff old.yaml new.yaml --preset ci-cd

    # Release notes as Markdown
    api-compat diff old.yaml new.yaml -O CHANGELOG-api.md --min-severity warning")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "API_COMPAT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the old/baseline API document
    old: PathBuf,

    /// Path to the new API document
    new: PathBuf,

    /// Output format (auto: by output file extension, summary otherwise)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Minimum severity to report (breaking, dangerous, warning, info)
    #[arg(long)]
    min_severity: Option<String>,

    /// Exit with code 2 if breaking or dangerous changes are found
    #[arg(long)]
    fail_on_breaking: bool,

    /// Exit with code 1 if any changes are found
    #[arg(long)]
    fail_on_change: bool,

    /// API name for the changelog (defaults to the new document's name)
    #[arg(long)]
    api_name: Option<String>,

    /// Maximum items per report section
    #[arg(long)]
    max_items: Option<usize>,

    /// Start from a named configuration preset
    #[arg(long, value_enum)]
    preset: Option<ConfigPreset>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two API documents and report compatibility
    Diff(DiffArgs),

    /// Detect and parse a single API document
    Validate {
        /// Path to the API document
        file: PathBuf,

        /// Output format (json or summary)
        #[arg(short, long, default_value = "summary")]
        output: ReportFormat,

        /// Output file path (stdout if not specified)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate JSON Schema for the canonical API document format
    ModelSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .api-compat.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    if exit_code != exit_codes::SUCCESS {
        std::process::exit(exit_code);
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Diff(args) => {
            let (mut app_config, loaded_from) =
                api_compat::config::load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }
            if let Some(preset) = args.preset {
                tracing::debug!("Applying preset {}", preset);
                app_config.merge(&AppConfig::from_preset(preset));
            }

            let mut overrides = AppConfig::builder()
                .output_format(args.output.unwrap_or_default())
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .min_severity(args.min_severity)
                .fail_on_breaking(args.fail_on_breaking)
                .fail_on_change(args.fail_on_change)
                .quiet(cli.quiet)
                .build();
            overrides.output.max_items = args.max_items;
            app_config.merge(&overrides);

            let config = DiffConfigBuilder::from_app_config(&app_config)
                .old_path(args.old)
                .new_path(args.new)
                .api_name(args.api_name)
                .build()?;
            let errors = config.validate();
            if !errors.is_empty() {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                bail!("invalid configuration:\n  {}", messages.join("\n  "));
            }

            cli::run_diff(config)
        }

        Commands::Validate {
            file,
            output,
            output_file,
        } => {
            cli::run_validate(file, output, output_file, cli.quiet)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "api-compat", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = api_compat::config::generate_json_schema();
            write_schema(&schema, output)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::ModelSchema { output } => {
            let schema = schemars::schema_for!(ApiSpec);
            let json =
                serde_json::to_string_pretty(&schema).context("failed to serialize schema")?;
            write_schema(&json, output)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Show => cli::run_config_show(cli.config.as_deref())?,
                ConfigAction::Path => cli::run_config_path(cli.config.as_deref()),
                ConfigAction::Init => {
                    let dir = std::env::current_dir()
                        .context("cannot determine current directory")?;
                    cli::run_config_init(&dir)?;
                }
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn write_schema(schema: &str, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, schema)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Schema written to {}", path.display());
        }
        None => println!("{schema}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_author_comes_from_package_metadata() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_author(), Some(env!("CARGO_PKG_AUTHORS")));
        assert_eq!(cmd.get_author(), Some("api-compat contributors"));
    }
}
