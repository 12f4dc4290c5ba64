//! Config command handlers.
//!
//! Implements `config show`, `config path` and `config init`.

use crate::config::{
    discover_config_file, generate_full_example_config, load_or_default, CONFIG_FILE_NAMES,
};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Print the effective configuration (defaults merged with the discovered file).
pub fn run_config_show(explicit: Option<&Path>) -> Result<()> {
    let (config, loaded_from) = load_or_default(explicit);
    if let Some(path) = &loaded_from {
        eprintln!("# Loaded from: {}", path.display());
    } else {
        eprintln!("# No config file found; showing defaults");
    }
    let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
    print!("{yaml}");
    Ok(())
}

/// Print the config search locations and the active config file.
pub fn run_config_path(explicit: Option<&Path>) {
    eprintln!("Config file search paths (in order):");
    for path in search_paths() {
        eprintln!("  {}", path.display());
    }
    eprintln!();
    eprintln!("Recognized file names:");
    for name in CONFIG_FILE_NAMES {
        eprintln!("  {name}");
    }
    eprintln!();
    match discover_config_file(explicit) {
        Some(path) => eprintln!("Active config file: {}", path.display()),
        None => eprintln!("No config file found."),
    }
}

/// Write a commented example config into `dir`, refusing to overwrite.
pub fn run_config_init(dir: &Path) -> Result<PathBuf> {
    let target = dir.join(CONFIG_FILE_NAMES[0]);
    if target.exists() {
        bail!(
            "{} already exists. Remove it first to re-initialize.",
            target.display()
        );
    }
    std::fs::write(&target, generate_full_example_config())
        .with_context(|| format!("failed to write {}", target.display()))?;
    eprintln!("Created {}", target.display());
    Ok(target)
}

fn search_paths() -> Vec<PathBuf> {
    [
        std::env::current_dir().ok(),
        dirs::config_dir().map(|p| p.join("api-compat")),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
