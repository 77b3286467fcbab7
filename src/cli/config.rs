//! Config command handlers.
//!
//! Implements `config show|path|init` and `config-schema`.

use crate::config::{
    config_search_dirs, default_config_path, discover_config_file, generate_example_config,
    generate_json_schema, load_or_default, CONFIG_FILE_NAMES,
};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Print the effective configuration (defaults merged with the discovered file).
pub fn run_config_show(config_path: Option<&Path>) -> Result<()> {
    let (config, loaded_from) = load_or_default(config_path);
    match &loaded_from {
        Some(path) => eprintln!("# Loaded from: {}", path.display()),
        None => eprintln!("# No config file found; showing defaults"),
    }
    let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
    print!("{yaml}");
    Ok(())
}

/// Print the config search path and the file that would be used.
pub fn run_config_path(config_path: Option<&Path>) -> Result<()> {
    eprintln!("Config file search paths (in order):");
    for dir in config_search_dirs() {
        eprintln!("  {}", dir.display());
    }
    eprintln!();
    eprintln!("Recognized file names:");
    for name in CONFIG_FILE_NAMES {
        eprintln!("  {name}");
    }
    eprintln!();
    match discover_config_file(config_path) {
        Some(path) => eprintln!("Active config file: {}", path.display()),
        None => eprintln!("No config file found."),
    }
    Ok(())
}

/// Write an example config file, refusing to overwrite unless forced.
pub fn run_config_init(target: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let target = target.unwrap_or_else(default_config_path);
    if target.exists() && !force {
        bail!(
            "{} already exists. Remove it first or pass --force to re-initialize.",
            target.display()
        );
    }
    std::fs::write(&target, generate_example_config())
        .with_context(|| format!("failed to write {}", target.display()))?;
    eprintln!("Created {}", target.display());
    Ok(target)
}

/// Print or write the JSON schema of the config file format.
pub fn run_config_schema(output: Option<&Path>) -> Result<()> {
    let schema = generate_json_schema()?;
    match output {
        Some(path) => {
            std::fs::write(path, &schema)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Schema written to {}", path.display());
        }
        None => println!("{schema}"),
    }
    Ok(())
}
