use std::path::Path;

use anyhow::{Result, bail};
use coursecal_core::Config;
use owo_colors::OwoColorize;

/// Resolve the config file location (explicit `--config` wins).
fn resolve_path(path: Option<&Path>) -> Result<std::path::PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => Config::config_path().map_err(|e| anyhow::anyhow!(e)),
    }
}

pub fn init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = resolve_path(path)?;

    if path.exists() && !force {
        bail!(
            "Config file already exists at {}\n\nUse --force to overwrite it.",
            path.display()
        );
    }

    Config::create_default_config(&path)?;
    println!("Created {}", path.display().green());

    Ok(())
}

pub fn show_path(path: Option<&Path>) -> Result<()> {
    let path = resolve_path(path)?;
    let status = if path.exists() {
        "exists".green().to_string()
    } else {
        "not created, using defaults".dimmed().to_string()
    };

    println!("{}", "Paths".bold());
    println!("  Config:  {} ({status})", path.display());

    Ok(())
}
