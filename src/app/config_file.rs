//! Reading and seeding `config.toml`.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tribes_core::AppConfig;

/// Parses the config at `path`, or `None` if there is no such file.
pub fn load(path: &Path) -> Result<Option<AppConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = AppConfig::from_toml(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(Some(config))
}

/// Writes `config` to `path` so later runs can edit it.
pub fn write_defaults(path: &Path, config: &AppConfig) -> Result<()> {
    let text = config.to_toml().context("Failed to serialize default config")?;
    fs::write(path, text)
        .with_context(|| format!("Failed to write default config to {}", path.display()))
}
