pub mod settings;

pub use settings::{Config, DebugLogRotation};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Failed to get config directory")?
        .join("gsearch");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

    Ok(config_dir.join("config.toml"))
}

/// Load configuration from `path`, writing the defaults there if it does not exist
pub fn load_or_create_config_at(path: &Path) -> Result<Config> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    } else {
        let config = Config::default();
        save_config_at(&config, path)?;
        Ok(config)
    }
}

/// Save configuration to `path`
pub fn save_config_at(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    Ok(())
}
