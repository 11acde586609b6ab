mod types;

pub use types::{Config, OutputConfig, SourcesConfig, SDL_EXTENSIONS};

use crate::error::{Result, WeaverError};
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file
pub fn load_config(path: &str) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .map_err(|e| WeaverError::Config(format!("Failed to read config file '{}': {}", path, e)))?;

    let config: Config = toml::from_str(&contents)?;

    config.schema.validate().map_err(WeaverError::Config)?;

    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    config.schema.validate().map_err(WeaverError::Config)?;

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)
        .map_err(|e| WeaverError::Config(format!("Failed to write config file '{}': {}", path, e)))?;

    Ok(())
}

/// Directory that relative source paths in the config file are resolved against
pub fn config_dir(config_path: &str) -> PathBuf {
    Path::new(config_path)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
