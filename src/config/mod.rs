mod schema;

pub use schema::{
    Config, DEFAULT_API_URL, DEFAULT_OUTPUT_PATH, DEFAULT_SECRET_PATH, DEFAULT_USERNAME,
    DEFAULT_USER_AGENT,
};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.yaml";

/// Get the default config file path (./portfolio.yaml)
pub fn get_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses ./portfolio.yaml
///   when it exists and the built-in defaults otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(config_path) => {
            if !config_path.exists() {
                anyhow::bail!("Config file not found at {}", config_path.display());
            }
            read_config(&config_path)
        }
        None => {
            let config_path = get_config_path();
            if config_path.exists() {
                read_config(&config_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn read_config(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    parse_config(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))
}

/// Parse a YAML document into a Config, filling absent keys with defaults
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_saphyr::from_str(content)?;
    Ok(config)
}
