mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// rc file names looked up in the working directory, in order.
pub const RC_FILE_NAMES: [&str; 4] = [".lhavgrc", ".lhavgrc.yaml", ".lhavgrc.yml", ".lhavgrc.json"];

/// Get the config directory path (~/.config/lh-avg/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("lh-avg"))
}

/// Get the global config file path (~/.config/lh-avg/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Find the first rc file in `dir`.
pub fn find_rc_file(dir: &Path) -> Option<PathBuf> {
    RC_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Locate a config file: an rc file in `dir`, then the global config.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    find_rc_file(dir).or_else(|| get_config_path().filter(|path| path.is_file()))
}

/// Read and parse a config file. YAML and JSON are both accepted.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not match the schema.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    if content.trim().is_empty() {
        debug!("Config file {} is empty, using defaults", path.display());
        return Ok(Config::default());
    }

    let config: Config = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    debug!(
        "Loaded config from {} ({} scores)",
        path.display(),
        config.scores.len()
    );
    Ok(config)
}

/// Load configuration
///
/// # Arguments
///
/// * `path` - Optional explicit path. If None, searches the working directory
///   for an rc file, then ~/.config/lh-avg/config.yaml, and falls back to
///   defaults when neither exists.
///
/// # Errors
///
/// Returns an error if:
/// - An explicit config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        if !path.exists() {
            anyhow::bail!("Config file not found at {}", path.display());
        }
        return read_config_file(&path);
    }

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    match discover_config(&cwd) {
        Some(found) => read_config_file(&found),
        None => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}
