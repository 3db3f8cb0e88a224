use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::config::Config;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "TODOS_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not render config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Where the config comes from. A file the user named must exist; the
/// default location may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub required: bool,
}

/// Find the config file: explicit path, then `$TODOS_CONFIG`, then
/// `$XDG_CONFIG_HOME/todos/config.toml`, then `$HOME/.config/todos/config.toml`.
pub fn locate_config(explicit: Option<&Path>) -> Option<ConfigLocation> {
    locate_config_with(explicit, |key| std::env::var(key).ok())
}

fn locate_config_with(
    explicit: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Option<ConfigLocation> {
    if let Some(path) = explicit {
        return Some(ConfigLocation {
            path: path.to_path_buf(),
            required: true,
        });
    }
    if let Some(path) = env(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(ConfigLocation {
            path: PathBuf::from(path),
            required: true,
        });
    }
    let config_home = env("XDG_CONFIG_HOME")
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .or_else(|| env("HOME").map(|home| Path::new(&home).join(".config")))?;
    Some(ConfigLocation {
        path: config_home.join("todos").join("config.toml"),
        required: false,
    })
}

/// Parse a config file
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Load the effective config, falling back to defaults when the default
/// location has no file
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match locate_config(explicit) {
        Some(loc) => load_from(&loc),
        None => Ok(Config::default()),
    }
}

fn load_from(loc: &ConfigLocation) -> Result<Config, ConfigError> {
    if !loc.required && !loc.path.exists() {
        debug!(path = %loc.path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    debug!(path = %loc.path.display(), "reading config");
    read_config(&loc.path)
}

/// Render a config back to TOML
pub fn render_config(config: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}
