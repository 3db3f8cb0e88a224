use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::task::FilterMode;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a toast stays on screen
    #[serde(default = "default_notice_timeout_ms")]
    pub notice_timeout_ms: u64,
    /// Filter selected at startup
    #[serde(default)]
    pub default_filter: FilterMode,
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme overrides, e.g. `background = "#000000"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            notice_timeout_ms: default_notice_timeout_ms(),
            default_filter: FilterMode::All,
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

impl UiConfig {
    pub fn notice_timeout(&self) -> Duration {
        Duration::from_millis(self.notice_timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file; logging is off when unset (the TUI owns stdout)
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive; `RUST_LOG` wins when set
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            level: default_log_level(),
        }
    }
}

fn default_notice_timeout_ms() -> u64 {
    3000
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ui.notice_timeout(), Duration::from_secs(3));
        assert_eq!(config.ui.default_filter, FilterMode::All);
        assert!(config.ui.show_key_hints);
        assert_eq!(config.log.level, "info");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn partial_ui_table_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r##"[ui]
default_filter = "pending"

[ui.colors]
highlight = "#112233"
"##,
        )
        .unwrap();
        assert_eq!(config.ui.default_filter, FilterMode::Pending);
        assert_eq!(config.ui.notice_timeout_ms, 3000);
        assert_eq!(
            config.ui.colors.get("highlight").map(String::as_str),
            Some("#112233")
        );
    }

    #[test]
    fn unknown_filter_is_rejected() {
        let result = toml::from_str::<Config>("[ui]\ndefault_filter = \"done\"\n");
        assert!(result.is_err());
    }
}
