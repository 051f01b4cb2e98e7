//! Application configuration
//!
//! Configuration loaded from .tailview.toml file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application configuration loaded from .tailview.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Re-read the log file automatically on an interval
    #[serde(default = "default_auto_refresh")]
    pub auto_refresh: bool,

    /// Seconds between automatic refreshes (clamped to 0.1..=5.0)
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: f64,

    /// Show a line number gutter
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,

    /// Wrap long lines instead of cutting them off
    #[serde(default = "default_wrap_lines")]
    pub wrap_lines: bool,

    /// Wrap column (0 = fit to the panel width)
    #[serde(default)]
    pub wrap_width: u16,

    /// How long the UI waits for input before the next frame
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// File name patterns shown in the open dialog
    #[serde(default = "default_file_filters")]
    pub file_filters: Vec<String>,
}

fn default_auto_refresh() -> bool {
    true
}

fn default_refresh_interval_secs() -> f64 {
    1.0
}

fn default_show_line_numbers() -> bool {
    true
}

fn default_wrap_lines() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    50
}

/// Shortest input poll timeout
pub const MIN_TICK_RATE_MS: u64 = 10;

fn default_file_filters() -> Vec<String> {
    vec!["*.log".to_string(), "*.txt".to_string(), "*.dat".to_string()]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auto_refresh: default_auto_refresh(),
            refresh_interval_secs: default_refresh_interval_secs(),
            show_line_numbers: default_show_line_numbers(),
            wrap_lines: default_wrap_lines(),
            wrap_width: 0,
            tick_rate_ms: default_tick_rate_ms(),
            file_filters: default_file_filters(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::parse_or_default(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    /// Load config from an explicit file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match crate::read_config_file(path) {
            Some(content) => Self::parse_or_default(&content),
            None => {
                log::warn!("Config file {} not readable, using defaults", path.display());
                Self::default()
            }
        }
    }

    fn parse_or_default(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }

    /// Refresh interval as a duration (invalid values fall back to 1s)
    pub fn refresh_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.refresh_interval_secs)
            .unwrap_or_else(|_| Duration::from_secs_f64(default_refresh_interval_secs()))
    }

    /// Input poll timeout per frame, never below `MIN_TICK_RATE_MS`
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }

    /// Filter hint as shown in the open dialog, e.g. `*.log;*.txt;*.dat`
    pub fn filter_hint(&self) -> String {
        self.file_filters.join(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.auto_refresh);
        assert_eq!(config.refresh_interval(), Duration::from_secs(1));
        assert!(config.show_line_numbers);
        assert!(config.wrap_lines);
        assert_eq!(config.wrap_width, 0);
        assert_eq!(config.filter_hint(), "*.log;*.txt;*.dat");
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            auto_refresh = false
            refresh_interval_secs = 0.5
            wrap_width = 120
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert!(!config.auto_refresh);
        assert_eq!(config.refresh_interval(), Duration::from_millis(500));
        assert_eq!(config.wrap_width, 120);
        // Other fields should use defaults
        assert!(config.show_line_numbers);
        assert_eq!(config.tick_rate_ms, 50);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_negative_interval_falls_back() {
        let config = AppConfig {
            refresh_interval_secs: -3.0,
            ..AppConfig::default()
        };
        assert_eq!(config.refresh_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_zero_tick_rate_is_raised() {
        let config = AppConfig {
            tick_rate_ms: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(MIN_TICK_RATE_MS));
    }

    #[test]
    fn test_load_from_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "auto_refresh = \"maybe\"").unwrap();

        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "show_line_numbers = false\n").unwrap();

        assert!(!AppConfig::load_from(&path).show_line_numbers);
    }
}
