//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_ui")]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: default_ui(),
            behavior: BehaviorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// UI pacing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_status_ttl")]
    pub status_ttl_secs: u64,
}

impl UiConfig {
    /// Tick period for the event loop, floored at 1ms since
    /// `tokio::time::interval` panics on a zero period.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Behavior toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
    #[serde(default = "default_true")]
    pub quit_on_q: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            quit_on_q: true,
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_rate() -> u64 {
    250
}
fn default_status_ttl() -> u64 {
    4
}
fn default_log_dir() -> String {
    "~/.local/share/farmup/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_ui() -> UiConfig {
    UiConfig {
        tick_rate_ms: default_tick_rate(),
        status_ttl_secs: default_status_ttl(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_work_out_of_the_box() {
        let config = AppConfig::default();
        assert!(config.behavior.seed_demo_data);
        assert!(config.behavior.quit_on_q);
        assert!(!config.logging.enabled);
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.ui.status_ttl_secs, 4);
    }

    #[test]
    fn test_partial_toml_fills_missing_fields() {
        let config: AppConfig = toml::from_str(
            "[behavior]\nseed_demo_data = false\n\n[logging]\nenabled = true\n",
        )
        .unwrap();
        assert!(!config.behavior.seed_demo_data);
        assert!(config.behavior.quit_on_q);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.ui.status_ttl_secs, 4);
    }

    #[test]
    fn test_zero_tick_rate_is_floored() {
        let config: AppConfig = toml::from_str("[ui]\ntick_rate_ms = 0\n").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 0);
        assert_eq!(config.ui.tick_interval(), Duration::from_millis(1));
        assert_eq!(
            AppConfig::default().ui.tick_interval(),
            Duration::from_millis(250)
        );
    }
}
