//! Boot-time configuration for the glass shell.
//!
//! There are no config files. Everything is a compiled-in default except the
//! glass toggle, which is read once from the environment at startup.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use glass_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("glass enabled: {}", config.glass.enabled);
//! ```

pub mod env;
pub mod schema;
pub mod validation;

pub use env::{load_from_lookup, parse_flag, DISABLE_GLASS_VAR};
pub use schema::{GlassConfig, ShellConfig, UrlConfig, WindowConfig, APP_URL, STATUS_PAGE_URL};

use glass_common::ConfigError;

/// Load the configuration from the process environment and validate it.
pub fn load_config() -> Result<ShellConfig, ConfigError> {
    let config = load_from_lookup(|key| std::env::var(key).ok())?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string (used for debug logs).
pub fn config_to_json(config: &ShellConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&ShellConfig::default());
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"glass\""));
        assert!(json.contains("\"urls\""));
        assert!(json.contains("https://chatgpt.com"));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&ShellConfig::default());
        let parsed: ShellConfig = serde_json::from_str(&json).unwrap();
        assert!(parsed.glass.enabled);
        assert_eq!(parsed.window.width, 1280);
        assert_eq!(parsed.urls.app_url, APP_URL);
    }
}
