//! Environment-driven settings.

use glass_common::ConfigError;
use tracing::{debug, info};

use crate::schema::ShellConfig;

/// Setting this to a truthy value turns off translucency, shadow and
/// vibrancy in favour of an opaque, theme-colored background.
pub const DISABLE_GLASS_VAR: &str = "CHATGPT_DISABLE_GLASS";

/// Build a config from an environment lookup function.
///
/// Unset variables keep their defaults.
pub fn load_from_lookup<F>(lookup: F) -> Result<ShellConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ShellConfig::default();

    if let Some(raw) = lookup(DISABLE_GLASS_VAR) {
        let disabled = parse_flag(DISABLE_GLASS_VAR, &raw)?;
        config.glass.enabled = !disabled;
        if disabled {
            info!("glass effect disabled via {DISABLE_GLASS_VAR}");
        }
    } else {
        debug!("{DISABLE_GLASS_VAR} not set, glass effect enabled");
    }

    Ok(config)
}

/// Parse a boolean environment flag.
pub fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}
