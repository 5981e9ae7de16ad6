//! Glass (translucency) settings.

use glass_common::{Color, ThemeMode};
use serde::{Deserialize, Serialize};

/// Translucency settings, fixed for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassConfig {
    /// Transparent, blurred window with shadow and (macOS) vibrancy.
    pub enabled: bool,
    /// Opaque background used in dark mode when glass is off.
    pub dark_background: String,
    /// Opaque background used in light mode when glass is off.
    pub light_background: String,
}

impl Default for GlassConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dark_background: "#1e1e1e".into(),
            light_background: "#f6f6f6".into(),
        }
    }
}

impl GlassConfig {
    /// Window/webview background for the given theme.
    ///
    /// Fully transparent while glass is on; otherwise the opaque color for
    /// `mode`. Unparsable colors fall back to the built-in defaults.
    pub fn background_for(&self, mode: ThemeMode) -> Color {
        if self.enabled {
            return Color::TRANSPARENT;
        }
        let (configured, fallback) = match mode {
            ThemeMode::Dark => (&self.dark_background, Color::from_rgba(0x1e, 0x1e, 0x1e, 255)),
            ThemeMode::Light => (&self.light_background, Color::from_rgba(0xf6, 0xf6, 0xf6, 255)),
        };
        Color::from_hex(configured).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glass_background_is_transparent() {
        let config = GlassConfig::default();
        assert_eq!(config.background_for(ThemeMode::Dark), Color::TRANSPARENT);
        assert_eq!(config.background_for(ThemeMode::Light), Color::TRANSPARENT);
    }

    #[test]
    fn opaque_background_follows_theme() {
        let config = GlassConfig {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(config.background_for(ThemeMode::Dark).to_hex(), "#1e1e1e");
        assert_eq!(config.background_for(ThemeMode::Light).to_hex(), "#f6f6f6");
    }

    #[test]
    fn bad_color_falls_back() {
        let config = GlassConfig {
            enabled: false,
            dark_background: "not-a-color".into(),
            ..Default::default()
        };
        assert_eq!(config.background_for(ThemeMode::Dark).to_hex(), "#1e1e1e");
    }
}
