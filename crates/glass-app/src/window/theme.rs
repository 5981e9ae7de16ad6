//! OS theme resolution.

use glass_common::ThemeMode;

pub fn from_winit(theme: winit::window::Theme) -> ThemeMode {
    match theme {
        winit::window::Theme::Dark => ThemeMode::Dark,
        winit::window::Theme::Light => ThemeMode::Light,
    }
}

/// Ask the desktop environment directly. Used before a window exists or when
/// the window reports no theme. Unknown means light.
pub fn system_theme() -> ThemeMode {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => ThemeMode::Dark,
        Ok(_) => ThemeMode::Light,
        Err(e) => {
            tracing::debug!(error = %e, "system theme detection failed");
            ThemeMode::Light
        }
    }
}

/// Window theme first, then the desktop setting.
pub fn resolve(window_theme: Option<ThemeMode>) -> ThemeMode {
    window_theme.unwrap_or_else(system_theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winit_themes_map_directly() {
        assert_eq!(from_winit(winit::window::Theme::Dark), ThemeMode::Dark);
        assert_eq!(from_winit(winit::window::Theme::Light), ThemeMode::Light);
    }

    #[test]
    fn window_theme_takes_precedence() {
        assert_eq!(resolve(Some(ThemeMode::Dark)), ThemeMode::Dark);
        assert_eq!(resolve(Some(ThemeMode::Light)), ThemeMode::Light);
    }
}
