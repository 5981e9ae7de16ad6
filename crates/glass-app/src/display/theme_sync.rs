//! Merges theme signals from the window side and the chrome's media query.
//!
//! The most recent signal decides the mode. The glass flag is set once: the
//! first explicit value sticks and later contradicting values are ignored.

use glass_bridge::ThemeUpdate;
use glass_common::{ThemeMode, ThemeState};

#[derive(Debug, Default)]
pub struct ThemeSynchronizer {
    mode: Option<ThemeMode>,
    glass_enabled: Option<bool>,
    media_dark: Option<bool>,
}

impl ThemeSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pushed `theme:updated` payload, in either wire shape.
    ///
    /// A structured payload without a mode falls back to the last media-query
    /// result; with no media result either, the mode is left as is.
    pub fn apply_update(&mut self, update: &ThemeUpdate) -> ThemeState {
        let mode = update
            .mode()
            .or_else(|| self.media_dark.map(ThemeMode::from_dark));
        if let Some(mode) = mode {
            self.mode = Some(mode);
        }
        if let Some(enabled) = update.glass_enabled() {
            self.set_glass(enabled);
        }
        self.state()
    }

    /// The answer to a `theme:get` request.
    pub fn apply_mode(&mut self, mode: ThemeMode) -> ThemeState {
        self.mode = Some(mode);
        self.state()
    }

    /// A `prefers-color-scheme` change observed by the chrome page.
    pub fn apply_media_query(&mut self, dark: bool) -> ThemeState {
        self.media_dark = Some(dark);
        self.mode = Some(ThemeMode::from_dark(dark));
        self.state()
    }

    /// Remember the media-query result without applying it.
    pub fn observe_media_query(&mut self, dark: bool) {
        self.media_dark = Some(dark);
    }

    fn set_glass(&mut self, enabled: bool) {
        match self.glass_enabled {
            None => self.glass_enabled = Some(enabled),
            Some(current) if current != enabled => {
                tracing::warn!(current, ignored = enabled, "glass flag is fixed at startup");
            }
            Some(_) => {}
        }
    }

    pub fn mode(&self) -> Option<ThemeMode> {
        self.mode
    }

    pub fn glass_enabled(&self) -> Option<bool> {
        self.glass_enabled
    }

    /// Current merged state. Before any signal the page defaults apply
    /// (light, glass on).
    pub fn state(&self) -> ThemeState {
        ThemeState {
            mode: self.mode.unwrap_or_default(),
            glass_enabled: self.glass_enabled.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detailed(mode: Option<ThemeMode>, glass: Option<bool>) -> ThemeUpdate {
        ThemeUpdate::Detailed {
            mode,
            glass_enabled: glass,
        }
    }

    #[test]
    fn mode_only_update_keeps_glass_flag() {
        let mut sync = ThemeSynchronizer::new();
        sync.apply_update(&detailed(Some(ThemeMode::Light), Some(true)));
        let state = sync.apply_update(&detailed(Some(ThemeMode::Dark), None));
        assert_eq!(
            state,
            ThemeState {
                mode: ThemeMode::Dark,
                glass_enabled: true
            }
        );
    }

    #[test]
    fn bare_string_update_keeps_glass_flag() {
        let mut sync = ThemeSynchronizer::new();
        sync.apply_update(&detailed(Some(ThemeMode::Light), Some(false)));
        let state = sync.apply_update(&ThemeUpdate::Mode(ThemeMode::Dark));
        assert_eq!(state.mode, ThemeMode::Dark);
        assert!(!state.glass_enabled);
    }

    #[test]
    fn glass_flag_is_sticky() {
        let mut sync = ThemeSynchronizer::new();
        sync.apply_update(&detailed(Some(ThemeMode::Dark), Some(false)));
        let state = sync.apply_update(&detailed(Some(ThemeMode::Light), Some(true)));
        assert_eq!(state.mode, ThemeMode::Light);
        assert!(!state.glass_enabled);
        assert_eq!(sync.glass_enabled(), Some(false));
    }

    #[test]
    fn last_signal_wins_across_sources() {
        let mut sync = ThemeSynchronizer::new();
        sync.apply_update(&ThemeUpdate::Mode(ThemeMode::Dark));
        assert_eq!(sync.apply_media_query(false).mode, ThemeMode::Light);
        assert_eq!(sync.apply_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
        assert_eq!(
            sync.apply_update(&ThemeUpdate::Mode(ThemeMode::Light)).mode,
            ThemeMode::Light
        );
    }

    #[test]
    fn missing_mode_falls_back_to_media_query() {
        let mut sync = ThemeSynchronizer::new();
        sync.apply_mode(ThemeMode::Light);
        sync.observe_media_query(true);
        assert_eq!(sync.mode(), Some(ThemeMode::Light));

        let state = sync.apply_update(&detailed(None, Some(true)));
        assert_eq!(state.mode, ThemeMode::Dark);
        assert!(state.glass_enabled);
    }

    #[test]
    fn missing_mode_without_media_leaves_mode() {
        let mut sync = ThemeSynchronizer::new();
        sync.apply_mode(ThemeMode::Dark);
        let state = sync.apply_update(&detailed(None, None));
        assert_eq!(state.mode, ThemeMode::Dark);
    }

    #[test]
    fn defaults_before_any_signal() {
        let sync = ThemeSynchronizer::new();
        assert_eq!(sync.mode(), None);
        assert_eq!(sync.glass_enabled(), None);
        assert_eq!(
            sync.state(),
            ThemeState {
                mode: ThemeMode::Light,
                glass_enabled: true
            }
        );
    }
}
