//! Window attributes as a plain value.

use glass_common::{Color, ThemeMode};
use glass_config::ShellConfig;
use winit::dpi::LogicalSize;
use winit::window::WindowAttributes;

/// Everything needed to create the shell window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub decorations: bool,
    pub resizable: bool,
    pub transparent: bool,
    pub blur: bool,
    pub shadow: bool,
    /// macOS under-window vibrancy.
    pub vibrancy: bool,
    /// Background painted behind the chrome page.
    pub background: Color,
    /// Windows start hidden and are shown once the chrome page is ready.
    pub visible: bool,
}

impl WindowOptions {
    pub fn from_config(config: &ShellConfig, theme: ThemeMode) -> Self {
        let glass = config.glass.enabled;
        Self {
            title: config.window.title.clone(),
            width: config.window.width,
            height: config.window.height,
            min_width: config.window.min_width,
            min_height: config.window.min_height,
            decorations: !config.window.frameless,
            resizable: config.window.resizable,
            transparent: glass,
            blur: glass,
            shadow: glass,
            vibrancy: glass && cfg!(target_os = "macos"),
            background: config.glass.background_for(theme),
            visible: false,
        }
    }

    pub fn to_attributes(&self) -> WindowAttributes {
        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_min_inner_size(LogicalSize::new(self.min_width, self.min_height))
            .with_decorations(self.decorations)
            .with_resizable(self.resizable)
            .with_transparent(self.transparent)
            .with_blur(self.blur)
            .with_visible(self.visible);

        #[cfg(target_os = "macos")]
        let attrs = {
            use winit::platform::macos::WindowAttributesExtMacOS;
            attrs.with_has_shadow(self.shadow)
        };

        #[cfg(target_os = "windows")]
        let attrs = {
            use winit::platform::windows::WindowAttributesExtWindows;
            attrs.with_undecorated_shadow(self.shadow)
        };

        attrs
    }
}
