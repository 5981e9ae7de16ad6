//! Window creation and webview setup.

use glass_common::{GeometrySnapshot, GlassError};
use glass_webview::{
    chrome_url, snapshot_to_wry, ContentProvider, WebViewConfig, WebViewManager,
};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::display::DisplayController;
use crate::window::{theme, WindowOptions};

use super::core::ShellApp;

/// Logical size of the window's content area, as a placeholder-free rect.
pub(super) fn full_window_geometry(window: &Window) -> GeometrySnapshot {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    GeometrySnapshot {
        x: 0,
        y: 0,
        width: size.width.max(0.0) as u32,
        height: size.height.max(0.0) as u32,
    }
}

impl ShellApp {
    /// Create the (hidden) window, its chrome webview and the bridge between
    /// them. The guest webview follows once the chrome reports its layout.
    pub(super) fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), GlassError> {
        let options = WindowOptions::from_config(&self.config, theme::system_theme());
        let window = event_loop
            .create_window(options.to_attributes())
            .map_err(|e| GlassError::Window(e.to_string()))?;

        #[cfg(target_os = "macos")]
        if options.vibrancy {
            use window_vibrancy::{apply_vibrancy, NSVisualEffectMaterial};
            if let Err(e) = apply_vibrancy(
                &window,
                NSVisualEffectMaterial::UnderWindowBackground,
                None,
                None,
            ) {
                tracing::warn!(error = %e, "Failed to apply vibrancy");
            }
        }

        let manager = self.webviews.get_or_insert_with(|| {
            let mut manager = WebViewManager::new();
            manager.set_content_provider(ContentProvider::bundled());
            manager
        });

        let chrome = manager
            .create(
                &window,
                snapshot_to_wry(&full_window_geometry(&window)),
                WebViewConfig::chrome(chrome_url(), options.transparent, options.background),
            )
            .map_err(|e| GlassError::WebView(e.to_string()))?;

        let (client, host) = glass_bridge::channel();
        self.controller.attach(window, host);
        self.display = Some(DisplayController::new(
            client,
            chrome,
            self.config.urls.clone(),
        ));
        self.guest_failed = false;

        // Queued until the chrome page starts polling its bridge
        self.controller.notify_theme();

        tracing::info!(
            glass = options.transparent,
            background = %options.background.to_hex(),
            "Window and chrome created"
        );
        Ok(())
    }

    /// Create the guest webview once the content container has a layout.
    pub(super) fn ensure_guest(&mut self) {
        if self.guest_failed {
            return;
        }
        let (Some(display), Some(window), Some(manager)) = (
            self.display.as_mut(),
            self.controller.window(),
            self.webviews.as_ref(),
        ) else {
            return;
        };
        if display.is_guest_attached() {
            return;
        }
        let Some(geometry) = display.geometry() else {
            return;
        };

        let config = WebViewConfig::guest(self.config.urls.app_url.clone());
        match manager.create(window, snapshot_to_wry(&geometry), config) {
            Ok(guest) => {
                tracing::info!(url = %self.config.urls.app_url, "Guest webview attached");
                display.attach_guest(guest);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create guest webview");
                self.guest_failed = true;
            }
        }
    }

    /// Keep the chrome webview covering the whole window.
    pub(super) fn resize_chrome(&self) {
        let (Some(display), Some(window)) = (&self.display, self.controller.window()) else {
            return;
        };
        if let Err(e) = display.dom().set_geometry(&full_window_geometry(window)) {
            tracing::warn!(error = %e, "Failed to resize chrome webview");
        }
    }

    /// With glass off, the chrome background tracks the OS theme.
    pub(super) fn sync_chrome_background(&self, mode: glass_common::ThemeMode) {
        if self.controller.glass_enabled() {
            return;
        }
        let Some(display) = &self.display else {
            return;
        };
        let color = self.config.glass.background_for(mode);
        if let Err(e) = display.dom().set_background_color(color) {
            tracing::warn!(error = %e, "Failed to update chrome background");
        }
    }
}
